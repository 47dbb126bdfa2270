//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! the caller feeds input, draws, and then advances one tick at a time.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{BottomCheck, bounce_side_walls, check_bottom, point_in_rect};
pub use state::{Ball, Brick, BrickGrid, BrickStatus, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, apply_input, tick};
