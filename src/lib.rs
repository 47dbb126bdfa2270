//! Canvas Breakout - a ball, a paddle and a wall of bricks
//!
//! Core modules:
//! - `sim`: Game state, collisions and the per-tick update
//! - `renderer`: Drawing surface abstraction (canvas 2d / recording)
//! - `platform`: Pointer input channel and tick scheduling
//! - `config`: Layout and runtime configuration
//! - `app`: Application context tying the pieces together

pub mod app;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::App;
pub use config::{BrickLayout, GameConfig};

/// Game constants
pub mod consts {
    /// Ball radius (pixels)
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball spawn height above the bottom edge
    pub const BALL_SPAWN_LIFT: f32 = 30.0;
    /// Initial ball velocity (pixels per tick)
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 18.0;

    /// Default tick period (milliseconds)
    pub const TICK_INTERVAL_MS: u32 = 10;

    /// Canvas size used when no real canvas is attached
    pub const DEFAULT_CANVAS_WIDTH: f32 = 480.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 320.0;
}
