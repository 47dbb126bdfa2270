//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Pointer input (DOM listener or scripted events)
//! - Tick scheduling (`setInterval` or manual stepping)

pub mod input;
pub mod scheduler;

pub use input::{PointerMove, PointerReceiver, PointerSender, channel};
#[cfg(target_arch = "wasm32")]
pub use input::PointerSubscription;
#[cfg(target_arch = "wasm32")]
pub use scheduler::IntervalScheduler;
pub use scheduler::{ManualScheduler, Scheduler, TickFn};
