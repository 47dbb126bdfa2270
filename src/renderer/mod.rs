//! Rendering module
//!
//! The game only needs three primitives, so drawing goes through the small
//! [`Surface`] trait. In the browser it is backed by the canvas 2d context;
//! tests and the native runner record the calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::{Draw, draw_frame};

/// A 2d drawing target
pub trait Surface {
    /// Clear a rectangle to transparent
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Fill a circle centered at (cx, cy)
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str);
    /// Fill an axis-aligned rectangle with its top-left corner at (x, y)
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
}
