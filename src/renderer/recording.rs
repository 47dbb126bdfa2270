//! Surface that records draw calls instead of painting

use serde::Serialize;

use super::Surface;

/// A recorded drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    ClearRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: String,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
}

/// Records every draw call until [`RecordingSurface::reset`]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    /// Total calls since creation, survives `reset`
    total: u64,
}

impl RecordingSurface {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget recorded commands (keeps the running total)
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn total_calls(&self) -> u64 {
        self.total
    }

    pub fn fill_rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }

    /// Recorded commands as JSON (for dumping a frame)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.commands)
    }

    fn push(&mut self, command: DrawCommand) {
        self.total += 1;
        self.commands.push(command);
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
        self.push(DrawCommand::FillCircle {
            cx,
            cy,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }
}
