//! Collision rules
//!
//! Everything here is axis-aligned: side walls, a point-in-rectangle brick
//! test on the ball's center, and a span check against the paddle when the
//! ball reaches the bottom edge.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};

/// Outcome of the bottom-edge check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomCheck {
    /// Ball is not heading past the bottom edge this tick
    Clear,
    /// Ball bounced off the paddle
    PaddleHit,
    /// Ball is past the paddle
    Missed,
}

/// Negate `dx` when the ball's next x leaves the `[radius, width - radius]`
/// band. Returns true if the ball bounced.
pub fn bounce_side_walls(ball: &mut Ball, canvas_width: f32) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    if next_x > canvas_width - ball.radius || next_x < ball.radius {
        ball.vel.x = -ball.vel.x;
        true
    } else {
        false
    }
}

/// Strict point-in-rectangle test. Points on an edge are outside.
pub fn point_in_rect(point: Vec2, brick: &Brick) -> bool {
    point.x > brick.x
        && point.x < brick.x + brick.width
        && point.y > brick.y
        && point.y < brick.y + brick.height
}

/// Check the ball against the bottom edge, bouncing off the paddle when the
/// ball's center is within its span.
pub fn check_bottom(ball: &mut Ball, paddle: &Paddle, canvas_height: f32) -> BottomCheck {
    if ball.pos.y + ball.vel.y <= canvas_height - ball.radius {
        return BottomCheck::Clear;
    }

    if paddle.spans(ball.pos.x) {
        ball.vel.y = -ball.vel.y;
        BottomCheck::PaddleHit
    } else {
        BottomCheck::Missed
    }
}
