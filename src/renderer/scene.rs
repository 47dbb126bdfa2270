//! Drawing game entities onto a surface

use super::Surface;
use crate::sim::{Ball, Brick, GameState, Paddle};

/// Something that can draw itself
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface, canvas_height: f32, color: &str);
}

impl Draw for Ball {
    fn draw(&self, surface: &mut dyn Surface, _canvas_height: f32, color: &str) {
        surface.fill_circle(self.pos.x, self.pos.y, self.radius, color);
    }
}

impl Draw for Paddle {
    fn draw(&self, surface: &mut dyn Surface, canvas_height: f32, color: &str) {
        surface.fill_rect(
            self.x,
            self.y(canvas_height),
            self.width,
            self.height,
            color,
        );
    }
}

impl Draw for Brick {
    fn draw(&self, surface: &mut dyn Surface, _canvas_height: f32, color: &str) {
        if self.is_alive() {
            surface.fill_rect(self.x, self.y, self.width, self.height, color);
        }
    }
}

/// Clear the canvas and draw the ball, the paddle and every live brick
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface, color: &str) {
    let h = state.canvas_height;
    surface.clear_rect(0.0, 0.0, state.canvas_width, h);
    state.ball.draw(surface, h, color);
    state.paddle.draw(surface, h, color);
    for brick in state.bricks.iter() {
        brick.draw(surface, h, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrickLayout;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::BrickStatus;

    const BLUE: &str = "#0095DD";

    #[test]
    fn test_frame_order() {
        let state = GameState::new(480.0, 320.0, &BrickLayout::default());
        let mut surface = RecordingSurface::default();
        draw_frame(&state, &mut surface, BLUE);

        let commands = surface.commands();
        assert_eq!(commands.len(), 1 + 1 + 1 + 15);
        assert_eq!(
            commands[0],
            DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 480.0,
                height: 320.0
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::FillCircle {
                cx: 240.0,
                cy: 290.0,
                radius: 10.0,
                color: BLUE.to_string()
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::FillRect {
                x: 202.5,
                y: 302.0,
                width: 75.0,
                height: 18.0,
                color: BLUE.to_string()
            }
        );
        assert_eq!(
            commands[3],
            DrawCommand::FillRect {
                x: 30.0,
                y: 30.0,
                width: 75.0,
                height: 20.0,
                color: BLUE.to_string()
            }
        );
    }

    #[test]
    fn test_destroyed_bricks_not_drawn() {
        let mut state = GameState::new(480.0, 320.0, &BrickLayout::default());
        let mut ball = state.ball.clone();
        for (_, brick) in state.bricks.iter_mut().take(4) {
            ball.pos = glam::Vec2::new(brick.x + brick.width / 2.0, brick.y + brick.height / 2.0);
            assert!(brick.collision(&mut ball));
            assert_eq!(brick.status(), BrickStatus::Destroyed);
        }

        let mut surface = RecordingSurface::default();
        draw_frame(&state, &mut surface, BLUE);
        assert_eq!(surface.fill_rect_count(), 1 + 11);
    }
}
