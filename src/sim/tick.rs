//! Fixed-period simulation tick
//!
//! A frame is `apply_input`, then drawing (done by the caller), then `tick`.
//! Drawing sits between the two so the paddle is drawn where the pointer
//! last put it and the ball where the previous tick left it.

use super::collision::{BottomCheck, check_bottom};
use super::state::{GameEvent, GamePhase, GameState};

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x positions relative to the canvas left edge, oldest first
    pub pointer_x: Vec<f32>,
}

/// Apply queued pointer moves to the paddle in arrival order
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::Over {
        return;
    }
    for &x in &input.pointer_x {
        state.paddle.pointer_moved(x, state.canvas_width);
    }
}

/// Advance the game by one tick and return the resulting phase.
///
/// Order: brick collisions against the current ball position, ball
/// movement with side-wall bounce, then the paddle / bottom-edge check.
pub fn tick(state: &mut GameState) -> GamePhase {
    state.events.clear();

    if state.phase == GamePhase::Over {
        return GamePhase::Over;
    }

    state.time_ticks += 1;

    // Every live brick tests the same ball; two overlapping hits flip dy twice
    for ((column, row), brick) in state.bricks.iter_mut() {
        if brick.collision(&mut state.ball) {
            log::debug!("Brick ({}, {}) destroyed at tick {}", column, row, state.time_ticks);
            state.events.push(GameEvent::BrickDestroyed { column, row });
        }
    }

    if state.ball.update(state.canvas_width) {
        state.events.push(GameEvent::WallBounce);
    }

    match check_bottom(&mut state.ball, &state.paddle, state.canvas_height) {
        BottomCheck::Clear => {}
        BottomCheck::PaddleHit => state.events.push(GameEvent::PaddleHit),
        BottomCheck::Missed => {
            state.phase = GamePhase::Over;
            state.events.push(GameEvent::GameOver);
            log::info!(
                "Game over after {} ticks ({} bricks left)",
                state.time_ticks,
                state.bricks.alive_count()
            );
        }
    }

    state.phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BrickLayout;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(480.0, 320.0, &BrickLayout::default())
    }

    #[test]
    fn test_first_tick_moves_ball() {
        let mut state = new_state();
        assert_eq!(tick(&mut state), GamePhase::Playing);
        assert_eq!(state.ball.pos, Vec2::new(242.0, 288.0));
        assert_eq!(state.time_ticks, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_brick_hit_during_tick() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(50.0, 35.0);

        tick(&mut state);
        assert!(!state.bricks.get(0, 0).unwrap().is_alive());
        assert_eq!(state.bricks.alive_count(), 14);
        // dy flipped before the move
        assert_eq!(state.ball.vel.y, 2.0);
        assert_eq!(state.ball.pos, Vec2::new(52.0, 37.0));
        assert_eq!(
            state.events,
            vec![GameEvent::BrickDestroyed { column: 0, row: 0 }]
        );

        // Still inside the dead brick: no second flip
        tick(&mut state);
        assert_eq!(state.ball.vel.y, 2.0);
        assert_eq!(state.bricks.alive_count(), 14);
    }

    #[test]
    fn test_two_bricks_hit_in_one_tick_flip_twice() {
        // Negative padding stacks row 1 over row 0
        let layout = BrickLayout {
            rows: 2,
            padding: -15.0,
            ..Default::default()
        };
        let mut state = GameState::new(480.0, 320.0, &layout);
        state.ball.pos = Vec2::new(50.0, 47.0);

        tick(&mut state);
        assert_eq!(state.bricks.alive_count(), 8);
        assert_eq!(
            state.events,
            vec![
                GameEvent::BrickDestroyed { column: 0, row: 0 },
                GameEvent::BrickDestroyed { column: 0, row: 1 },
            ]
        );
        // The two flips cancel out
        assert_eq!(state.ball.vel.y, -2.0);
        assert_eq!(state.ball.pos, Vec2::new(52.0, 45.0));
    }

    #[test]
    fn test_ball_leaves_through_top() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(240.0, 5.0);

        for _ in 0..10 {
            assert_eq!(tick(&mut state), GamePhase::Playing);
            assert!(state.events.is_empty());
        }
        assert_eq!(state.ball.pos, Vec2::new(260.0, -15.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_miss_ends_game() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(20.0, 308.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        assert_eq!(tick(&mut state), GamePhase::Over);
        assert!(state.is_over());
        assert_eq!(state.events, vec![GameEvent::GameOver]);
    }

    #[test]
    fn test_paddle_bounce() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(238.0, 308.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        assert_eq!(tick(&mut state), GamePhase::Playing);
        assert_eq!(state.ball.vel.y, -2.0);
        assert_eq!(state.events, vec![GameEvent::PaddleHit]);
    }

    #[test]
    fn test_over_is_terminal() {
        let mut state = new_state();
        state.phase = GamePhase::Over;
        let before = state.ball.pos;
        let paddle_x = state.paddle.x;

        apply_input(&mut state, &TickInput { pointer_x: vec![100.0] });
        assert_eq!(tick(&mut state), GamePhase::Over);
        assert_eq!(state.ball.pos, before);
        assert_eq!(state.paddle.x, paddle_x);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_input_applied_in_order() {
        let mut state = new_state();
        let input = TickInput {
            pointer_x: vec![100.0, 600.0, 300.0, -5.0],
        };
        apply_input(&mut state, &input);
        // 600 and -5 are rejected; 300 was the last accepted
        assert_eq!(state.paddle.x, 262.5);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = new_state();
        let mut state2 = new_state();
        let input = TickInput {
            pointer_x: vec![120.0],
        };

        for _ in 0..500 {
            apply_input(&mut state1, &input);
            apply_input(&mut state2, &input);
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.bricks.alive_count(), state2.bricks.alive_count());
    }
}
