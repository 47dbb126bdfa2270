//! Game state and core simulation types

use glam::Vec2;
use serde::Serialize;

use crate::config::BrickLayout;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GamePhase {
    /// Ball in flight
    #[default]
    Playing,
    /// Ball passed the paddle; terminal
    Over,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickDestroyed { column: usize, row: usize },
    WallBounce,
    PaddleHit,
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn a ball just above the bottom of the canvas, heading up and right
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            pos: Vec2::new(canvas_width / 2.0, canvas_height - BALL_SPAWN_LIFT),
            vel: Vec2::new(BALL_START_DX, BALL_START_DY),
            radius: BALL_RADIUS,
        }
    }

    /// Advance by one tick of velocity, then bounce off the side walls.
    ///
    /// Returns true if the ball bounced. The top and bottom edges are not
    /// handled here; the bottom is the paddle / game-over check.
    pub fn update(&mut self, canvas_width: f32) -> bool {
        self.pos += self.vel;
        super::collision::bounce_side_walls(self, canvas_width)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centered paddle
    pub fn new(canvas_width: f32) -> Self {
        Self {
            x: (canvas_width - PADDLE_WIDTH) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    /// Top edge; the paddle sits on the bottom of the canvas
    pub fn y(&self, canvas_height: f32) -> f32 {
        canvas_height - self.height
    }

    /// Center the paddle under a pointer at `relative_x` (pointer x minus
    /// canvas left offset).
    ///
    /// Positions on or outside the canvas edges are ignored. Only the pointer
    /// is range-checked, so the paddle itself may hang past either edge.
    /// Returns true if the paddle moved.
    pub fn pointer_moved(&mut self, relative_x: f32, canvas_width: f32) -> bool {
        if relative_x > 0.0 && relative_x < canvas_width {
            self.x = relative_x - self.width / 2.0;
            true
        } else {
            false
        }
    }

    /// Whether `x` lies strictly within the paddle's horizontal span
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.x + self.width
    }
}

/// Brick status; destroyed is permanent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BrickStatus {
    #[default]
    Alive,
    Destroyed,
}

/// A single brick
#[derive(Debug, Clone, Serialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    status: BrickStatus,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            status: BrickStatus::Alive,
        }
    }

    pub fn status(&self) -> BrickStatus {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status == BrickStatus::Alive
    }

    /// Test the ball against this brick; on a hit the ball's vertical
    /// velocity flips and the brick is destroyed. Returns true on a hit.
    pub fn collision(&mut self, ball: &mut Ball) -> bool {
        if !self.is_alive() || !super::collision::point_in_rect(ball.pos, self) {
            return false;
        }
        ball.vel.y = -ball.vel.y;
        self.status = BrickStatus::Destroyed;
        true
    }
}

/// Dense grid of bricks, stored column-major
#[derive(Debug, Clone, Serialize)]
pub struct BrickGrid {
    pub rows: usize,
    pub columns: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(layout: &BrickLayout) -> Self {
        let mut bricks = Vec::with_capacity(layout.len().min(BrickLayout::MAX_BRICKS));
        for column in 0..layout.columns {
            for row in 0..layout.rows {
                let (x, y) = layout.cell_origin(column, row);
                bricks.push(Brick::new(x, y, layout.width, layout.height));
            }
        }
        Self {
            rows: layout.rows,
            columns: layout.columns,
            bricks,
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.bricks.get(column * self.rows + row)
    }

    /// All bricks, column by column
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    /// All bricks with their (column, row), column by column
    pub fn iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut Brick)> {
        let rows = self.rows.max(1);
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, brick)| ((i / rows, i % rows), brick))
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Bricks still standing
    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(canvas_width: f32, canvas_height: f32, layout: &BrickLayout) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ball: Ball::new(canvas_width, canvas_height),
            paddle: Paddle::new(canvas_width),
            bricks: BrickGrid::new(layout),
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(480.0, 320.0, &BrickLayout::default());
        assert_eq!(state.ball.pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 202.5);
        assert_eq!(state.paddle.y(320.0), 302.0);
        assert_eq!(state.bricks.len(), 15);
        assert_eq!(state.bricks.alive_count(), 15);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_grid_is_column_major() {
        let grid = BrickGrid::new(&BrickLayout::default());
        let origins: Vec<(f32, f32)> = grid.iter().take(4).map(|b| (b.x, b.y)).collect();
        assert_eq!(origins, vec![(30.0, 30.0), (30.0, 60.0), (30.0, 90.0), (115.0, 30.0)]);

        let brick = grid.get(2, 1).unwrap();
        assert_eq!((brick.x, brick.y), (200.0, 60.0));
        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(0, 3).is_none());
    }

    #[test]
    fn test_grid_iter_mut_coordinates() {
        let mut grid = BrickGrid::new(&BrickLayout::default());
        let coords: Vec<(usize, usize)> = grid.iter_mut().map(|(c, _)| c).collect();
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[2], (0, 2));
        assert_eq!(coords[3], (1, 0));
        assert_eq!(coords[14], (4, 2));
    }

    #[test]
    fn test_ball_update_moves_by_velocity() {
        let mut ball = Ball::new(480.0, 320.0);
        let bounced = ball.update(480.0);
        assert!(!bounced);
        assert_eq!(ball.pos, Vec2::new(242.0, 288.0));
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_brick_hit_destroys_once() {
        let mut brick = Brick::new(30.0, 30.0, 75.0, 20.0);
        let mut ball = Ball::new(480.0, 320.0);
        ball.pos = Vec2::new(50.0, 35.0);

        assert!(brick.collision(&mut ball));
        assert_eq!(brick.status(), BrickStatus::Destroyed);
        assert_eq!(ball.vel.y, 2.0);

        // Destroyed bricks never react again
        assert!(!brick.collision(&mut ball));
        assert_eq!(brick.status(), BrickStatus::Destroyed);
        assert_eq!(ball.vel.y, 2.0);
    }

    #[test]
    fn test_brick_ignores_overlapping_rim() {
        // Circumference overlaps the brick but the center is outside
        let mut brick = Brick::new(30.0, 30.0, 75.0, 20.0);
        let mut ball = Ball::new(480.0, 320.0);
        ball.pos = Vec2::new(50.0, 55.0);

        assert!(!brick.collision(&mut ball));
        assert!(brick.is_alive());
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_paddle_follows_pointer_inside_canvas() {
        let mut paddle = Paddle::new(480.0);
        assert!(paddle.pointer_moved(100.0, 480.0));
        assert_eq!(paddle.x, 62.5);
    }

    #[test]
    fn test_paddle_ignores_pointer_on_or_outside_edges() {
        let mut paddle = Paddle::new(480.0);
        let start = paddle.x;
        assert!(!paddle.pointer_moved(0.0, 480.0));
        assert!(!paddle.pointer_moved(-20.0, 480.0));
        assert!(!paddle.pointer_moved(480.0, 480.0));
        assert!(!paddle.pointer_moved(900.0, 480.0));
        assert_eq!(paddle.x, start);
    }

    #[test]
    fn test_paddle_may_hang_past_edges() {
        let mut paddle = Paddle::new(480.0);

        assert!(paddle.pointer_moved(5.0, 480.0));
        assert!(paddle.x < 0.0);
        assert_eq!(paddle.x, -32.5);

        assert!(paddle.pointer_moved(475.0, 480.0));
        assert!(paddle.x > 480.0 - paddle.width);
        assert_eq!(paddle.x, 437.5);
    }
}
