//! Application context
//!
//! One `App` per page session: it owns the config, the game state and the
//! receiving end of the pointer channel. The entry point builds it and hands
//! it to whatever drives the ticks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::GameConfig;
use crate::platform::{ManualScheduler, PointerMove, PointerReceiver, Scheduler, channel};
use crate::renderer::{RecordingSurface, Surface, draw_frame};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, apply_input, tick};

/// Result of one app step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Ball still in play
    Running,
    /// The ball got past the paddle on this step
    GameOver,
    /// Game already over; nothing was done
    Ended,
}

pub struct App {
    config: GameConfig,
    state: GameState,
    input: PointerReceiver,
}

impl App {
    pub fn new(
        config: GameConfig,
        canvas_width: f32,
        canvas_height: f32,
        input: PointerReceiver,
    ) -> Self {
        let state = GameState::new(canvas_width, canvas_height, &config.bricks);
        log::info!(
            "New game on {}x{} canvas with {} bricks",
            canvas_width,
            canvas_height,
            state.bricks.len()
        );
        Self {
            config,
            state,
            input,
        }
    }

    /// Run one tick: apply queued input, draw, then advance the simulation
    pub fn step(&mut self, surface: &mut dyn Surface) -> TickOutcome {
        if self.state.is_over() {
            return TickOutcome::Ended;
        }

        let input = TickInput {
            pointer_x: self.input.drain().iter().map(PointerMove::relative_x).collect(),
        };
        apply_input(&mut self.state, &input);
        draw_frame(&self.state, surface, &self.config.fill_color);

        match tick(&mut self.state) {
            GamePhase::Playing => TickOutcome::Running,
            GamePhase::Over => TickOutcome::GameOver,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Summary of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub game_over: bool,
    pub bricks_destroyed: usize,
    pub paddle_hits: u32,
    pub draw_calls: u64,
}

/// Play a game without a browser: the pointer sweeps back and forth across
/// the canvas and ticks are driven by a [`ManualScheduler`] until the game
/// ends or `max_ticks` have run.
pub fn run_headless(
    config: GameConfig,
    canvas_width: f32,
    canvas_height: f32,
    max_ticks: u64,
) -> HeadlessReport {
    let (sender, receiver) = channel();
    let period_ms = config.tick_interval_ms.max(1);
    let app = Rc::new(RefCell::new(App::new(
        config,
        canvas_width,
        canvas_height,
        receiver,
    )));
    let surface = Rc::new(RefCell::new(RecordingSurface::default()));
    let outcome = Rc::new(Cell::new(TickOutcome::Running));
    let paddle_hits = Rc::new(Cell::new(0u32));

    let mut scheduler = ManualScheduler::default();
    {
        let app = app.clone();
        let surface = surface.clone();
        let outcome = outcome.clone();
        let paddle_hits = paddle_hits.clone();
        let Ok(()) = scheduler.start(
            period_ms,
            Box::new(move || {
                let mut surface = surface.borrow_mut();
                surface.reset();
                let mut app = app.borrow_mut();
                outcome.set(app.step(&mut *surface));
                let hits = app
                    .state()
                    .events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::PaddleHit))
                    .count() as u32;
                paddle_hits.set(paddle_hits.get() + hits);
            }),
        );
    }

    let mut ticks = 0;
    while ticks < max_ticks && outcome.get() == TickOutcome::Running {
        // Slow sweep between the canvas edges
        let phase = ticks as f32 * 0.01;
        let client_x = canvas_width / 2.0 + (canvas_width / 2.0 - 1.0) * phase.sin();
        sender.send(PointerMove {
            client_x,
            offset_left: 0.0,
        });
        scheduler.advance(1);
        ticks += 1;
    }
    scheduler.stop();

    let app = app.borrow();
    log_final_frame(app.state(), &surface.borrow());
    let report = HeadlessReport {
        ticks,
        game_over: app.state().is_over(),
        bricks_destroyed: app.state().bricks.len() - app.state().bricks.alive_count(),
        paddle_hits: paddle_hits.get(),
        draw_calls: surface.borrow().total_calls(),
    };
    if !report.game_over {
        log::info!("Tick cap of {} reached", max_ticks);
    }
    report
}

/// Dump the final state and the last recorded frame at debug level
fn log_final_frame(state: &GameState, surface: &RecordingSurface) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    match serde_json::to_string(state) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize state: {}", e),
    }
    match surface.to_json() {
        Ok(json) => log::debug!("Last frame: {}", json),
        Err(e) => log::warn!("Could not serialize frame: {}", e),
    }
}
