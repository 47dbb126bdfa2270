//! Canvas Breakout entry point
//!
//! In the browser this wires the canvas, pointer input and the tick interval
//! to an `App`. Natively it plays a headless game and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use canvas_breakout::GameConfig;
    use canvas_breakout::app::{App, TickOutcome};
    use canvas_breakout::platform::{IntervalScheduler, PointerSubscription, Scheduler, channel};
    use canvas_breakout::renderer::CanvasSurface;

    /// Everything that must outlive the start function
    struct Session {
        _scheduler: IntervalScheduler,
        _subscription: PointerSubscription,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Trace) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("Logger already set: {}", e)));
        }

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let config = GameConfig::load(&document);
        log::set_max_level(config.level().to_level_filter());
        log::info!("Canvas Breakout starting...");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| format!("no canvas #{}", config.canvas_id))?
            .dyn_into()?;

        let mut surface = CanvasSurface::new(canvas.clone())?;
        let (width, height) = surface.size();

        let (sender, receiver) = channel();
        let subscription = PointerSubscription::subscribe(&document, &canvas, sender)?;

        let period_ms = config.tick_interval_ms;
        let app = Rc::new(RefCell::new(App::new(config, width, height, receiver)));

        let mut scheduler = IntervalScheduler::new(window.clone());
        scheduler.start(
            period_ms,
            Box::new(move || {
                let outcome = app.borrow_mut().step(&mut surface);
                if outcome == TickOutcome::GameOver {
                    game_over(&window);
                }
            }),
        )?;

        // The game runs for the lifetime of the page; a reload is the only reset
        std::mem::forget(Session {
            _scheduler: scheduler,
            _subscription: subscription,
        });

        log::info!("Canvas Breakout running!");
        Ok(())
    }

    fn game_over(window: &web_sys::Window) {
        if let Err(e) = window.alert_with_message("Game Over") {
            log::error!("alert failed: {:?}", e);
        }
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().inspect_err(|e| log::error!("Startup failed: {:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_breakout::GameConfig;
    use canvas_breakout::app::run_headless;
    use canvas_breakout::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

    /// Upper bound on headless ticks; the ball can leave through the open top
    const MAX_TICKS: u64 = 100_000;

    env_logger::init();
    log::info!("Canvas Breakout (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let config = GameConfig::load(path.as_deref());

    let report = run_headless(config, DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, MAX_TICKS);
    log::info!(
        "Finished after {} ticks: game over = {}, bricks destroyed = {}, paddle hits = {}, draw calls = {}",
        report.ticks,
        report.game_over,
        report.bricks_destroyed,
        report.paddle_hits,
        report.draw_calls
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
