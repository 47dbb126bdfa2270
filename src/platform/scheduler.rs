//! Tick scheduling
//!
//! The game advances on a fixed period. In the browser that is a
//! `setInterval`; tests and the native runner drive ticks by hand.

use std::convert::Infallible;

/// Callback invoked once per tick
pub type TickFn = Box<dyn FnMut()>;

/// A single-threaded, fixed-period tick source
pub trait Scheduler {
    type Error;

    /// Start invoking `tick` every `period_ms`; replaces any running callback
    fn start(&mut self, period_ms: u32, tick: TickFn) -> Result<(), Self::Error>;

    /// Stop ticking and drop the callback
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Scheduler driven explicitly by the caller
#[derive(Default)]
pub struct ManualScheduler {
    period_ms: u32,
    callback: Option<TickFn>,
    /// Elapsed time not yet consumed by a tick
    accumulator_ms: u64,
    ticks: u64,
}

impl ManualScheduler {
    /// Run `count` ticks now. Returns how many ran (0 when stopped).
    pub fn advance(&mut self, count: u32) -> u32 {
        let Some(callback) = self.callback.as_mut() else {
            return 0;
        };
        for _ in 0..count {
            callback();
        }
        self.ticks += count as u64;
        count
    }

    /// Let `elapsed_ms` pass and run every tick that falls due
    pub fn advance_time(&mut self, elapsed_ms: u64) -> u32 {
        if self.callback.is_none() || self.period_ms == 0 {
            return 0;
        }
        self.accumulator_ms += elapsed_ms;
        let due = self.accumulator_ms / self.period_ms as u64;
        self.accumulator_ms %= self.period_ms as u64;
        self.advance(due as u32)
    }

    /// Total ticks run
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl Scheduler for ManualScheduler {
    type Error = Infallible;

    fn start(&mut self, period_ms: u32, tick: TickFn) -> Result<(), Infallible> {
        self.period_ms = period_ms;
        self.accumulator_ms = 0;
        self.callback = Some(tick);
        Ok(())
    }

    fn stop(&mut self) {
        self.callback = None;
    }

    fn is_running(&self) -> bool {
        self.callback.is_some()
    }
}

/// `setInterval`-backed scheduler (WASM only).
///
/// Do not call `stop` from inside the tick callback: it drops the closure
/// that is currently running.
#[cfg(target_arch = "wasm32")]
pub struct IntervalScheduler {
    window: web_sys::Window,
    handle: Option<i32>,
    closure: Option<wasm_bindgen::closure::Closure<dyn FnMut()>>,
}

#[cfg(target_arch = "wasm32")]
impl IntervalScheduler {
    pub fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            handle: None,
            closure: None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Scheduler for IntervalScheduler {
    type Error = wasm_bindgen::JsValue;

    fn start(&mut self, period_ms: u32, tick: TickFn) -> Result<(), Self::Error> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        self.stop();
        let closure = Closure::wrap(tick);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            )?;
        self.handle = Some(handle);
        self.closure = Some(closure);
        log::info!("Tick interval started ({} ms)", period_ms);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
        self.closure = None;
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
