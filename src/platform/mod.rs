//! Platform abstraction layer
//!
//! Handles browser/native differences for the fixed-interval tick timer:
//! - `IntervalTimer`: `window.setInterval` on web
//! - `ManualTimer`: driven by hand, used natively and in tests
//!
//! A timer owns at most one running interval. Starting while running
//! cancels the old interval first.

use anyhow::Result;

/// Fixed-interval tick source
pub trait Timer {
    /// Start ticking every `period_ms`, cancelling any interval already running
    fn start(&mut self, period_ms: u32) -> Result<()>;

    /// Cancel the running interval, if any
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Timer with no clock behind it. Tracks intervals so tests can count them.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    active: Option<u32>,
    period_ms: u32,
    started: u32,
    cancelled: u32,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live intervals (0 or 1)
    pub fn active_count(&self) -> usize {
        usize::from(self.active.is_some())
    }

    /// Id of the live interval, ids count up from 1
    pub fn active_id(&self) -> Option<u32> {
        self.active
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn started(&self) -> u32 {
        self.started
    }

    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }
}

impl Timer for ManualTimer {
    fn start(&mut self, period_ms: u32) -> Result<()> {
        self.stop();
        self.started += 1;
        self.active = Some(self.started);
        self.period_ms = period_ms;
        Ok(())
    }

    fn stop(&mut self) {
        if self.active.take().is_some() {
            self.cancelled += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::IntervalTimer;

#[cfg(target_arch = "wasm32")]
mod web {
    use anyhow::{Result, anyhow};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use super::Timer;

    /// `window.setInterval` wrapper. The callback is kept alive for the timer's lifetime.
    pub struct IntervalTimer {
        callback: Closure<dyn FnMut()>,
        handle: Option<i32>,
    }

    impl IntervalTimer {
        pub fn new(callback: Closure<dyn FnMut()>) -> Self {
            Self {
                callback,
                handle: None,
            }
        }
    }

    impl Timer for IntervalTimer {
        fn start(&mut self, period_ms: u32) -> Result<()> {
            self.stop();
            let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
            let period = i32::try_from(period_ms)?;
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    self.callback.as_ref().unchecked_ref(),
                    period,
                )
                .map_err(|e| anyhow!("setInterval failed: {:?}", e))?;
            self.handle = Some(handle);
            Ok(())
        }

        fn stop(&mut self) {
            if let Some(handle) = self.handle.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle);
                }
            }
        }

        fn is_running(&self) -> bool {
            self.handle.is_some()
        }
    }

    impl Drop for IntervalTimer {
        fn drop(&mut self) {
            self.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_single_interval() {
        let mut timer = ManualTimer::new();
        assert!(!timer.is_running());

        timer.start(200).unwrap();
        assert_eq!(timer.active_count(), 1);
        assert_eq!(timer.period_ms(), 200);

        // Restart replaces the running interval
        timer.start(200).unwrap();
        assert_eq!(timer.active_count(), 1);
        assert_eq!(timer.active_id(), Some(2));
        assert_eq!(timer.cancelled(), 1);

        timer.stop();
        timer.stop();
        assert_eq!(timer.active_count(), 0);
        assert_eq!(timer.cancelled(), 2);
    }
}
