//! Repeating-task scheduling for the single-threaded pipeline.
//!
//! The host scripting convention of a callback re-arming itself by returning
//! its next run time is replaced with an explicitly polled task plus a
//! cancellation handle. No real timers: the host loop calls `poll` with the
//! current simulated time.

use std::cell::Cell;
use std::rc::Rc;

/// Cooperative cancellation handle for a repeating task.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// A fixed-cadence task driven by explicit `poll` calls.
#[derive(Debug)]
pub struct RepeatingTask {
    interval: f64,
    next_due: f64,
    cancel: CancelToken,
}

impl RepeatingTask {
    /// Task first due one full interval after `now`.
    pub fn new(interval: f64, now: f64) -> Self {
        Self {
            interval,
            next_due: now + interval,
            cancel: CancelToken::new(),
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// True when the task is due at `now`. Re-arms relative to the scheduled
    /// time so the cadence does not drift when a poll arrives late.
    pub fn poll(&mut self, now: f64) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        if now + f64::EPSILON < self.next_due {
            return false;
        }
        while self.next_due <= now + f64::EPSILON {
            self.next_due += self.interval;
        }
        true
    }
}
