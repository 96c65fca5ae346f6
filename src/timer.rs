//! One-shot auto-off countdown.
//!
//! The countdown is portable: it does not own a hardware timer or an async
//! executor. The platform sleeps until [`AutoOffTimer::deadline`] and then
//! calls [`AutoOffTimer::expire`] from its timer context.
//!
//! Expiry never touches the LED strip. It only submits a
//! [`GaugeWork::TurnOff`] item, which the gauge runs later from its worker
//! context (see [`BatteryGauge::process_pending`]).
//!
//! # Usage
//!
//! ```ignore
//! static WORK: OffWorkQueue = OffWorkQueue::new();
//! static TIMER: AutoOffTimer<'static> = AutoOffTimer::new(WORK.submitter());
//!
//! // Timer context
//! loop {
//!     if let Some(deadline) = TIMER.deadline() {
//!         Timer::at(deadline).await;
//!         TIMER.expire(Instant::now());
//!     }
//! }
//! ```
//!
//! [`BatteryGauge::process_pending`]: crate::BatteryGauge::process_pending

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};
use log::warn;

use crate::work::{GaugeWork, OffWorkSubmitter, Submitted};

/// Countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No countdown running
    Idle,
    /// Counting down to the deadline
    Armed(Instant),
    /// Deadline reached, turn-off work submitted but not yet run
    Fired,
}

/// Auto-off countdown paired with its deferred work item
pub struct AutoOffTimer<'a> {
    state: Mutex<Cell<TimerState>>,
    work: OffWorkSubmitter<'a>,
}

impl<'a> AutoOffTimer<'a> {
    /// Create an idle countdown submitting into `work` on expiry.
    pub const fn new(work: OffWorkSubmitter<'a>) -> Self {
        Self {
            state: Mutex::new(Cell::new(TimerState::Idle)),
            work,
        }
    }

    /// Start the countdown, replacing any previous one.
    pub fn arm(&self, duration: Duration, now: Instant) {
        critical_section::with(|cs| {
            self.state.borrow(cs).set(TimerState::Armed(now + duration));
            self.work.retract_in(cs, &GaugeWork::TurnOff);
        });
    }

    /// Stop the countdown.
    ///
    /// Safe to call when idle. A turn-off item submitted by an expiry that
    /// the worker has not run yet is retracted as well.
    pub fn cancel(&self) {
        critical_section::with(|cs| {
            self.state.borrow(cs).set(TimerState::Idle);
            self.work.retract_in(cs, &GaugeWork::TurnOff);
        });
    }

    /// Expiry callback.
    ///
    /// Call from the timer context once `now` may have reached the deadline.
    /// Returns `true` if the countdown fired on this call.
    ///
    /// The state change and the submit happen in one critical section, so a
    /// concurrent `arm` or `cancel` sees either both or neither.
    pub fn expire(&self, now: Instant) -> bool {
        critical_section::with(|cs| {
            let state = self.state.borrow(cs);
            let TimerState::Armed(deadline) = state.get() else {
                return false;
            };
            if now < deadline {
                return false;
            }
            match self.work.submit_in(cs, GaugeWork::TurnOff) {
                Ok(Submitted::Queued | Submitted::AlreadyQueued) => {
                    state.set(TimerState::Fired);
                    true
                }
                Err(_) => {
                    warn!("Auto-off work queue full, dropping turn-off");
                    false
                }
            }
        })
    }

    /// Get the current countdown state.
    pub fn state(&self) -> TimerState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    /// Get the pending deadline, if the countdown is armed.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state() {
            TimerState::Armed(deadline) => Some(deadline),
            TimerState::Idle | TimerState::Fired => None,
        }
    }

    /// Check if the countdown is running.
    pub fn is_armed(&self) -> bool {
        matches!(self.state(), TimerState::Armed(_))
    }
}
