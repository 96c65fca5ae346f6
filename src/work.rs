//! Deferred work queue for `no_std` environments.
//!
//! Bridges a constrained context (a timer expiry callback or an interrupt)
//! and the context that is allowed to touch hardware. Built on
//! `critical-section` and `heapless::Deque`; submitting is safe from
//! interrupts, draining happens wherever the worker runs.
//!
//! A work item that is already queued is not queued twice.

use core::cell::RefCell;

use critical_section::{CriticalSection, Mutex};
use heapless::Deque;

/// Error returned when trying to submit to a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySubmitError<T>(pub T);

/// Error returned when trying to take from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryTakeError;

/// Outcome of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// The item was added to the queue
    Queued,
    /// An identical item was already waiting
    AlreadyQueued,
}

/// Work the gauge defers out of the timer context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeWork {
    /// Blank the display
    TurnOff,
}

/// Single-slot queue carrying the auto-off work item
pub type OffWorkQueue = WorkQueue<GaugeWork, 1>;

/// Submitter handle for an [`OffWorkQueue`]
pub type OffWorkSubmitter<'a> = WorkSubmitter<'a, GaugeWork, 1>;

/// Worker handle for an [`OffWorkQueue`]
pub type OffWorker<'a> = Worker<'a, GaugeWork, 1>;

/// A bounded, interrupt-safe queue of deduplicated work items.
pub struct WorkQueue<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T: PartialEq, const SIZE: usize> WorkQueue<T, SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a submitter handle for this queue.
    pub const fn submitter(&self) -> WorkSubmitter<'_, T, SIZE> {
        WorkSubmitter { queue: self }
    }

    /// Get a worker handle for this queue.
    ///
    /// Only one worker should drain the queue.
    pub const fn worker(&self) -> Worker<'_, T, SIZE> {
        Worker { queue: self }
    }

    /// Try to submit a work item.
    ///
    /// Returns `Err(TrySubmitError(item))` if the queue is full.
    pub fn try_submit(&self, item: T) -> Result<Submitted, TrySubmitError<T>> {
        critical_section::with(|cs| self.submit_in(cs, item))
    }

    /// Submit within a critical section the caller already holds.
    pub(crate) fn submit_in(
        &self,
        cs: CriticalSection<'_>,
        item: T,
    ) -> Result<Submitted, TrySubmitError<T>> {
        let mut queue = self.inner.borrow(cs).borrow_mut();
        if queue.iter().any(|queued| *queued == item) {
            return Ok(Submitted::AlreadyQueued);
        }
        queue
            .push_back(item)
            .map(|()| Submitted::Queued)
            .map_err(TrySubmitError)
    }

    /// Try to take the oldest work item.
    ///
    /// Returns `Err(TryTakeError)` if the queue is empty.
    pub fn try_take(&self) -> Result<T, TryTakeError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryTakeError)
        })
    }

    /// Remove a queued item before the worker runs it.
    ///
    /// Returns `true` if the item was waiting.
    pub fn retract(&self, item: &T) -> bool {
        critical_section::with(|cs| self.retract_in(cs, item))
    }

    /// Retract within a critical section the caller already holds.
    pub(crate) fn retract_in(&self, cs: CriticalSection<'_>, item: &T) -> bool {
        let mut queue = self.inner.borrow(cs).borrow_mut();
        let mut removed = false;
        for _ in 0..queue.len() {
            let Some(queued) = queue.pop_front() else {
                break;
            };
            if queued == *item {
                removed = true;
            } else {
                // Capacity is unchanged, the slot was just freed
                let _ = queue.push_back(queued);
            }
        }
        removed
    }

    /// Check if an item is waiting to run.
    pub fn is_pending(&self, item: &T) -> bool {
        critical_section::with(|cs| {
            let queue = self.inner.borrow(cs).borrow();
            queue.iter().any(|queued| queued == item)
        })
    }
}

impl<T: PartialEq, const SIZE: usize> Default for WorkQueue<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A submitter handle for a [`WorkQueue`].
///
/// This is a lightweight reference that can be copied into any context.
#[derive(Clone, Copy)]
pub struct WorkSubmitter<'a, T, const SIZE: usize> {
    queue: &'a WorkQueue<T, SIZE>,
}

impl<T: PartialEq, const SIZE: usize> WorkSubmitter<'_, T, SIZE> {
    /// Try to submit a work item.
    pub fn try_submit(&self, item: T) -> Result<Submitted, TrySubmitError<T>> {
        self.queue.try_submit(item)
    }

    /// Remove a queued item before the worker runs it.
    pub fn retract(&self, item: &T) -> bool {
        self.queue.retract(item)
    }

    /// Check if an item is waiting to run.
    pub fn is_pending(&self, item: &T) -> bool {
        self.queue.is_pending(item)
    }

    pub(crate) fn submit_in(
        &self,
        cs: CriticalSection<'_>,
        item: T,
    ) -> Result<Submitted, TrySubmitError<T>> {
        self.queue.submit_in(cs, item)
    }

    pub(crate) fn retract_in(&self, cs: CriticalSection<'_>, item: &T) -> bool {
        self.queue.retract_in(cs, item)
    }
}

/// A worker handle for a [`WorkQueue`].
#[derive(Clone, Copy)]
pub struct Worker<'a, T, const SIZE: usize> {
    queue: &'a WorkQueue<T, SIZE>,
}

impl<T: PartialEq, const SIZE: usize> Worker<'_, T, SIZE> {
    /// Try to take the oldest work item.
    pub fn try_take(&self) -> Result<T, TryTakeError> {
        self.queue.try_take()
    }
}
