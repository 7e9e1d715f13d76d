// Copyright (c) 2025 - Cowboy AI, Inc.
//! Virtual-time scheduler
//!
//! `ManualScheduler` is a single-threaded event loop whose clock only moves
//! when the owner calls [`ManualScheduler::advance`] or
//! [`ManualScheduler::run_until_idle`]. Timers fire in due order; timers due
//! at the same instant fire in the order they were scheduled. While a timer
//! fires, the clock reads exactly its due time.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//! use underbar::scheduler::{ManualScheduler, Scheduler, TaskResult};
//!
//! let scheduler = ManualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = fired.clone();
//!
//! scheduler.schedule_after(Duration::from_millis(50), Box::new(move || -> TaskResult {
//!     flag.set(true);
//!     Ok(())
//! }));
//!
//! scheduler.advance(Duration::from_millis(49));
//! assert!(!fired.get());
//! scheduler.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

use super::{run_task, Scheduler, Task, TaskFailure, TimerHandle};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, error, trace};

/// Deterministic scheduler with a manually driven clock
///
/// Clones share the same clock and timer queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_id: u64,
    /// Keyed by (due time, timer id) so iteration order is firing order
    queue: BTreeMap<(Duration, u64), Task>,
    failures: Vec<TaskFailure>,
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeline = self.timeline.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &timeline.now)
            .field("pending", &timeline.queue.len())
            .field("failures", &timeline.failures.len())
            .finish()
    }
}

impl ManualScheduler {
    /// Create a scheduler with its clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `by`, firing every timer that becomes due
    ///
    /// Timers scheduled by firing tasks are also fired if they fall due
    /// within the same window. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;
        while let Some((timer, task)) = self.pop_due(Some(target)) {
            self.fire(timer, task);
            ran += 1;
        }
        let mut timeline = self.timeline.borrow_mut();
        timeline.now = timeline.now.max(target);
        ran
    }

    /// Fire timers until none remain, moving the clock to each due time
    ///
    /// Returns the number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some((timer, task)) = self.pop_due(None) {
            self.fire(timer, task);
            ran += 1;
        }
        ran
    }

    /// Number of timers that have not fired yet
    pub fn pending(&self) -> usize {
        self.timeline.borrow().queue.len()
    }

    /// Drain the failures reported by fired tasks
    pub fn take_failures(&self) -> Vec<TaskFailure> {
        std::mem::take(&mut self.timeline.borrow_mut().failures)
    }

    fn pop_due(&self, limit: Option<Duration>) -> Option<(TimerHandle, Task)> {
        let mut timeline = self.timeline.borrow_mut();
        let (&(due, _), _) = timeline.queue.first_key_value()?;
        if limit.is_some_and(|limit| due > limit) {
            return None;
        }
        let ((due, id), task) = timeline.queue.pop_first()?;
        timeline.now = timeline.now.max(due);
        Some((TimerHandle::new(id), task))
    }

    fn fire(&self, timer: TimerHandle, task: Task) {
        trace!(%timer, now = ?self.now(), "Firing timer");
        if let Err(error) = run_task(task) {
            error!(%timer, "Deferred task failed: {:#}", error);
            self.timeline
                .borrow_mut()
                .failures
                .push(TaskFailure { timer, error });
        }
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    fn schedule_after(&self, wait: Duration, task: Task) -> TimerHandle {
        let mut timeline = self.timeline.borrow_mut();
        let id = timeline.next_id;
        timeline.next_id += 1;
        let due = timeline.now + wait;
        timeline.queue.insert((due, id), task);

        let timer = TimerHandle::new(id);
        debug!(%timer, ?wait, ?due, "Scheduled timer");
        timer
    }
}
