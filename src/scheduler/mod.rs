// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cooperative Timer Facility
//!
//! Deferred decorators (`delay`, `throttle`) never touch a clock or a runtime
//! directly. They are handed a [`Scheduler`], which provides two things:
//!
//! - `now()`: elapsed time since the scheduler's epoch
//! - `schedule_after(wait, task)`: run `task` once, no earlier than `wait`
//!   from now, on the same logical thread as everything else
//!
//! # Implementations
//!
//! - [`ManualScheduler`]: virtual-time event loop driven by `advance`; fully
//!   deterministic, used for testing timing windows
//! - [`TokioScheduler`]: real timers on a `tokio` `LocalSet`
//!
//! # Failure Channel
//!
//! A task returns [`TaskResult`]. Errors and panics from a task are caught
//! by [`run_task`], logged, and delivered to the scheduler's failure channel
//! as a [`TaskFailure`]. They never unwind through the event loop.
//!
//! ```text
//! schedule_after(wait, task)
//!        │
//!        ▼   (at least `wait` later)
//!   run_task(task) ──Ok──► done
//!        │
//!        └─Err/panic──► error! log ──► TaskFailure channel
//! ```

pub mod manual;
pub mod runtime;

pub use manual::ManualScheduler;
pub use runtime::TokioScheduler;

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

/// Outcome of a deferred task
pub type TaskResult = anyhow::Result<()>;

/// A unit of deferred work
pub type Task = Box<dyn FnOnce() -> TaskResult>;

/// Identifier of a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Create a handle from a raw timer id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw timer id
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// A deferred task that failed
#[derive(Debug)]
pub struct TaskFailure {
    /// Timer whose task failed
    pub timer: TimerHandle,
    /// Error returned by the task, or the panic message
    pub error: anyhow::Error,
}

/// Single-threaded timer facility
pub trait Scheduler {
    /// Time elapsed since this scheduler's epoch
    fn now(&self) -> Duration;

    /// Run `task` once, no earlier than `wait` from now
    fn schedule_after(&self, wait: Duration, task: Task) -> TimerHandle;
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn schedule_after(&self, wait: Duration, task: Task) -> TimerHandle {
        (**self).schedule_after(wait, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for std::rc::Rc<S> {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn schedule_after(&self, wait: Duration, task: Task) -> TimerHandle {
        (**self).schedule_after(wait, task)
    }
}

/// Conversion of a wrapped function's return value into a [`TaskResult`]
///
/// Lets deferred decorators accept both infallible functions (returning `()`)
/// and fallible ones (returning `Result<(), E>`).
pub trait IntoTaskResult {
    /// Convert into a task outcome
    fn into_task_result(self) -> TaskResult;
}

impl IntoTaskResult for () {
    fn into_task_result(self) -> TaskResult {
        Ok(())
    }
}

impl<E> IntoTaskResult for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    fn into_task_result(self) -> TaskResult {
        self.map_err(Into::into)
    }
}

/// Run a task, converting a panic into an error
pub fn run_task(task: Task) -> TaskResult {
    match catch_unwind(AssertUnwindSafe(task)) {
        Ok(result) => result,
        Err(payload) => Err(anyhow::anyhow!(
            "deferred task panicked: {}",
            panic_message(payload.as_ref())
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
