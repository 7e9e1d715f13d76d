// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deferred invocation

use crate::scheduler::{IntoTaskResult, Scheduler, TimerHandle};
use std::time::Duration;
use tracing::debug;

/// Invoke `func(args)` once, no earlier than `wait` from now
///
/// Returns immediately. The handle identifies the timer in logs and failure
/// reports; there is no cancellation. A failure of `func` is reported through
/// the scheduler's failure channel, never to the caller.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use underbar::decorators::delay;
/// use underbar::scheduler::ManualScheduler;
///
/// let scheduler = ManualScheduler::new();
/// let greeting = Rc::new(RefCell::new(String::new()));
/// let sink = greeting.clone();
///
/// delay(&scheduler, move |(a, b): (&str, &str)| {
///     *sink.borrow_mut() = format!("{a} {b}");
/// }, Duration::from_millis(500), ("hello", "world"));
///
/// scheduler.advance(Duration::from_millis(500));
/// assert_eq!(*greeting.borrow(), "hello world");
/// ```
pub fn delay<S, F, A, R>(scheduler: &S, func: F, wait: Duration, args: A) -> TimerHandle
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + 'static,
    A: 'static,
    R: IntoTaskResult,
{
    let timer = scheduler.schedule_after(wait, Box::new(move || func(args).into_task_result()));
    debug!(%timer, ?wait, "Delayed invocation scheduled");
    timer
}
