// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rate-limiting decorator with a trailing edge
//!
//! A [`Throttle`] lets at most one call through immediately per window of
//! `wait`, and guarantees that a call made while the window is closed is
//! eventually honoured exactly once, at the window boundary.
//!
//! # Window State Machine
//!
//! ```text
//!                    call at t
//!                        │
//!      t > start + wait? ├── yes ──► invoke now, start = t        (Invoked)
//!                        │
//!                        no
//!                        │
//!       timer pending?   ├── yes ──► remember args per policy     (Coalesced)
//!                        │
//!                        no ───────► arm timer for start + wait   (Scheduled)
//!
//!   timer fires ──► start = now, clear timer, invoke with remembered args
//! ```
//!
//! The window is unset until the first call, so the first call is always
//! invoked immediately. Which arguments the trailing call receives is chosen
//! by [`TrailingArgs`].
//!
//! The armed timer only holds a weak reference to the wrapper's state.
//! Dropping the [`Throttle`] cancels a pending trailing call and releases the
//! wrapped function right away, even if the scheduler is never drained.

use crate::config::{ThrottleConfig, TrailingArgs};
use crate::scheduler::{IntoTaskResult, Scheduler, TaskResult, TimerHandle};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, trace};

/// What a throttled call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleOutcome {
    /// The function ran immediately
    Invoked,
    /// The window was closed; a trailing call was armed on this timer
    Scheduled(TimerHandle),
    /// The window was closed and a trailing call was already armed
    Coalesced(TimerHandle),
}

/// Throttled wrapper around a function
pub struct Throttle<A, S> {
    shared: Rc<Shared<A, S>>,
}

struct Shared<A, S> {
    func: RefCell<Box<dyn FnMut(A) -> TaskResult>>,
    window: RefCell<Window<A>>,
    scheduler: S,
    config: ThrottleConfig,
}

struct Window<A> {
    start: Option<Duration>,
    pending: Option<TimerHandle>,
    trailing_args: Option<A>,
}

/// Throttle `func` to one immediate call per `wait`, plus a trailing call
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use underbar::decorators::{throttle, ThrottleOutcome};
/// use underbar::scheduler::ManualScheduler;
///
/// let scheduler = ManualScheduler::new();
/// let saves = Rc::new(Cell::new(0));
/// let counter = saves.clone();
/// let save = throttle(move |()| counter.set(counter.get() + 1), Duration::from_millis(100), scheduler.clone());
///
/// assert_eq!(save.call(()).unwrap(), ThrottleOutcome::Invoked);
/// assert!(matches!(save.call(()).unwrap(), ThrottleOutcome::Scheduled(_)));
/// assert!(matches!(save.call(()).unwrap(), ThrottleOutcome::Coalesced(_)));
///
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(saves.get(), 2);
/// ```
pub fn throttle<A, F, R, S>(func: F, wait: Duration, scheduler: S) -> Throttle<A, S>
where
    A: 'static,
    F: FnMut(A) -> R + 'static,
    R: IntoTaskResult,
    S: Scheduler + 'static,
{
    throttle_with(func, ThrottleConfig::new(wait), scheduler)
}

/// [`throttle`] with an explicit configuration
pub fn throttle_with<A, F, R, S>(mut func: F, config: ThrottleConfig, scheduler: S) -> Throttle<A, S>
where
    A: 'static,
    F: FnMut(A) -> R + 'static,
    R: IntoTaskResult,
    S: Scheduler + 'static,
{
    Throttle {
        shared: Rc::new(Shared {
            func: RefCell::new(Box::new(move |args| func(args).into_task_result())),
            window: RefCell::new(Window {
                start: None,
                pending: None,
                trailing_args: None,
            }),
            scheduler,
            config,
        }),
    }
}

impl<A: 'static, S: Scheduler + 'static> Throttle<A, S> {
    /// Call the throttled function
    ///
    /// # Errors
    ///
    /// Only an immediate invocation can fail here; its error is returned
    /// unchanged. Failures of the trailing call go to the scheduler's failure
    /// channel.
    pub fn call(&self, args: A) -> anyhow::Result<ThrottleOutcome> {
        let now = self.shared.scheduler.now();
        let wait = self.shared.config.wait();
        let mut window = self.shared.window.borrow_mut();

        let Some(start) = window.start.filter(|start| now <= *start + wait) else {
            window.start = Some(now);
            drop(window);
            trace!(?now, "Throttle window opened");
            self.shared.invoke(args)?;
            return Ok(ThrottleOutcome::Invoked);
        };

        if let Some(timer) = window.pending {
            if self.shared.config.trailing == TrailingArgs::Latest {
                window.trailing_args = Some(args);
            }
            trace!(%timer, "Throttled call coalesced");
            return Ok(ThrottleOutcome::Coalesced(timer));
        }

        window.trailing_args = Some(args);
        drop(window);

        let remaining = (start + wait).saturating_sub(now);
        let state = Rc::downgrade(&self.shared);
        let timer = self.shared.scheduler.schedule_after(
            remaining,
            Box::new(move || match state.upgrade() {
                Some(shared) => shared.fire_trailing(),
                None => {
                    trace!("Throttle dropped before its trailing call");
                    Ok(())
                }
            }),
        );
        self.shared.window.borrow_mut().pending = Some(timer);

        debug!(%timer, ?remaining, "Trailing call scheduled");
        Ok(ThrottleOutcome::Scheduled(timer))
    }
}

impl<A, S: Scheduler> Shared<A, S> {
    fn invoke(&self, args: A) -> TaskResult {
        let mut func = self
            .func
            .try_borrow_mut()
            .map_err(|_| anyhow!("throttled function re-entered itself"))?;
        (&mut **func)(args)
    }

    fn fire_trailing(&self) -> TaskResult {
        let args = {
            let mut window = self.window.borrow_mut();
            window.start = Some(self.scheduler.now());
            window.pending = None;
            window.trailing_args.take()
        };
        trace!("Trailing call firing");
        match args {
            Some(args) => self.invoke(args),
            None => Ok(()),
        }
    }
}
