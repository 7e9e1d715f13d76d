// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tokio-backed scheduler
//!
//! Timers are `spawn_local` tasks sleeping on the tokio clock, so a
//! [`TokioScheduler`] must be used from inside a [`tokio::task::LocalSet`].
//! Everything runs on the `LocalSet`'s thread, which keeps the
//! single-threaded contract of the decorators.
//!
//! Failed tasks are logged at `error` level. A scheduler created with
//! [`TokioScheduler::with_failures`] also forwards each failure to a channel.

use super::{run_task, Scheduler, Task, TaskFailure, TimerHandle};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;
use tracing::{debug, error, warn};

/// Scheduler running timers on the current `LocalSet`
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    epoch: Instant,
    next_id: Rc<Cell<u64>>,
    failures: Option<UnboundedSender<TaskFailure>>,
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self {
            epoch: Instant::now(),
            next_id: Rc::new(Cell::new(0)),
            failures: None,
        }
    }
}

impl TokioScheduler {
    /// Create a scheduler whose epoch is the current tokio instant
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scheduler that also reports task failures on a channel
    pub fn with_failures() -> (Self, UnboundedReceiver<TaskFailure>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            failures: Some(sender),
            ..Self::default()
        };
        (scheduler, receiver)
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn schedule_after(&self, wait: Duration, task: Task) -> TimerHandle {
        let timer = TimerHandle::new(self.next_id.get());
        self.next_id.set(timer.id() + 1);

        let deadline = Instant::now() + wait;
        let failures = self.failures.clone();

        tokio::task::spawn_local(async move {
            tokio::time::sleep_until(deadline).await;
            if let Err(error) = run_task(task) {
                error!(%timer, "Deferred task failed: {:#}", error);
                if let Some(failures) = failures {
                    if failures.send(TaskFailure { timer, error }).is_err() {
                        warn!(%timer, "Failure receiver dropped");
                    }
                }
            }
        });

        debug!(%timer, ?wait, "Scheduled timer");
        timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TaskResult;
    use tokio::task::LocalSet;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_wait() {
        LocalSet::new()
            .run_until(async {
                let scheduler = TokioScheduler::new();
                let fired = Rc::new(Cell::new(false));
                let flag = fired.clone();

                scheduler.schedule_after(
                    ms(100),
                    Box::new(move || -> TaskResult {
                        flag.set(true);
                        Ok(())
                    }),
                );

                tokio::time::sleep(ms(99)).await;
                assert!(!fired.get());

                tokio::time::sleep(ms(2)).await;
                assert!(fired.get());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_now_tracks_tokio_clock() {
        let scheduler = TokioScheduler::new();
        tokio::time::advance(ms(250)).await;
        assert_eq!(scheduler.now(), ms(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_reach_channel() {
        LocalSet::new()
            .run_until(async {
                let (scheduler, mut failures) = TokioScheduler::with_failures();

                let timer = scheduler.schedule_after(
                    ms(10),
                    Box::new(|| -> TaskResult { Err(anyhow::anyhow!("callback failed")) }),
                );

                let failure = failures.recv().await.expect("failure reported");
                assert_eq!(failure.timer, timer);
                assert_eq!(failure.error.to_string(), "callback failed");
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ids_increase() {
        LocalSet::new()
            .run_until(async {
                let scheduler = TokioScheduler::new();
                let first = scheduler.schedule_after(ms(1), Box::new(|| -> TaskResult { Ok(()) }));
                let second = scheduler.schedule_after(ms(1), Box::new(|| -> TaskResult { Ok(()) }));
                assert!(second > first);
            })
            .await;
    }
}
