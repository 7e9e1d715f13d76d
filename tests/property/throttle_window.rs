// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Throttle Timing
//!
//! Arbitrary call schedules are replayed on a `ManualScheduler`, recording
//! the virtual time of every invocation.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use underbar::decorators::throttle;
use underbar::scheduler::{ManualScheduler, Scheduler};

const WAIT: Duration = Duration::from_millis(100);

/// Gaps between consecutive calls, in milliseconds
fn call_gaps() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..250, 1..60)
}

/// Replay `gaps` and return (call times, invocation times)
fn replay(gaps: &[u64]) -> (Vec<Duration>, Vec<Duration>) {
    let scheduler = ManualScheduler::new();
    let invocations = Rc::new(RefCell::new(Vec::new()));
    let (sink, clock) = (invocations.clone(), scheduler.clone());
    let throttled = throttle(move |()| sink.borrow_mut().push(clock.now()), WAIT, scheduler.clone());

    let mut calls = Vec::new();
    for gap in gaps {
        scheduler.advance(Duration::from_millis(*gap));
        calls.push(scheduler.now());
        throttled.call(()).unwrap();
    }
    scheduler.run_until_idle();

    let invoked = invocations.borrow().clone();
    (calls, invoked)
}

proptest! {
    /// Property: invocations are at least one window apart
    ///
    /// This bounds any closed interval of length `wait` to two invocations.
    #[test]
    fn prop_invocations_spaced_by_wait(gaps in call_gaps()) {
        let (_, invoked) = replay(&gaps);
        for pair in invoked.windows(2) {
            prop_assert!(pair[1] - pair[0] >= WAIT, "invocations too close: {:?}", pair);
        }
    }

    /// Property: every call is followed by an invocation at or after it
    #[test]
    fn prop_last_call_is_honoured(gaps in call_gaps()) {
        let (calls, invoked) = replay(&gaps);
        let last_call = calls.last().copied().unwrap_or_default();
        let last_invocation = invoked.last().copied().unwrap_or_default();
        prop_assert!(last_invocation >= last_call);
    }

    /// Property: the first call always runs immediately
    #[test]
    fn prop_first_call_is_immediate(gaps in call_gaps()) {
        let (calls, invoked) = replay(&gaps);
        prop_assert_eq!(invoked.first(), calls.first());
    }

    /// Property: no more invocations than calls
    #[test]
    fn prop_never_amplifies(gaps in call_gaps()) {
        let (calls, invoked) = replay(&gaps);
        prop_assert!(invoked.len() <= calls.len());
    }
}
