// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stateful Function Decorators
//!
//! Each decorator wraps a function in a new callable that owns private state.
//! State is never shared between wrappers built from the same function.
//!
//! | Decorator  | State                         | Invocation                         |
//! |------------|-------------------------------|------------------------------------|
//! | `once`     | cached first result           | synchronous, at most once          |
//! | `memoize`  | result per argument list      | synchronous, once per distinct key |
//! | `delay`    | none                          | deferred via a [`Scheduler`]       |
//! | `throttle` | window start, pending timer   | immediate or trailing via a [`Scheduler`] |
//!
//! All decorators are single-threaded. A function that takes several
//! arguments is wrapped as a function of one tuple.
//!
//! [`Scheduler`]: crate::scheduler::Scheduler

pub mod delay;
pub mod memoize;
pub mod once;
pub mod throttle;

pub use delay::delay;
pub use memoize::{cache_key, memoize, Memoize};
pub use once::{once, Once};
pub use throttle::{throttle, throttle_with, Throttle, ThrottleOutcome};
