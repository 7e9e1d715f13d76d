// Copyright (c) 2025 - Cowboy AI, Inc.
//! Functional collection utilities
//!
//! This crate provides a small functional toolkit over two collection shapes,
//! ordered sequences and string-keyed mappings, plus a set of stateful
//! function decorators.
//!
//! # Layers
//!
//! ```text
//! collection::each          single traversal primitive
//!        │
//!        ├── reduce / fold  accumulation
//!        │
//!        └── transform      map, filter, uniq, zip, flatten, ...
//!
//! merge                     extend / defaults over objects
//! decorators                once, memoize, delay, throttle
//!        └── scheduler      virtual-time or tokio timers
//! ```

pub mod collection;
pub mod config;
pub mod decorators;
pub mod errors;
pub mod merge;
pub mod reduce;
pub mod scheduler;
pub mod transform;

// Re-export commonly used types
pub use collection::{each, identity, index_of, Collection, Key, Mapping};
pub use config::{ThrottleConfig, TrailingArgs};
pub use decorators::{
    delay, memoize, once, throttle, throttle_with, Memoize, Once, Throttle, ThrottleOutcome,
};
pub use errors::{UnderbarError, UnderbarResult};
pub use merge::{defaults, extend, Object};
pub use reduce::{fold, reduce};
pub use scheduler::{
    ManualScheduler, Scheduler, TaskFailure, TaskResult, TimerHandle, TokioScheduler,
};
