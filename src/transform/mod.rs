// Copyright (c) 2025 - Cowboy AI, Inc.
//! Derived Transform Library
//!
//! Higher-order operations built on the Iteration Core ([`crate::collection::each`])
//! and the Reduction Engine ([`crate::reduce`]). None of them mutate their
//! input; every result is a freshly allocated sequence or a scalar.
//!
//! # Available Transforms
//!
//! ## Sequences and Mappings
//! - `map`, `filter`, `reject`, `pluck`
//! - `every`, `some`, `every_truthy`, `some_truthy`, `contains`
//!
//! ## Sequences Only
//! - `uniq`, `uniq_by`, `sort_by`, `sort_by_property`, `invoke`, `invoke_method`
//! - `first`, `first_n`, `last`, `last_n`
//! - `zip`, `flatten`, `flatten_json`, `intersection`, `difference`
//! - `shuffle`, `shuffle_with`
//!
//! # Example
//!
//! ```rust
//! use underbar::transform::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//! let evens = filter(&numbers, |n, _, _| n % 2 == 0);
//! let odds = reject(&numbers, |n, _, _| n % 2 == 0);
//!
//! assert_eq!(evens, vec![2, 4, 6]);
//! assert_eq!(odds, vec![1, 3, 5]);
//! assert!(some(&numbers, |n| *n > 5));
//! ```

pub mod predicates;
pub mod projection;
pub mod sequence;

pub use predicates::{contains, every, every_truthy, filter, reject, some, some_truthy, Truthy};
pub use projection::{
    invoke, invoke_method, map, pluck, sort_by, sort_by_property, uniq, uniq_by, Criterion,
    Methods, Property,
};
pub use sequence::{
    difference, first, first_n, flatten, flatten_json, intersection, last, last_n, shuffle,
    shuffle_with, zip, Nested,
};
