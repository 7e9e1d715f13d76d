// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reduction Engine
//!
//! Folds a collection into a single accumulator, strictly left to right in
//! the Iteration Core's visitation order.
//!
//! # Seeded vs Unseeded
//!
//! ```text
//! seeded:    acc = seed;  acc = f(acc, v0); acc = f(acc, v1); ...
//! unseeded:  acc = v0;    acc = f(acc, v1); acc = f(acc, v2); ...
//! ```
//!
//! An unseeded reduction never passes the first element to the iterator, so
//! a single-element collection reduces to that element without a single
//! iterator call. An empty collection without a seed has no valid
//! accumulator and yields [`UnderbarError::EmptyReductionWithoutSeed`],
//! which is distinct from an empty seeded reduction returning its seed.
//!
//! # Example
//!
//! ```rust
//! use underbar::reduce::{fold, reduce};
//!
//! assert_eq!(reduce(&vec![1, 2, 3], |total, n| total + n, Some(0)).unwrap(), 6);
//! assert_eq!(reduce(&vec![5], |total, n| total + n * n, None).unwrap(), 5);
//! assert_eq!(fold(&vec!["a", "bb"], 0, |len, s| len + s.len()), 3);
//! ```

use crate::collection::{each, Collection};
use crate::errors::{UnderbarError, UnderbarResult};

/// Reduce a collection whose accumulator has the element type
///
/// # Arguments
///
/// * `collection` - Sequence or mapping to reduce
/// * `iterator` - Called once per post-seed element with `(accumulator, value)`
/// * `seed` - Initial accumulator; `None` uses the first element instead
///
/// # Errors
///
/// Returns [`UnderbarError::EmptyReductionWithoutSeed`] when the collection is
/// empty and no seed was given.
pub fn reduce<'a, T, C, F>(collection: C, mut iterator: F, seed: Option<T>) -> UnderbarResult<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(T, &'a T) -> T,
{
    let mut accumulator = seed;
    each(collection, |value, _, _| {
        accumulator = Some(match accumulator.take() {
            Some(current) => iterator(current, value),
            None => value.clone(),
        });
    });
    accumulator.ok_or(UnderbarError::EmptyReductionWithoutSeed)
}

/// Fold a collection into an accumulator of any type
///
/// Always seeded, so it cannot fail.
pub fn fold<'a, T, A, C, F>(collection: C, seed: A, mut iterator: F) -> A
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(A, &'a T) -> A,
{
    let collection: Collection<'a, T> = collection.into();
    collection
        .iter()
        .fold(seed, |accumulator, (value, _)| iterator(accumulator, value))
}
