// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sequence-only transforms: slicing, zip, flatten, set operations, shuffle

use super::predicates::{every, filter};
use super::projection::map;
use crate::collection::index_of;
use crate::errors::{UnderbarError, UnderbarResult};
use crate::reduce::fold;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

/// First element, if any
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Up to the first `n` elements
pub fn first_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[..n.min(sequence.len())]
}

/// Last element, if any
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Up to the last `n` elements; `n == 0` yields an empty slice
pub fn last_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[sequence.len() - n.min(sequence.len())..]
}

/// Rows pairing up elements at the same index across all inputs
///
/// The result has as many rows as the longest input. Row `i` holds element
/// `i` of every input in argument order, `None` past an input's end.
///
/// # Example
///
/// ```rust
/// use underbar::transform::zip;
///
/// let rows = zip(&[vec!["a", "b"], vec!["x"]]);
/// assert_eq!(rows, vec![vec![Some("a"), Some("x")], vec![Some("b"), None]]);
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let rows = fold(sequences, 0, |longest, sequence| {
        longest.max(sequence.as_ref().len())
    });

    (0..rows)
        .map(|row| map(sequences, |sequence, _, _| sequence.as_ref().get(row).cloned()))
        .collect()
}

/// Arbitrarily nested sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// A leaf element
    Item(T),
    /// A nested sequence
    Seq(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Item(value)
    }
}

/// Flatten nested sequences of any depth, preserving order
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fold(nested, Vec::new(), |mut flat, element| {
        match element {
            Nested::Item(value) => flat.push(value.clone()),
            Nested::Seq(inner) => flat.extend(flatten(inner)),
        }
        flat
    })
}

/// Flatten a JSON array whose elements may themselves be arrays
///
/// # Errors
///
/// [`UnderbarError::InvalidArgument`] when `value` is not an array.
pub fn flatten_json(value: &Value) -> UnderbarResult<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(flatten_json_items(items)),
        _ => Err(UnderbarError::InvalidArgument(
            "flatten expects a JSON array".to_string(),
        )),
    }
}

fn flatten_json_items(items: &[Value]) -> Vec<Value> {
    fold(items, Vec::new(), |mut flat, element| {
        match element {
            Value::Array(inner) => flat.extend(flatten_json_items(inner)),
            leaf => flat.push(leaf.clone()),
        }
        flat
    })
}

/// Elements of the first sequence present in every other sequence
///
/// Keeps the first sequence's order and multiplicity.
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    filter(head.as_ref(), |value, _, _| {
        every(rest, |other| index_of(other.as_ref(), value).is_some())
    })
}

/// Elements of the first sequence absent from every other sequence
pub fn difference<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    filter(head.as_ref(), |value, _, _| {
        every(rest, |other| index_of(other.as_ref(), value).is_none())
    })
}

/// Uniformly random permutation of `sequence`, leaving the input untouched
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// [`shuffle`] driven by a caller-supplied random source
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
