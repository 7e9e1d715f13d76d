// Copyright (c) 2025 - Cowboy AI, Inc.
//! Iteration Core
//!
//! This module provides the single traversal primitive that every derived
//! collection operation is built on. Two collection shapes are supported and
//! treated identically by consumers:
//!
//! ```text
//! Sequence:  [v0, v1, v2, ...]        visited as (v_i, Index(i))
//! Mapping:   {k0: v0, k1: v1, ...}    visited as (v_k, Name(k))
//! ```
//!
//! # Shape Resolution
//!
//! The shape is resolved exactly once, when a value is converted into a
//! [`Collection`]. Typed Rust values (`&[T]`, `&Vec<T>`, `&Mapping<T>`,
//! `&BTreeMap<String, T>`) convert infallibly. Dynamic JSON values go through
//! `TryFrom<&serde_json::Value>`, which is the only place an unsupported shape
//! can be rejected.
//!
//! For mappings the key set is snapshotted at conversion time, so repeated
//! traversals of the same static mapping always visit keys in the same order.
//!
//! # Example
//!
//! ```rust
//! use underbar::collection::{each, Key};
//!
//! let mut seen = Vec::new();
//! each(&vec![10, 20, 30], |value, key, _| {
//!     if let Key::Index(i) = key {
//!         seen.push((i, *value));
//!     }
//! });
//! assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30)]);
//! ```

pub mod lookup;

pub use lookup::{identity, index_of};

use crate::errors::{UnderbarError, UnderbarResult};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Keyed collection with string keys, iterated in insertion order
pub type Mapping<V> = IndexMap<String, V>;

/// Position of an element within a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// 0-based position in a sequence
    Index(usize),
    /// Key in a mapping
    Name(&'a str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

/// A borrowed collection with its shape resolved
///
/// # Variants
///
/// - `Sequence`: index-addressable, visited in increasing index order
/// - `Mapping`: key/value entries snapshotted once, visited in snapshot order
#[derive(Debug)]
pub enum Collection<'a, T> {
    /// Ordered, 0-based sequence
    Sequence(&'a [T]),
    /// Keyed entries in a fixed visitation order
    Mapping(Vec<(&'a str, &'a T)>),
}

impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Collection::Sequence(items) => Collection::Sequence(*items),
            Collection::Mapping(entries) => Collection::Mapping(entries.clone()),
        }
    }
}

impl<'a, T> Collection<'a, T> {
    /// Number of elements that a traversal will visit
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(entries) => entries.len(),
        }
    }

    /// Whether a traversal will visit no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this collection is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Collection::Sequence(_))
    }

    /// Elements with their keys, in visitation order
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter {
            collection: self,
            position: 0,
        }
    }

    /// Look up an element by key
    ///
    /// Returns `None` when the key is absent or addresses the other shape
    /// (an index into a mapping, a name into a sequence).
    pub fn get(&self, key: Key<'_>) -> Option<&'a T> {
        match (self, key) {
            (Collection::Sequence(items), Key::Index(index)) => {
                let items: &'a [T] = *items;
                items.get(index)
            }
            (Collection::Mapping(entries), Key::Name(name)) => entries
                .iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|&(_, value)| value),
            _ => None,
        }
    }
}

/// Iterator over `(element, key)` pairs of a [`Collection`]
#[derive(Debug)]
pub struct Iter<'c, 'a, T> {
    collection: &'c Collection<'a, T>,
    position: usize,
}

impl<'a, T> Iterator for Iter<'_, 'a, T> {
    type Item = (&'a T, Key<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.collection {
            Collection::Sequence(items) => {
                let items: &'a [T] = *items;
                items.get(self.position).map(|value| (value, Key::Index(self.position)))
            }
            Collection::Mapping(entries) => entries
                .get(self.position)
                .map(|&(name, value)| (value, Key::Name(name))),
        }?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.collection.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, '_, T> {}

impl<'a, T> From<&'a [T]> for Collection<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Collection<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Collection::Sequence(items.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Collection<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Collection::Sequence(items.as_slice())
    }
}

impl<'a, T> From<&'a Mapping<T>> for Collection<'a, T> {
    fn from(map: &'a Mapping<T>) -> Self {
        Collection::Mapping(map.iter().map(|(key, value)| (key.as_str(), value)).collect())
    }
}

impl<'a, T> From<&'a BTreeMap<String, T>> for Collection<'a, T> {
    fn from(map: &'a BTreeMap<String, T>) -> Self {
        Collection::Mapping(map.iter().map(|(key, value)| (key.as_str(), value)).collect())
    }
}

impl<'a> TryFrom<&'a Value> for Collection<'a, Value> {
    type Error = UnderbarError;

    fn try_from(value: &'a Value) -> UnderbarResult<Self> {
        match value {
            Value::Array(items) => Ok(Collection::Sequence(items.as_slice())),
            Value::Object(map) => Ok(Collection::Mapping(
                map.iter().map(|(key, value)| (key.as_str(), value)).collect(),
            )),
            other => Err(UnderbarError::InvalidArgument(format!(
                "expected an array or object, got {}",
                json_kind(other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Visit every element of a collection
///
/// Sequences are visited at indices `0..len` in increasing order. Mappings are
/// visited in the order of the key snapshot taken when the collection was
/// resolved. The visitor receives the element, its key, and the collection
/// being traversed; it may be called zero times.
///
/// # Arguments
///
/// * `collection` - Anything convertible into a [`Collection`]
/// * `visitor` - Side-effecting callback invoked once per element
pub fn each<'a, T, C, F>(collection: C, mut visitor: F)
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T, Key<'a>, &Collection<'a, T>),
{
    let collection: Collection<'a, T> = collection.into();
    for (value, key) in collection.iter() {
        visitor(value, key, &collection);
    }
}
