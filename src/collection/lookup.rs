// Copyright (c) 2025 - Cowboy AI, Inc.
//! Identity equality and linear search

use super::{each, Key};

/// Return the argument unchanged
///
/// Used as the default iterator wherever an operation accepts an optional
/// transformation.
pub fn identity<T>(value: T) -> T {
    value
}

/// Position of the first element equal to `target`, if any
///
/// Equality is `PartialEq` with no coercion between types.
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(sequence, |item, key, _| {
        if found.is_none() && item == target {
            if let Key::Index(index) = key {
                found = Some(index);
            }
        }
    });
    found
}
