// Copyright (c) 2025 - Cowboy AI, Inc.
//! Predicate-driven transforms: filter, reject, every, some, contains

use crate::collection::{Collection, Key};
use crate::reduce::fold;
use serde_json::Value;

/// Truthiness used when no predicate is supplied
///
/// Zero, empty strings, `false`, `None`, JSON `null` and NaN are falsy;
/// everything else is truthy.
pub trait Truthy {
    /// Whether the value counts as true
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_integer {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n.is_truthy()),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Elements for which the predicate holds, in visitation order
pub fn filter<'a, T, C, F>(collection: C, mut predicate: F) -> Vec<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T, Key<'a>, &Collection<'a, T>) -> bool,
{
    let mut kept = Vec::new();
    crate::collection::each(collection, |value, key, collection| {
        if predicate(value, key, collection) {
            kept.push(value.clone());
        }
    });
    kept
}

/// Elements for which the predicate fails, in visitation order
///
/// Exact complement of [`filter`] over the same traversal, so duplicate
/// values are kept or dropped individually.
pub fn reject<'a, T, C, F>(collection: C, mut predicate: F) -> Vec<T>
where
    T: Clone + 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T, Key<'a>, &Collection<'a, T>) -> bool,
{
    filter(collection, |value, key, collection| !predicate(value, key, collection))
}

/// True iff no element fails the predicate (vacuously true when empty)
pub fn every<'a, T, C, F>(collection: C, mut predicate: F) -> bool
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T) -> bool,
{
    fold(collection, true, |all, value| predicate(value) && all)
}

/// True iff at least one element passes the predicate (false when empty)
pub fn some<'a, T, C, F>(collection: C, mut predicate: F) -> bool
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T) -> bool,
{
    !every(collection, |value| !predicate(value))
}

/// [`every`] with truthiness as the predicate
pub fn every_truthy<'a, T, C>(collection: C) -> bool
where
    T: Truthy + 'a,
    C: Into<Collection<'a, T>>,
{
    every(collection, |value| value.is_truthy())
}

/// [`some`] with truthiness as the predicate
pub fn some_truthy<'a, T, C>(collection: C) -> bool
where
    T: Truthy + 'a,
    C: Into<Collection<'a, T>>,
{
    some(collection, |value| value.is_truthy())
}

/// True iff some element is equal to `target`
pub fn contains<'a, T, C>(collection: C, target: &T) -> bool
where
    T: PartialEq + 'a,
    C: Into<Collection<'a, T>>,
{
    fold(collection, false, |found, item| found || item == target)
}
