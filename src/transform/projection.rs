// Copyright (c) 2025 - Cowboy AI, Inc.
//! Element-wise projections: map, pluck, uniq, sort_by, invoke
//!
//! Property access and method dispatch go through small traits so that typed
//! records and dynamic JSON values share the same operations:
//!
//! - [`Property`]: read a named field (`pluck`, `sort_by_property`)
//! - [`Criterion`]: turn a field into a numeric sort key
//! - [`Methods`]: call a named method (`invoke_method`)

use crate::collection::{each, Collection, Key, Mapping};
use crate::errors::{UnderbarError, UnderbarResult};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Read access to named properties
pub trait Property {
    /// Type of a property value
    type Value;

    /// Value stored under `key`, if present
    fn property(&self, key: &str) -> Option<&Self::Value>;
}

impl Property for Value {
    type Value = Value;

    fn property(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

impl<V> Property for Mapping<V> {
    type Value = V;

    fn property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V> Property for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

/// Numeric sort criterion
///
/// Values without a numeric reading return NaN, which compares equal to
/// everything and therefore leaves relative order unchanged.
pub trait Criterion {
    /// Numeric value used for ordering
    fn criterion(&self) -> f64;
}

macro_rules! numeric_criterion {
    ($($ty:ty),*) => {
        $(impl Criterion for $ty {
            fn criterion(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

numeric_criterion!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl Criterion for Value {
    fn criterion(&self) -> f64 {
        match self {
            Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
            Value::Bool(flag) => f64::from(u8::from(*flag)),
            _ => f64::NAN,
        }
    }
}

/// Dispatch of named methods with a shared argument list
pub trait Methods<A> {
    /// Result of a method call
    type Output;

    /// Call the method named `name` on `self`
    ///
    /// # Errors
    ///
    /// [`UnderbarError::UnknownMethod`] when `name` is not supported for this
    /// value.
    fn call_method(&self, name: &str, args: &[A]) -> UnderbarResult<Self::Output>;
}

impl Methods<Value> for Value {
    type Output = Value;

    /// Built-in methods
    ///
    /// Without arguments: `len`, `keys`, `reverse`, `to_uppercase`,
    /// `to_lowercase`, `trim`. With arguments: `get(key)` reads a property
    /// (`null` when absent), `split(sep)` and `join(sep)` convert between
    /// strings and arrays of strings, `starts_with(prefix)` tests a string.
    fn call_method(&self, name: &str, args: &[Value]) -> UnderbarResult<Value> {
        match (name, self, args) {
            ("len", Value::String(text), []) => Ok(Value::from(text.chars().count())),
            ("len", Value::Array(items), []) => Ok(Value::from(items.len())),
            ("len", Value::Object(map), []) => Ok(Value::from(map.len())),
            ("keys", Value::Object(map), []) => {
                Ok(Value::Array(map.keys().cloned().map(Value::String).collect()))
            }
            ("reverse", Value::String(text), []) => Ok(Value::String(text.chars().rev().collect())),
            ("reverse", Value::Array(items), []) => {
                Ok(Value::Array(items.iter().rev().cloned().collect()))
            }
            ("to_uppercase", Value::String(text), []) => Ok(Value::String(text.to_uppercase())),
            ("to_lowercase", Value::String(text), []) => Ok(Value::String(text.to_lowercase())),
            ("trim", Value::String(text), []) => Ok(Value::String(text.trim().to_string())),
            ("get", target, [key]) => {
                let key = match key {
                    Value::String(key) => key.clone(),
                    other => other.to_string(),
                };
                Ok(target.property(&key).cloned().unwrap_or(Value::Null))
            }
            ("split", Value::String(text), [Value::String(separator)]) => Ok(Value::Array(
                text.split(separator.as_str())
                    .map(|part| Value::String(part.to_string()))
                    .collect(),
            )),
            ("join", Value::Array(items), [Value::String(separator)]) => {
                let parts = items
                    .iter()
                    .map(|item| match item {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>();
                Ok(Value::String(parts.join(separator.as_str())))
            }
            ("starts_with", Value::String(text), [Value::String(prefix)]) => {
                Ok(Value::Bool(text.starts_with(prefix.as_str())))
            }
            _ => Err(UnderbarError::UnknownMethod(name.to_string())),
        }
    }
}

/// Results of `iterator(value, key, collection)` in visitation order
pub fn map<'a, T, R, C, F>(collection: C, mut iterator: F) -> Vec<R>
where
    T: 'a,
    C: Into<Collection<'a, T>>,
    F: FnMut(&'a T, Key<'a>, &Collection<'a, T>) -> R,
{
    let collection: Collection<'a, T> = collection.into();
    let mut results = Vec::with_capacity(collection.len());
    each(collection, |value, key, collection| {
        results.push(iterator(value, key, collection));
    });
    results
}

/// Value of property `key` on every element; `None` where it is absent
pub fn pluck<'a, T, C>(collection: C, key: &str) -> Vec<Option<T::Value>>
where
    T: Property + 'a,
    T::Value: Clone,
    C: Into<Collection<'a, T>>,
{
    map(collection, |item, _, _| item.property(key).cloned())
}

/// De-duplicated sequence in first-occurrence order
///
/// `is_sorted` is a hint only. When set, a repeat of the last kept value is
/// recognised without scanning; anything else still goes through the full
/// scan, so the result never depends on the hint.
pub fn uniq<T>(sequence: &[T], is_sorted: bool) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut unique: Vec<T> = Vec::new();
    each(sequence, |value, _, _| {
        let seen = (is_sorted && unique.last() == Some(value)) || unique.contains(value);
        if !seen {
            unique.push(value.clone());
        }
    });
    unique
}

/// De-duplicated mapped values in first-occurrence order
///
/// Each element is first transformed by `iterator`; duplicates are then
/// removed from the mapped values.
pub fn uniq_by<T, R, F>(sequence: &[T], is_sorted: bool, mut iterator: F) -> Vec<R>
where
    R: PartialEq + Clone,
    F: FnMut(&T) -> R,
{
    let mapped = map(sequence, |value, _, _| iterator(value));
    uniq(&mapped, is_sorted)
}

/// Copy of `sequence` ordered by the criterion computed for each element
///
/// The criterion is computed once per element and the sort is stable.
/// Incomparable criteria (NaN) compare as equal.
pub fn sort_by<T, K, F>(sequence: &[T], mut criterion: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut keyed = map(sequence, |value, _, _| (criterion(value), value.clone()));
    keyed.sort_by(|(left, _), (right, _)| left.partial_cmp(right).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, value)| value).collect()
}

/// [`sort_by`] using the numeric value of property `key`
pub fn sort_by_property<T>(sequence: &[T], key: &str) -> Vec<T>
where
    T: Property + Clone,
    T::Value: Criterion,
{
    sort_by(sequence, |item| {
        item.property(key).map_or(f64::NAN, Criterion::criterion)
    })
}

/// Call `function` on every element with the same argument list
pub fn invoke<T, A, R, F>(sequence: &[T], mut function: F, args: &[A]) -> Vec<R>
where
    F: FnMut(&T, &[A]) -> R,
{
    map(sequence, |value, _, _| function(value, args))
}

/// Call the method named `name` on every element with the same argument list
///
/// # Errors
///
/// Fails if any element does not support `name`.
pub fn invoke_method<T, A>(sequence: &[T], name: &str, args: &[A]) -> UnderbarResult<Vec<T::Output>>
where
    T: Methods<A>,
{
    map(sequence, |value, _, _| value.call_method(name, args))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_map_sequence() {
        let doubled = map(&vec![1, 2, 3], |n, _, _| n * 2);
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_map_mapping_uses_keys() {
        let mut map_input = Mapping::new();
        map_input.insert("a".to_string(), 1);
        map_input.insert("b".to_string(), 2);

        let labelled = map(&map_input, |n, key, _| format!("{}={}", key, n));
        assert_eq!(labelled, vec!["a=1", "b=2"]);
    }

    #[test]
    fn test_pluck_json() {
        let people = vec![
            json!({"name": "moe", "age": 30}),
            json!({"name": "curly", "age": 50}),
            json!({"name": "larry"}),
        ];

        assert_eq!(
            pluck(&people, "age"),
            vec![Some(json!(30)), Some(json!(50)), None]
        );
    }

    #[test]
    fn test_uniq_first_occurrence_order() {
        assert_eq!(uniq(&[1, 2, 1, 3, 1, 4], false), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_uniq_sorted_fast_path_matches_general() {
        let sorted = [1, 1, 2, 3, 3, 3, 4];
        assert_eq!(uniq(&sorted, true), uniq(&sorted, false));
    }

    #[test]
    fn test_uniq_wrong_sorted_hint_is_harmless() {
        assert_eq!(uniq(&[1, 2, 1], true), vec![1, 2]);
        assert_eq!(uniq(&[3, 1, 3, 3, 2, 1], true), uniq(&[3, 1, 3, 3, 2, 1], false));
        assert_eq!(uniq_by(&[1, 2, 3], true, |n| n % 2), vec![1, 0]);
    }

    #[test]
    fn test_uniq_by_mapped_values() {
        let values = [1, 2, 3, 4];
        assert_eq!(uniq_by(&values, false, |n| n % 2 == 0), vec![false, true]);
    }

    #[test]
    fn test_sort_by_function() {
        let words = vec!["ccc", "a", "bb"];
        assert_eq!(sort_by(&words, |w| w.len()), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn test_sort_by_does_not_mutate_input() {
        let values = vec![3, 1, 2];
        let sorted = sort_by(&values, |n| *n);
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_property() {
        let people = vec![
            json!({"name": "curly", "age": 50}),
            json!({"name": "moe", "age": 30}),
        ];
        let sorted = sort_by_property(&people, "age");
        assert_eq!(sorted[0]["name"], json!("moe"));
        assert_eq!(sorted[1]["name"], json!("curly"));
    }

    #[test]
    fn test_sort_by_is_stable_for_missing_criteria() {
        let items = vec![json!({"id": "a"}), json!({"id": "b"})];
        assert_eq!(sort_by_property(&items, "rank"), items);
    }

    #[test]
    fn test_invoke_function() {
        let values = vec![1, 2, 3];
        let scaled = invoke(&values, |n, args: &[i32]| n * args[0] + args[1], &[10, 1]);
        assert_eq!(scaled, vec![11, 21, 31]);
    }

    #[test]
    fn test_invoke_method_by_name() {
        let words = vec![json!("dog"), json!("cat")];
        let upper = invoke_method::<Value, Value>(&words, "to_uppercase", &[]).unwrap();
        assert_eq!(upper, vec![json!("DOG"), json!("CAT")]);
    }

    #[test]
    fn test_invoke_method_forwards_arguments() {
        let lines = vec![json!("a,b"), json!("c")];
        let split = invoke_method(&lines, "split", &[json!(",")]).unwrap();
        assert_eq!(split, vec![json!(["a", "b"]), json!(["c"])]);

        let joined = invoke_method(&split, "join", &[json!("-")]).unwrap();
        assert_eq!(joined, vec![json!("a-b"), json!("c")]);

        let records = vec![json!({"name": "moe"}), json!({"age": 40})];
        let names = invoke_method(&records, "get", &[json!("name")]).unwrap();
        assert_eq!(names, vec![json!("moe"), Value::Null]);

        let rows = vec![json!(["x", "y"])];
        assert_eq!(invoke_method(&rows, "get", &[json!(1)]).unwrap(), vec![json!("y")]);
    }

    #[test]
    fn test_invoke_method_argument_count_matters() {
        let words = vec![json!("dog")];
        let err = invoke_method::<Value, Value>(&words, "split", &[]).unwrap_err();
        assert_eq!(err, UnderbarError::UnknownMethod("split".to_string()));
        assert!(invoke_method(&words, "trim", &[json!(" ")]).is_err());
        assert_eq!(
            invoke_method(&words, "starts_with", &[json!("do")]).unwrap(),
            vec![json!(true)]
        );
    }

    #[test]
    fn test_invoke_unknown_method() {
        let numbers = vec![json!(1)];
        let err = invoke_method::<Value, Value>(&numbers, "to_uppercase", &[]).unwrap_err();
        assert_eq!(err, UnderbarError::UnknownMethod("to_uppercase".to_string()));
    }
}
