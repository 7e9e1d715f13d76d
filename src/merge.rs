// Copyright (c) 2025 - Cowboy AI, Inc.
//! Object Merge Utilities
//!
//! `extend` and `defaults` copy entries from an ordered list of sources into a
//! target object, mutating and returning the target. They work directly on
//! object entries rather than going through the Iteration Core.
//!
//! ```text
//! extend:   later sources win          target ← s1 ← s2 ← ...
//! defaults: first supplier wins, existing target keys are never touched
//! ```

use crate::collection::Mapping;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A string-keyed object whose entries can be merged
pub trait Object {
    /// Entry value type
    type Value: Clone;

    /// All entries in the object's iteration order
    fn entries(&self) -> Vec<(&str, &Self::Value)>;

    /// Whether `key` is present on the object itself
    fn has_own(&self, key: &str) -> bool;

    /// Insert or overwrite `key`
    fn put(&mut self, key: String, value: Self::Value);
}

impl<V: Clone> Object for Mapping<V> {
    type Value = V;

    fn entries(&self) -> Vec<(&str, &V)> {
        self.iter().map(|(key, value)| (key.as_str(), value)).collect()
    }

    fn has_own(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl<V: Clone> Object for BTreeMap<String, V> {
    type Value = V;

    fn entries(&self) -> Vec<(&str, &V)> {
        self.iter().map(|(key, value)| (key.as_str(), value)).collect()
    }

    fn has_own(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl Object for Map<String, Value> {
    type Value = Value;

    fn entries(&self) -> Vec<(&str, &Value)> {
        self.iter().map(|(key, value)| (key.as_str(), value)).collect()
    }

    fn has_own(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn put(&mut self, key: String, value: Value) {
        self.insert(key, value);
    }
}

/// Copy every entry of every source into `target`; later sources win
pub fn extend<'t, O: Object>(target: &'t mut O, sources: &[&O]) -> &'t mut O {
    for source in sources {
        for (key, value) in source.entries() {
            target.put(key.to_string(), value.clone());
        }
    }
    target
}

/// Fill keys missing from `target`; the first source supplying a key wins
pub fn defaults<'t, O: Object>(target: &'t mut O, sources: &[&O]) -> &'t mut O {
    for source in sources {
        for (key, value) in source.entries() {
            if !target.has_own(key) {
                target.put(key.to_string(), value.clone());
            }
        }
    }
    target
}
