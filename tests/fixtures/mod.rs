// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared Test Fixtures
//!
//! Deterministic records and settings used across the integration suites.
//! Set `RUST_LOG=underbar=trace` to see decorator and scheduler logs.

#![allow(dead_code)]

use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Window length used by throttle scenarios
pub const WAIT: Duration = Duration::from_millis(100);

/// Seed for reproducible shuffles
pub const SHUFFLE_SEED: u64 = 0x5eed;

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Milliseconds as a `Duration`
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Records with a name and an age, deliberately out of age order
pub fn people() -> Vec<Value> {
    vec![
        json!({"name": "moe", "age": 40}),
        json!({"name": "larry", "age": 50}),
        json!({"name": "curly", "age": 60}),
        json!({"name": "shemp", "age": 25}),
    ]
}

/// A JSON object from `value`, which must be an object literal
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {}", other),
    }
}
