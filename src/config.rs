// Copyright (c) 2025 - Cowboy AI, Inc.
//! Decorator configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which arguments the trailing-edge call of a throttled function receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingArgs {
    /// Arguments of the most recent call made during the window
    #[default]
    Latest,
    /// Arguments of the call that armed the trailing timer
    Scheduling,
}

/// Throttle configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleConfig {
    /// Window length in milliseconds
    pub wait_ms: u64,

    /// Argument policy for the trailing-edge call
    #[serde(default)]
    pub trailing: TrailingArgs,
}

impl ThrottleConfig {
    /// Create a configuration with the given window length
    pub fn new(wait: Duration) -> Self {
        Self {
            wait_ms: u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
            trailing: TrailingArgs::default(),
        }
    }

    /// Set the trailing-edge argument policy
    pub fn with_trailing(mut self, trailing: TrailingArgs) -> Self {
        self.trailing = trailing;
        self
    }

    /// Window length
    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
