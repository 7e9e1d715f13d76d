// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for collection operations and function decorators

use std::fmt::Display;
use thiserror::Error;

/// Errors that can occur in collection operations and decorators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnderbarError {
    /// Value is neither a sequence nor a mapping where one is required
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reduction over an empty collection without a seed
    #[error("Cannot reduce an empty collection without a seed")]
    EmptyReductionWithoutSeed,

    /// Memoize key derivation could not serialize the argument list
    #[error("Unserializable argument: {0}")]
    UnserializableArgument(String),

    /// Method name not supported by the element type
    #[error("Unknown method: {0}")]
    UnknownMethod(String),
}

/// Result type for collection operations and decorators
pub type UnderbarResult<T> = Result<T, UnderbarError>;

impl From<serde_json::Error> for UnderbarError {
    fn from(err: serde_json::Error) -> Self {
        UnderbarError::UnserializableArgument(err.to_string())
    }
}

impl serde::ser::Error for UnderbarError {
    fn custom<T: Display>(msg: T) -> Self {
        UnderbarError::UnserializableArgument(msg.to_string())
    }
}
