// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Laws of the traversal, reduction, and transform operations.

mod collection_laws;
mod throttle_window;
