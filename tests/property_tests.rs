// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Entry Point
//!
//! This test suite uses proptest to verify algebraic laws that the
//! collection operations must satisfy for all inputs.

mod property;
