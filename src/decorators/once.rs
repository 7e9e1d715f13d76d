// Copyright (c) 2025 - Cowboy AI, Inc.
//! Run-once decorator
//!
//! [`Once`] invokes its function on the first successful call and replays
//! that result on every later call, whatever arguments those calls carry.
//!
//! A call that fails (an `Err` from [`Once::try_call`], or a panic) does not
//! arm the wrapper: the next call invokes the function again.

use tracing::trace;

/// Wrapper that invokes its function at most once
pub struct Once<F, T> {
    func: F,
    result: Option<T>,
}

/// Wrap `func` so it runs at most once
///
/// # Examples
///
/// ```rust
/// use underbar::decorators::once;
///
/// let mut init = once(|seed: u32| seed * 10);
/// assert_eq!(init.call(1), 10);
/// assert_eq!(init.call(7), 10);
/// ```
pub fn once<F, T>(func: F) -> Once<F, T> {
    Once { func, result: None }
}

impl<F, T: Clone> Once<F, T> {
    /// Invoke the function on the first call; replay its result afterwards
    pub fn call<A>(&mut self, args: A) -> T
    where
        F: FnMut(A) -> T,
    {
        if let Some(result) = &self.result {
            trace!("Replaying cached result");
            return result.clone();
        }
        let result = (self.func)(args);
        self.result = Some(result.clone());
        result
    }

    /// Like [`Once::call`] for a fallible function
    ///
    /// Only an `Ok` result is kept. An `Err` is returned to the caller and
    /// the next call tries again.
    pub fn try_call<A, E>(&mut self, args: A) -> Result<T, E>
    where
        F: FnMut(A) -> Result<T, E>,
    {
        if let Some(result) = &self.result {
            trace!("Replaying cached result");
            return Ok(result.clone());
        }
        let result = (self.func)(args)?;
        self.result = Some(result.clone());
        Ok(result)
    }
}
