// Copyright (c) 2025 - Cowboy AI, Inc.
//! Memoizing decorator
//!
//! [`Memoize`] caches results by argument list. The cache key is the compact
//! JSON text of the arguments after conversion to a `serde_json::Value`,
//! which makes it canonical: positional order is kept and object keys are
//! sorted. Pass several arguments as a tuple.
//!
//! Arguments that cannot be represented as JSON are rejected with
//! [`UnderbarError::UnserializableArgument`] before the function runs. That
//! covers maps with non-string keys and non-finite floats (`NaN`, `±inf`),
//! which JSON would otherwise collapse into `null`.
//!
//! Like [`super::Once`], only successful results are cached.

use crate::errors::{UnderbarError, UnderbarResult};
use serde::ser::{self, Serialize};
use std::collections::HashMap;
use tracing::trace;

/// Wrapper that invokes its function at most once per distinct argument list
pub struct Memoize<F, T> {
    func: F,
    cache: HashMap<String, T>,
}

/// Wrap `func` with a per-argument-list result cache
///
/// # Examples
///
/// ```rust
/// use underbar::decorators::memoize;
///
/// let mut area = memoize(|(width, height): (u32, u32)| width * height);
/// assert_eq!(area.call((3, 4)).unwrap(), 12);
/// assert_eq!(area.call((3, 4)).unwrap(), 12);
/// ```
pub fn memoize<F, T>(func: F) -> Memoize<F, T> {
    Memoize {
        func,
        cache: HashMap::new(),
    }
}

/// Canonical cache key for an argument list
pub fn cache_key<A: Serialize>(args: &A) -> UnderbarResult<String> {
    args.serialize(FiniteCheck)?;
    Ok(serde_json::to_value(args)?.to_string())
}

/// Serializer that only walks a value, failing on non-finite floats
struct FiniteCheck;

type Checked = Result<(), UnderbarError>;

macro_rules! accept_scalars {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(fn $method(self, _value: $ty) -> Checked {
            Ok(())
        })*
    };
}

impl ser::Serializer for FiniteCheck {
    type Ok = ();
    type Error = UnderbarError;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    accept_scalars!(
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
    );

    fn serialize_f32(self, value: f32) -> Checked {
        self.serialize_f64(f64::from(value))
    }

    fn serialize_f64(self, value: f64) -> Checked {
        if value.is_finite() {
            Ok(())
        } else {
            Err(UnderbarError::UnserializableArgument(format!(
                "non-finite number {value} has no JSON form"
            )))
        }
    }

    fn serialize_none(self) -> Checked {
        Ok(())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Checked {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Checked {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Checked {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Checked {
        Ok(())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Checked {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Checked {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self, UnderbarError> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self, UnderbarError> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self, UnderbarError> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, UnderbarError> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self, UnderbarError> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self, UnderbarError> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, UnderbarError> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteCheck {
    type Ok = ();
    type Error = UnderbarError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Checked {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Checked {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteCheck {
    type Ok = ();
    type Error = UnderbarError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Checked {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Checked {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteCheck {
    type Ok = ();
    type Error = UnderbarError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Checked {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Checked {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteCheck {
    type Ok = ();
    type Error = UnderbarError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Checked {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Checked {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteCheck {
    type Ok = ();
    type Error = UnderbarError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Checked {
        key.serialize(FiniteCheck)
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Checked {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Checked {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteCheck {
    type Ok = ();
    type Error = UnderbarError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _key: &'static str, value: &T) -> Checked {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Checked {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteCheck {
    type Ok = ();
    type Error = UnderbarError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _key: &'static str, value: &T) -> Checked {
        value.serialize(FiniteCheck)
    }

    fn end(self) -> Checked {
        Ok(())
    }
}

impl<F, T: Clone> Memoize<F, T> {
    /// Return the cached result for `args`, computing it on first sight
    ///
    /// # Errors
    ///
    /// [`UnderbarError::UnserializableArgument`] when `args` has no JSON form.
    pub fn call<A>(&mut self, args: A) -> UnderbarResult<T>
    where
        A: Serialize,
        F: FnMut(A) -> T,
    {
        let key = cache_key(&args)?;
        if let Some(result) = self.cache.get(&key) {
            trace!(%key, "Memoize cache hit");
            return Ok(result.clone());
        }
        let result = (self.func)(args);
        self.cache.insert(key, result.clone());
        Ok(result)
    }

    /// Like [`Memoize::call`] for a fallible function
    ///
    /// Only `Ok` results are cached. Key derivation failures are converted
    /// into the function's error type.
    pub fn try_call<A, E>(&mut self, args: A) -> Result<T, E>
    where
        A: Serialize,
        E: From<UnderbarError>,
        F: FnMut(A) -> Result<T, E>,
    {
        let key = cache_key(&args)?;
        if let Some(result) = self.cache.get(&key) {
            trace!(%key, "Memoize cache hit");
            return Ok(result.clone());
        }
        let result = (self.func)(args)?;
        self.cache.insert(key, result.clone());
        Ok(result)
    }
}
