// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structured encoder contract.
//!
//! A destination (JSON builder, console writer, test recorder, ...) exposes
//! two roles with the same primitive set:
//!
//! - [`ObjectEncoder`]: every entry is keyed.
//! - [`ArrayEncoder`]: entries are appended in order.
//!
//! Nested values are handed over as deferred marshalers. The destination
//! decides when (and whether) to invoke them, so a marshaler must be cheap to
//! build and perform exactly one traversal per invocation.

use crate::error::Result;

/// Deferred encoding of a value as an object.
pub trait ObjectMarshaler {
    /// Write this value's entries into `enc`.
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<()>;
}

/// Deferred encoding of a value as an array.
pub trait ArrayMarshaler {
    /// Append this value's elements to `enc`.
    fn marshal_log_array(&self, enc: &mut dyn ArrayEncoder) -> Result<()>;
}

/// Keyed destination.
pub trait ObjectEncoder {
    /// Add a nested object produced by `marshaler`.
    fn add_object(&mut self, key: &str, marshaler: &dyn ObjectMarshaler) -> Result<()>;
    /// Add a nested array produced by `marshaler`.
    fn add_array(&mut self, key: &str, marshaler: &dyn ArrayMarshaler) -> Result<()>;
    fn add_bool(&mut self, key: &str, value: bool);
    fn add_string(&mut self, key: &str, value: &str);
    fn add_f32(&mut self, key: &str, value: f32);
    fn add_f64(&mut self, key: &str, value: f64);
    fn add_i32(&mut self, key: &str, value: i32);
    fn add_i64(&mut self, key: &str, value: i64);
    fn add_u32(&mut self, key: &str, value: u32);
    fn add_u64(&mut self, key: &str, value: u64);
}

/// Unkeyed, ordered destination.
pub trait ArrayEncoder {
    /// Append a nested object produced by `marshaler`.
    fn append_object(&mut self, marshaler: &dyn ObjectMarshaler) -> Result<()>;
    /// Append a nested array produced by `marshaler`.
    fn append_array(&mut self, marshaler: &dyn ArrayMarshaler) -> Result<()>;
    fn append_bool(&mut self, value: bool);
    fn append_string(&mut self, value: &str);
    fn append_f32(&mut self, value: f32);
    fn append_f64(&mut self, value: f64);
    fn append_i32(&mut self, value: i32);
    fn append_i64(&mut self, value: i64);
    fn append_u32(&mut self, value: u32);
    fn append_u64(&mut self, value: u64);
}

impl<T: ObjectMarshaler + ?Sized> ObjectMarshaler for &T {
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<()> {
        (**self).marshal_log_object(enc)
    }
}

impl<T: ObjectMarshaler + ?Sized> ObjectMarshaler for Box<T> {
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<()> {
        (**self).marshal_log_object(enc)
    }
}

impl<T: ArrayMarshaler + ?Sized> ArrayMarshaler for &T {
    fn marshal_log_array(&self, enc: &mut dyn ArrayEncoder) -> Result<()> {
        (**self).marshal_log_array(enc)
    }
}

impl<T: ArrayMarshaler + ?Sized> ArrayMarshaler for Box<T> {
    fn marshal_log_array(&self, enc: &mut dyn ArrayEncoder) -> Result<()> {
        (**self).marshal_log_array(enc)
    }
}

/// Object marshaler backed by a closure. See [`object_marshaler_fn`].
#[derive(Clone, Copy)]
pub struct ObjectMarshalerFn<F>(F);

impl<F> ObjectMarshaler for ObjectMarshalerFn<F>
where
    F: Fn(&mut dyn ObjectEncoder) -> Result<()>,
{
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<()> {
        (self.0)(enc)
    }
}

impl<F> std::fmt::Debug for ObjectMarshalerFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ObjectMarshalerFn")
    }
}

/// Wrap a closure as an [`ObjectMarshaler`].
///
/// ```
/// use protolog::encoder::{object_marshaler_fn, ObjectEncoder};
/// use protolog::json::JsonObjectEncoder;
///
/// let marshaler = object_marshaler_fn(|enc: &mut dyn ObjectEncoder| {
///     enc.add_string("service", "billing");
///     Ok(())
/// });
///
/// let mut enc = JsonObjectEncoder::new();
/// enc.add_object("meta", &marshaler).unwrap();
/// assert_eq!(enc.into_value()["meta"]["service"], "billing");
/// ```
pub fn object_marshaler_fn<F>(f: F) -> ObjectMarshalerFn<F>
where
    F: Fn(&mut dyn ObjectEncoder) -> Result<()>,
{
    ObjectMarshalerFn(f)
}

/// Array marshaler backed by a closure. See [`array_marshaler_fn`].
#[derive(Clone, Copy)]
pub struct ArrayMarshalerFn<F>(F);

impl<F> ArrayMarshaler for ArrayMarshalerFn<F>
where
    F: Fn(&mut dyn ArrayEncoder) -> Result<()>,
{
    fn marshal_log_array(&self, enc: &mut dyn ArrayEncoder) -> Result<()> {
        (self.0)(enc)
    }
}

impl<F> std::fmt::Debug for ArrayMarshalerFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ArrayMarshalerFn")
    }
}

/// Wrap a closure as an [`ArrayMarshaler`].
pub fn array_marshaler_fn<F>(f: F) -> ArrayMarshalerFn<F>
where
    F: Fn(&mut dyn ArrayEncoder) -> Result<()>,
{
    ArrayMarshalerFn(f)
}
