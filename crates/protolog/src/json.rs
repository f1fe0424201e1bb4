// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON destination encoders backed by `serde_json`.
//!
//! Keys keep their insertion order, so a typed message renders `@type`
//! before its own fields. A nested object or array is only attached to its
//! parent once its marshaler succeeded.

use crate::encoder::{ArrayEncoder, ArrayMarshaler, ObjectEncoder, ObjectMarshaler};
use crate::error::Result;
use serde_json::{Map, Number, Value};

/// JSON number holding the shortest decimal form of `value`.
///
/// Widening through `f64` directly would print `0.1f32` as
/// `0.10000000149011612`. Non-finite values become `null`.
fn f32_value(value: f32) -> Value {
    value
        .to_string()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

/// Object encoder collecting entries into a JSON map.
#[derive(Debug, Clone, Default)]
pub struct JsonObjectEncoder {
    fields: Map<String, Value>,
}

impl JsonObjectEncoder {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Move every entry of `other` into this encoder, in order.
    pub fn merge(&mut self, other: JsonObjectEncoder) {
        self.fields.extend(other.fields);
    }

    /// Into the collected map.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    /// Into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl ObjectEncoder for JsonObjectEncoder {
    fn add_object(&mut self, key: &str, marshaler: &dyn ObjectMarshaler) -> Result<()> {
        let mut nested = JsonObjectEncoder::new();
        marshaler.marshal_log_object(&mut nested)?;
        self.fields.insert(key.to_owned(), nested.into_value());
        Ok(())
    }

    fn add_array(&mut self, key: &str, marshaler: &dyn ArrayMarshaler) -> Result<()> {
        let mut nested = JsonArrayEncoder::new();
        marshaler.marshal_log_array(&mut nested)?;
        self.fields.insert(key.to_owned(), nested.into_value());
        Ok(())
    }

    fn add_bool(&mut self, key: &str, value: bool) {
        self.fields.insert(key.to_owned(), Value::Bool(value));
    }

    fn add_string(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_owned(), Value::from(value));
    }

    fn add_f32(&mut self, key: &str, value: f32) {
        self.fields.insert(key.to_owned(), f32_value(value));
    }

    fn add_f64(&mut self, key: &str, value: f64) {
        self.fields.insert(key.to_owned(), Value::from(value));
    }

    fn add_i32(&mut self, key: &str, value: i32) {
        self.fields.insert(key.to_owned(), Value::from(value));
    }

    fn add_i64(&mut self, key: &str, value: i64) {
        self.fields.insert(key.to_owned(), Value::from(value));
    }

    fn add_u32(&mut self, key: &str, value: u32) {
        self.fields.insert(key.to_owned(), Value::from(value));
    }

    fn add_u64(&mut self, key: &str, value: u64) {
        self.fields.insert(key.to_owned(), Value::from(value));
    }
}

/// Array encoder collecting elements into a JSON array.
#[derive(Debug, Clone, Default)]
pub struct JsonArrayEncoder {
    items: Vec<Value>,
}

impl JsonArrayEncoder {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Into a JSON array value.
    pub fn into_value(self) -> Value {
        Value::Array(self.items)
    }
}

impl ArrayEncoder for JsonArrayEncoder {
    fn append_object(&mut self, marshaler: &dyn ObjectMarshaler) -> Result<()> {
        let mut nested = JsonObjectEncoder::new();
        marshaler.marshal_log_object(&mut nested)?;
        self.items.push(nested.into_value());
        Ok(())
    }

    fn append_array(&mut self, marshaler: &dyn ArrayMarshaler) -> Result<()> {
        let mut nested = JsonArrayEncoder::new();
        marshaler.marshal_log_array(&mut nested)?;
        self.items.push(nested.into_value());
        Ok(())
    }

    fn append_bool(&mut self, value: bool) {
        self.items.push(Value::Bool(value));
    }

    fn append_string(&mut self, value: &str) {
        self.items.push(Value::from(value));
    }

    fn append_f32(&mut self, value: f32) {
        self.items.push(f32_value(value));
    }

    fn append_f64(&mut self, value: f64) {
        self.items.push(Value::from(value));
    }

    fn append_i32(&mut self, value: i32) {
        self.items.push(Value::from(value));
    }

    fn append_i64(&mut self, value: i64) {
        self.items.push(Value::from(value));
    }

    fn append_u32(&mut self, value: u32) {
        self.items.push(Value::from(value));
    }

    fn append_u64(&mut self, value: u64) {
        self.items.push(Value::from(value));
    }
}

/// Run `marshaler` against a fresh JSON object encoder.
pub fn to_json(marshaler: &dyn ObjectMarshaler) -> Result<Value> {
    let mut enc = JsonObjectEncoder::new();
    marshaler.marshal_log_object(&mut enc)?;
    Ok(enc.into_value())
}
