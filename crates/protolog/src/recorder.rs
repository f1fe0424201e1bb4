// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recording encoders for assertions.
//!
//! Every call is captured into an in-memory [`Value`] tree that keeps both
//! the primitive type used and the order of keys, so tests can check exactly
//! which encoder operation a marshaler chose.

use crate::encoder::{ArrayEncoder, ArrayMarshaler, ObjectEncoder, ObjectMarshaler};
use crate::error::Result;

/// A recorded value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Object(Object),
    Array(Vec<Value>),
    String(String),
    Bool(bool),
    F32(f32),
    F64(f64),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
}

impl Value {
    /// Try to get as object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

/// Ordered key/value entries of a recorded object.
///
/// Writing an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for expected values.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Keys in write order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

/// Object encoder recording every call.
#[derive(Debug, Default)]
pub struct ObjectRecorder {
    result: Object,
}

impl ObjectRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded entries.
    pub fn result(&self) -> &Object {
        &self.result
    }

    pub fn into_result(self) -> Object {
        self.result
    }
}

impl ObjectEncoder for ObjectRecorder {
    fn add_object(&mut self, key: &str, marshaler: &dyn ObjectMarshaler) -> Result<()> {
        let mut nested = ObjectRecorder::new();
        marshaler.marshal_log_object(&mut nested)?;
        self.result.insert(key.to_owned(), Value::Object(nested.result));
        Ok(())
    }

    fn add_array(&mut self, key: &str, marshaler: &dyn ArrayMarshaler) -> Result<()> {
        let mut nested = ArrayRecorder::new();
        marshaler.marshal_log_array(&mut nested)?;
        self.result.insert(key.to_owned(), Value::Array(nested.result));
        Ok(())
    }

    fn add_bool(&mut self, key: &str, value: bool) {
        self.result.insert(key.to_owned(), Value::Bool(value));
    }

    fn add_string(&mut self, key: &str, value: &str) {
        self.result.insert(key.to_owned(), Value::from(value));
    }

    fn add_f32(&mut self, key: &str, value: f32) {
        self.result.insert(key.to_owned(), Value::F32(value));
    }

    fn add_f64(&mut self, key: &str, value: f64) {
        self.result.insert(key.to_owned(), Value::F64(value));
    }

    fn add_i32(&mut self, key: &str, value: i32) {
        self.result.insert(key.to_owned(), Value::I32(value));
    }

    fn add_i64(&mut self, key: &str, value: i64) {
        self.result.insert(key.to_owned(), Value::I64(value));
    }

    fn add_u32(&mut self, key: &str, value: u32) {
        self.result.insert(key.to_owned(), Value::U32(value));
    }

    fn add_u64(&mut self, key: &str, value: u64) {
        self.result.insert(key.to_owned(), Value::U64(value));
    }
}

/// Array encoder recording every call.
#[derive(Debug, Default)]
pub struct ArrayRecorder {
    result: Vec<Value>,
}

impl ArrayRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded elements.
    pub fn result(&self) -> &[Value] {
        &self.result
    }

    pub fn into_result(self) -> Vec<Value> {
        self.result
    }
}

impl ArrayEncoder for ArrayRecorder {
    fn append_object(&mut self, marshaler: &dyn ObjectMarshaler) -> Result<()> {
        let mut nested = ObjectRecorder::new();
        marshaler.marshal_log_object(&mut nested)?;
        self.result.push(Value::Object(nested.result));
        Ok(())
    }

    fn append_array(&mut self, marshaler: &dyn ArrayMarshaler) -> Result<()> {
        let mut nested = ArrayRecorder::new();
        marshaler.marshal_log_array(&mut nested)?;
        self.result.push(Value::Array(nested.result));
        Ok(())
    }

    fn append_bool(&mut self, value: bool) {
        self.result.push(Value::Bool(value));
    }

    fn append_string(&mut self, value: &str) {
        self.result.push(Value::from(value));
    }

    fn append_f32(&mut self, value: f32) {
        self.result.push(Value::F32(value));
    }

    fn append_f64(&mut self, value: f64) {
        self.result.push(Value::F64(value));
    }

    fn append_i32(&mut self, value: i32) {
        self.result.push(Value::I32(value));
    }

    fn append_i64(&mut self, value: i64) {
        self.result.push(Value::I64(value));
    }

    fn append_u32(&mut self, value: u32) {
        self.result.push(Value::U32(value));
    }

    fn append_u64(&mut self, value: u64) {
        self.result.push(Value::U64(value));
    }
}
