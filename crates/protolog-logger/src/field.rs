// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Log fields.
//!
//! A [`Field`] is one named entry of a log record. Message-backed fields hold
//! a deferred marshaler borrowing the message, so the traversal only runs if
//! the record is actually formatted.

use prost_reflect::{DynamicMessage, ReflectMessage};
use protolog::{ArrayMarshaler, ObjectEncoder, ObjectMarshaler, Options};
use std::fmt;

/// Value carried by a [`Field`].
pub enum FieldValue<'a> {
    String(String),
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    /// Nested object produced on demand.
    Object(Box<dyn ObjectMarshaler + 'a>),
    /// Nested array produced on demand.
    Array(Box<dyn ArrayMarshaler + 'a>),
    /// Entries written directly into the enclosing record; the key is unused.
    Inline(Box<dyn ObjectMarshaler + 'a>),
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Self::U64(v) => f.debug_tuple("U64").field(v).finish(),
            Self::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Self::Object(_) => f.write_str("Object(..)"),
            Self::Array(_) => f.write_str("Array(..)"),
            Self::Inline(_) => f.write_str("Inline(..)"),
        }
    }
}

/// A named log field.
#[derive(Debug)]
pub struct Field<'a> {
    key: String,
    value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Create a field from a key and value.
    pub fn new(key: impl Into<String>, value: FieldValue<'a>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Nested object field.
    pub fn object(key: impl Into<String>, marshaler: impl ObjectMarshaler + 'a) -> Self {
        Self::new(key, FieldValue::Object(Box::new(marshaler)))
    }

    /// Nested array field.
    pub fn array(key: impl Into<String>, marshaler: impl ArrayMarshaler + 'a) -> Self {
        Self::new(key, FieldValue::Array(Box::new(marshaler)))
    }

    /// Field whose entries are merged into the enclosing record.
    pub fn inline(marshaler: impl ObjectMarshaler + 'a) -> Self {
        Self::new(String::new(), FieldValue::Inline(Box::new(marshaler)))
    }

    /// Key of the field; empty for inline fields.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value of the field.
    pub fn value(&self) -> &FieldValue<'a> {
        &self.value
    }

    /// Write this field into `enc`, running deferred marshalers.
    pub fn add_to(&self, enc: &mut dyn ObjectEncoder) -> protolog::Result<()> {
        match &self.value {
            FieldValue::String(v) => enc.add_string(&self.key, v),
            FieldValue::Bool(v) => enc.add_bool(&self.key, *v),
            FieldValue::I64(v) => enc.add_i64(&self.key, *v),
            FieldValue::U64(v) => enc.add_u64(&self.key, *v),
            FieldValue::F64(v) => enc.add_f64(&self.key, *v),
            FieldValue::Object(m) => return enc.add_object(&self.key, &**m),
            FieldValue::Array(m) => return enc.add_array(&self.key, &**m),
            FieldValue::Inline(m) => return m.marshal_log_object(enc),
        }
        Ok(())
    }
}

/// String field.
pub fn string(key: impl Into<String>, value: impl Into<String>) -> Field<'static> {
    Field::new(key, FieldValue::String(value.into()))
}

/// Boolean field.
pub fn bool(key: impl Into<String>, value: bool) -> Field<'static> {
    Field::new(key, FieldValue::Bool(value))
}

/// Signed integer field.
pub fn i64(key: impl Into<String>, value: i64) -> Field<'static> {
    Field::new(key, FieldValue::I64(value))
}

/// Unsigned integer field.
pub fn u64(key: impl Into<String>, value: u64) -> Field<'static> {
    Field::new(key, FieldValue::U64(value))
}

/// Floating point field.
pub fn f64(key: impl Into<String>, value: f64) -> Field<'static> {
    Field::new(key, FieldValue::F64(value))
}

/// Message field, serialized lazily.
///
/// A `None` message renders as an empty object.
pub fn message<'a>(
    key: impl Into<String>,
    msg: impl Into<Option<&'a DynamicMessage>>,
) -> Field<'a> {
    Field::object(key, Options::default().marshaler_of(msg.into()))
}

/// Message field prefixed with its `@type`, serialized lazily.
pub fn typed_message<'a>(
    key: impl Into<String>,
    msg: impl Into<Option<&'a DynamicMessage>>,
) -> Field<'a> {
    Field::object(key, Options::typed().marshaler_of(msg.into()))
}

/// Array of messages, each serialized lazily and independently.
pub fn messages<'a>(key: impl Into<String>, msgs: &'a [DynamicMessage]) -> Field<'a> {
    Field::array(key, Options::default().messages_marshaler(msgs))
}

/// Array of messages, each prefixed with its `@type`.
pub fn typed_messages<'a>(key: impl Into<String>, msgs: &'a [DynamicMessage]) -> Field<'a> {
    Field::array(key, Options::typed().messages_marshaler(msgs))
}

/// Generated message field; transcoding happens only when formatted.
pub fn reflect_message<'a, M: ReflectMessage + 'a>(
    key: impl Into<String>,
    msg: &'a M,
    options: Options,
) -> Field<'a> {
    Field::object(key, options.reflect_marshaler_of(Some(msg)))
}

/// Array of generated messages; each is transcoded only when formatted.
pub fn reflect_messages<'a, M: ReflectMessage + 'a>(
    key: impl Into<String>,
    msgs: &'a [M],
    options: Options,
) -> Field<'a> {
    Field::array(key, options.reflect_messages_marshaler(msgs))
}
