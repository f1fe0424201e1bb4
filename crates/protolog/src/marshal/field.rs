// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field dispatch and per-kind value encoding.

use super::{MessageMarshaler, Options};
use crate::encoder::{ArrayEncoder, ArrayMarshaler, ObjectEncoder, ObjectMarshaler};
use crate::error::{MarshalError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use prost_reflect::{FieldDescriptor, Kind, MapKey, Value};
use std::collections::HashMap;

/// Primitive set shared by the keyed and unkeyed encoder roles.
pub(super) trait Sink {
    fn object(&mut self, marshaler: &dyn ObjectMarshaler) -> Result<()>;
    fn array(&mut self, marshaler: &dyn ArrayMarshaler) -> Result<()>;
    fn bool(&mut self, value: bool);
    fn string(&mut self, value: &str);
    fn f32(&mut self, value: f32);
    fn f64(&mut self, value: f64);
    fn i32(&mut self, value: i32);
    fn i64(&mut self, value: i64);
    fn u32(&mut self, value: u32);
    fn u64(&mut self, value: u64);
}

/// Object encoder positioned at one key.
pub(super) struct Keyed<'e, 'k> {
    pub(super) enc: &'e mut dyn ObjectEncoder,
    pub(super) key: &'k str,
}

impl Sink for Keyed<'_, '_> {
    fn object(&mut self, marshaler: &dyn ObjectMarshaler) -> Result<()> {
        self.enc.add_object(self.key, marshaler)
    }

    fn array(&mut self, marshaler: &dyn ArrayMarshaler) -> Result<()> {
        self.enc.add_array(self.key, marshaler)
    }

    fn bool(&mut self, value: bool) {
        self.enc.add_bool(self.key, value);
    }

    fn string(&mut self, value: &str) {
        self.enc.add_string(self.key, value);
    }

    fn f32(&mut self, value: f32) {
        self.enc.add_f32(self.key, value);
    }

    fn f64(&mut self, value: f64) {
        self.enc.add_f64(self.key, value);
    }

    fn i32(&mut self, value: i32) {
        self.enc.add_i32(self.key, value);
    }

    fn i64(&mut self, value: i64) {
        self.enc.add_i64(self.key, value);
    }

    fn u32(&mut self, value: u32) {
        self.enc.add_u32(self.key, value);
    }

    fn u64(&mut self, value: u64) {
        self.enc.add_u64(self.key, value);
    }
}

/// Array encoder appending at its end.
pub(super) struct Indexed<'e> {
    pub(super) enc: &'e mut dyn ArrayEncoder,
}

impl Sink for Indexed<'_> {
    fn object(&mut self, marshaler: &dyn ObjectMarshaler) -> Result<()> {
        self.enc.append_object(marshaler)
    }

    fn array(&mut self, marshaler: &dyn ArrayMarshaler) -> Result<()> {
        self.enc.append_array(marshaler)
    }

    fn bool(&mut self, value: bool) {
        self.enc.append_bool(value);
    }

    fn string(&mut self, value: &str) {
        self.enc.append_string(value);
    }

    fn f32(&mut self, value: f32) {
        self.enc.append_f32(value);
    }

    fn f64(&mut self, value: f64) {
        self.enc.append_f64(value);
    }

    fn i32(&mut self, value: i32) {
        self.enc.append_i32(value);
    }

    fn i64(&mut self, value: i64) {
        self.enc.append_i64(value);
    }

    fn u32(&mut self, value: u32) {
        self.enc.append_u32(value);
    }

    fn u64(&mut self, value: u64) {
        self.enc.append_u64(value);
    }
}

fn unsupported(field: &FieldDescriptor) -> MarshalError {
    log::debug!("no encoding for field {} ({:?})", field.full_name(), field.kind());
    MarshalError::UnsupportedKind {
        field: field.full_name().to_string(),
    }
}

/// Route one present field to the map, list or singular path.
pub(super) fn encode_field(
    sink: &mut dyn Sink,
    field: &FieldDescriptor,
    value: &Value,
    options: Options,
) -> Result<()> {
    if field.is_map() {
        let (Kind::Message(entry), Value::Map(entries)) = (field.kind(), value) else {
            return Err(unsupported(field));
        };
        let value_field = entry.map_entry_value_field();
        return sink.object(&MapMarshaler {
            value_field: &value_field,
            entries,
            options,
        });
    }

    if field.is_list() {
        let Value::List(items) = value else {
            return Err(unsupported(field));
        };
        return sink.array(&ListMarshaler {
            field,
            items,
            options,
        });
    }

    encode_value(sink, field, value, options)
}

/// Encode one singular value according to the field's declared kind.
pub(super) fn encode_value(
    sink: &mut dyn Sink,
    field: &FieldDescriptor,
    value: &Value,
    options: Options,
) -> Result<()> {
    match (field.kind(), value) {
        (Kind::Message(_), Value::Message(message)) => {
            return sink.object(&MessageMarshaler::new(Some(message), options));
        }
        (Kind::Bool, Value::Bool(v)) => sink.bool(*v),
        (Kind::Bytes, Value::Bytes(v)) => sink.string(&STANDARD.encode(v)),
        (Kind::Enum(descriptor), Value::EnumNumber(number)) => {
            match descriptor.get_value(*number) {
                Some(enum_value) => sink.string(enum_value.name()),
                // open enum carrying a number unknown to this schema
                None => sink.string(&number.to_string()),
            }
        }
        (Kind::Float, Value::F32(v)) => sink.f32(*v),
        (Kind::Double, Value::F64(v)) => sink.f64(*v),
        (Kind::String, Value::String(v)) => sink.string(v),
        (Kind::Int32 | Kind::Sint32 | Kind::Sfixed32, Value::I32(v)) => sink.i32(*v),
        (Kind::Uint32 | Kind::Fixed32, Value::U32(v)) => sink.u32(*v),
        (Kind::Int64 | Kind::Sint64 | Kind::Sfixed64, Value::I64(v)) => sink.i64(*v),
        (Kind::Uint64 | Kind::Fixed64, Value::U64(v)) => sink.u64(*v),
        _ => return Err(unsupported(field)),
    }

    Ok(())
}

/// Elements of a repeated field, in index order.
pub(super) struct ListMarshaler<'a> {
    pub(super) field: &'a FieldDescriptor,
    pub(super) items: &'a [Value],
    pub(super) options: Options,
}

impl ArrayMarshaler for ListMarshaler<'_> {
    fn marshal_log_array(&self, enc: &mut dyn ArrayEncoder) -> Result<()> {
        for item in self.items {
            encode_value(&mut Indexed { enc: &mut *enc }, self.field, item, self.options)?;
        }
        Ok(())
    }
}

/// Entries of a map field, keyed by the string form of each entry key.
pub(super) struct MapMarshaler<'a> {
    pub(super) value_field: &'a FieldDescriptor,
    pub(super) entries: &'a HashMap<MapKey, Value>,
    pub(super) options: Options,
}

impl ObjectMarshaler for MapMarshaler<'_> {
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<()> {
        for (key, value) in self.entries {
            let key = map_key_string(key);
            encode_value(
                &mut Keyed {
                    enc: &mut *enc,
                    key: &key,
                },
                self.value_field,
                value,
                self.options,
            )?;
        }
        Ok(())
    }
}

pub(super) fn map_key_string(key: &MapKey) -> String {
    match key {
        MapKey::Bool(v) => v.to_string(),
        MapKey::I32(v) => v.to_string(),
        MapKey::I64(v) => v.to_string(),
        MapKey::U32(v) => v.to_string(),
        MapKey::U64(v) => v.to_string(),
        MapKey::String(v) => v.clone(),
    }
}
