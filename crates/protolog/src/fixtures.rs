// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime-built descriptors shared by the unit tests.
//!
//! ```text
//! package protolog.test;
//!
//! enum Choice { CHOICE_UNSPECIFIED = 0; CHOICE_ONE = 1; CHOICE_TWO = 2; }
//!
//! message Message { string text = 1; }
//!
//! message Marshaler {
//!   map<string, string> map = 1;
//!   repeated string array = 2;
//!   bool bool = 3;            string string = 4;      bytes bytes = 5;
//!   Choice enum = 6;          float float = 7;        double double = 8;
//!   int32 int32 = 9;          int64 int64 = 10;       uint32 uint32 = 11;
//!   uint64 uint64 = 12;       sint32 sint32 = 13;     sint64 sint64 = 14;
//!   fixed32 fixed32 = 15;     fixed64 fixed64 = 16;   sfixed32 sfixed32 = 17;
//!   sfixed64 sfixed64 = 18;
//!   oneof payload { Message message = 19; google.protobuf.Any any = 20; }
//!   repeated Message messages = 21;
//!   map<int32, Message> lookup = 22;
//!   string display_name = 23;
//!   repeated google.protobuf.Any anys = 24;
//!   repeated Choice choices = 25;
//! }
//! ```

use prost::Message as _;
use prost_reflect::{DescriptorPool, DynamicMessage, MessageDescriptor, ReflectMessage, Value};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MessageOptions, OneofDescriptorProto,
};

pub(crate) const PACKAGE: &str = "protolog.test";

fn json_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn scalar(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        json_name: Some(json_name(name)),
        ..Default::default()
    }
}

fn typed(name: &str, number: i32, ty: Type, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..scalar(name, number, ty)
    }
}

fn repeated(field: FieldDescriptorProto) -> FieldDescriptorProto {
    FieldDescriptorProto {
        label: Some(Label::Repeated as i32),
        ..field
    }
}

fn in_oneof(field: FieldDescriptorProto, index: i32) -> FieldDescriptorProto {
    FieldDescriptorProto {
        oneof_index: Some(index),
        ..field
    }
}

fn map_entry(name: &str, key: FieldDescriptorProto, value: FieldDescriptorProto) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: vec![key, value],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn any_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("google/protobuf/any.proto".to_string()),
        package: Some("google.protobuf".to_string()),
        message_type: vec![DescriptorProto {
            name: Some("Any".to_string()),
            field: vec![
                scalar("type_url", 1, Type::String),
                scalar("value", 2, Type::Bytes),
            ],
            ..Default::default()
        }],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

fn marshaler_file() -> FileDescriptorProto {
    let choice = EnumDescriptorProto {
        name: Some("Choice".to_string()),
        value: ["CHOICE_UNSPECIFIED", "CHOICE_ONE", "CHOICE_TWO"]
            .iter()
            .zip(0..)
            .map(|(name, number)| EnumValueDescriptorProto {
                name: Some((*name).to_string()),
                number: Some(number),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };

    let message = DescriptorProto {
        name: Some("Message".to_string()),
        field: vec![scalar("text", 1, Type::String)],
        ..Default::default()
    };

    let marshaler = DescriptorProto {
        name: Some("Marshaler".to_string()),
        field: vec![
            repeated(typed(
                "map",
                1,
                Type::Message,
                ".protolog.test.Marshaler.MapEntry",
            )),
            repeated(scalar("array", 2, Type::String)),
            scalar("bool", 3, Type::Bool),
            scalar("string", 4, Type::String),
            scalar("bytes", 5, Type::Bytes),
            typed("enum", 6, Type::Enum, ".protolog.test.Choice"),
            scalar("float", 7, Type::Float),
            scalar("double", 8, Type::Double),
            scalar("int32", 9, Type::Int32),
            scalar("int64", 10, Type::Int64),
            scalar("uint32", 11, Type::Uint32),
            scalar("uint64", 12, Type::Uint64),
            scalar("sint32", 13, Type::Sint32),
            scalar("sint64", 14, Type::Sint64),
            scalar("fixed32", 15, Type::Fixed32),
            scalar("fixed64", 16, Type::Fixed64),
            scalar("sfixed32", 17, Type::Sfixed32),
            scalar("sfixed64", 18, Type::Sfixed64),
            in_oneof(
                typed("message", 19, Type::Message, ".protolog.test.Message"),
                0,
            ),
            in_oneof(typed("any", 20, Type::Message, ".google.protobuf.Any"), 0),
            repeated(typed(
                "messages",
                21,
                Type::Message,
                ".protolog.test.Message",
            )),
            repeated(typed(
                "lookup",
                22,
                Type::Message,
                ".protolog.test.Marshaler.LookupEntry",
            )),
            scalar("display_name", 23, Type::String),
            repeated(typed("anys", 24, Type::Message, ".google.protobuf.Any")),
            repeated(typed("choices", 25, Type::Enum, ".protolog.test.Choice")),
        ],
        nested_type: vec![
            map_entry(
                "MapEntry",
                scalar("key", 1, Type::String),
                scalar("value", 2, Type::String),
            ),
            map_entry(
                "LookupEntry",
                scalar("key", 1, Type::Int32),
                typed("value", 2, Type::Message, ".protolog.test.Message"),
            ),
        ],
        oneof_decl: vec![OneofDescriptorProto {
            name: Some("payload".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };

    FileDescriptorProto {
        name: Some("protolog/test/marshaler.proto".to_string()),
        package: Some(PACKAGE.to_string()),
        dependency: vec!["google/protobuf/any.proto".to_string()],
        message_type: vec![message, marshaler],
        enum_type: vec![choice],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

pub(crate) fn pool() -> DescriptorPool {
    DescriptorPool::from_file_descriptor_set(FileDescriptorSet {
        file: vec![any_file(), marshaler_file()],
    })
    .expect("test descriptors must be valid")
}

pub(crate) fn descriptor(pool: &DescriptorPool, name: &str) -> MessageDescriptor {
    pool.get_message_by_name(name)
        .unwrap_or_else(|| panic!("missing test message {name}"))
}

/// `protolog.test.Message { text }`.
pub(crate) fn text_message(pool: &DescriptorPool, text: &str) -> DynamicMessage {
    let mut message = DynamicMessage::new(descriptor(pool, "protolog.test.Message"));
    message.set_field_by_name("text", Value::String(text.to_string()));
    message
}

/// Empty `protolog.test.Marshaler`.
pub(crate) fn marshaler(pool: &DescriptorPool) -> DynamicMessage {
    DynamicMessage::new(descriptor(pool, "protolog.test.Marshaler"))
}

/// Wrap `payload` into a `google.protobuf.Any`.
pub(crate) fn pack_any(pool: &DescriptorPool, payload: &DynamicMessage) -> DynamicMessage {
    let mut any = DynamicMessage::new(descriptor(pool, "google.protobuf.Any"));
    any.set_field_by_name(
        "type_url",
        Value::String(format!(
            "type.googleapis.com/{}",
            payload.descriptor().full_name()
        )),
    );
    any.set_field_by_name("value", Value::Bytes(payload.encode_to_vec().into()));
    any
}

/// `google.protobuf.Any` with no type URL and no payload.
pub(crate) fn empty_any(pool: &DescriptorPool) -> DynamicMessage {
    DynamicMessage::new(descriptor(pool, "google.protobuf.Any"))
}
