// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflective message marshaling.
//!
//! A message is walked field by field in declaration order. Each present
//! field is routed by repetition (map, list, singular) and then by declared
//! kind onto the primitive calls of an [`ObjectEncoder`]. Nested messages,
//! lists and maps are handed to the encoder as deferred marshalers, so
//! nothing is computed unless the destination visits them.
//!
//! `google.protobuf.Any` is never rendered as-is: its payload is decoded
//! against the wrapper's own descriptor pool and encoded in its place,
//! prefixed with `@type`.

mod field;

use crate::encoder::{ArrayEncoder, ArrayMarshaler, ObjectEncoder, ObjectMarshaler};
use crate::error::{MarshalError, Result};
use field::Keyed;
use prost_reflect::{DynamicMessage, ReflectMessage};
use serde::{Deserialize, Serialize};

/// Full name of the dynamically-typed wrapper message.
pub const ANY_FULL_NAME: &str = "google.protobuf.Any";

/// Prefix of the `@type` value.
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// Key of the synthetic type-identity entry.
pub const TYPE_KEY: &str = "@type";

/// Marshaling options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Prefix every encoded message with its `@type`.
    pub typed: bool,
}

impl Options {
    /// Options with typed output enabled.
    pub fn typed() -> Self {
        Self { typed: true }
    }

    /// Deferred object marshaler for `message`.
    ///
    /// `None` yields a marshaler that writes nothing and never fails.
    pub fn marshaler_of(self, message: Option<&DynamicMessage>) -> MessageMarshaler<'_> {
        MessageMarshaler::new(message, self)
    }

    /// Deferred array marshaler encoding each message independently.
    pub fn messages_marshaler(self, messages: &[DynamicMessage]) -> MessagesMarshaler<'_> {
        MessagesMarshaler {
            messages,
            options: self,
        }
    }

    /// Deferred object marshaler for a generated message type.
    ///
    /// The message is transcoded to a [`DynamicMessage`] only when the
    /// marshaler runs.
    pub fn reflect_marshaler_of<M: ReflectMessage>(
        self,
        message: Option<&M>,
    ) -> ReflectMarshaler<'_, M> {
        ReflectMarshaler {
            message,
            options: self,
        }
    }

    /// Deferred array marshaler over generated messages, each transcoded
    /// only when its element is encoded.
    pub fn reflect_messages_marshaler<M: ReflectMessage>(
        self,
        messages: &[M],
    ) -> ReflectMessagesMarshaler<'_, M> {
        ReflectMessagesMarshaler {
            messages,
            options: self,
        }
    }
}

/// Untyped marshaler for `message`.
pub fn marshaler_of(message: Option<&DynamicMessage>) -> MessageMarshaler<'_> {
    Options::default().marshaler_of(message)
}

/// Deferred encoding of one message as an object.
#[derive(Debug, Clone, Copy)]
pub struct MessageMarshaler<'a> {
    message: Option<&'a DynamicMessage>,
    options: Options,
}

impl<'a> MessageMarshaler<'a> {
    fn new(message: Option<&'a DynamicMessage>, options: Options) -> Self {
        Self { message, options }
    }
}

impl ObjectMarshaler for MessageMarshaler<'_> {
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<()> {
        match self.message {
            Some(message) => encode_message(enc, message, self.options.typed, self.options),
            None => Ok(()),
        }
    }
}

/// Deferred encoding of a message slice as an array of objects.
#[derive(Debug, Clone, Copy)]
pub struct MessagesMarshaler<'a> {
    messages: &'a [DynamicMessage],
    options: Options,
}

impl ArrayMarshaler for MessagesMarshaler<'_> {
    fn marshal_log_array(&self, enc: &mut dyn ArrayEncoder) -> Result<()> {
        for message in self.messages {
            enc.append_object(&self.options.marshaler_of(Some(message)))?;
        }
        Ok(())
    }
}

/// Deferred encoding of a generated message.
#[derive(Debug)]
pub struct ReflectMarshaler<'a, M> {
    message: Option<&'a M>,
    options: Options,
}

impl<M: ReflectMessage> ObjectMarshaler for ReflectMarshaler<'_, M> {
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<()> {
        let Some(message) = self.message else {
            return Ok(());
        };
        let message = message.transcode_to_dynamic();
        encode_message(enc, &message, self.options.typed, self.options)
    }
}

/// Deferred encoding of a slice of generated messages.
#[derive(Debug)]
pub struct ReflectMessagesMarshaler<'a, M> {
    messages: &'a [M],
    options: Options,
}

impl<M: ReflectMessage> ArrayMarshaler for ReflectMessagesMarshaler<'_, M> {
    fn marshal_log_array(&self, enc: &mut dyn ArrayEncoder) -> Result<()> {
        for message in self.messages {
            enc.append_object(&self.options.reflect_marshaler_of(Some(message)))?;
        }
        Ok(())
    }
}

/// Encode `message` into `enc`.
///
/// `typed` controls the `@type` prefix for this message only; `options`
/// travels down to nested values.
fn encode_message(
    enc: &mut dyn ObjectEncoder,
    message: &DynamicMessage,
    typed: bool,
    options: Options,
) -> Result<()> {
    let descriptor = message.descriptor();

    if descriptor.full_name() == ANY_FULL_NAME {
        let payload = unpack_any(message)?;
        return encode_message(enc, &payload, true, options);
    }

    if typed {
        enc.add_string(
            TYPE_KEY,
            &format!("{}{}", TYPE_URL_PREFIX, descriptor.full_name()),
        );
    }

    for field in descriptor.fields() {
        if !message.has_field(&field) {
            continue;
        }
        let value = message.get_field(&field);
        field::encode_field(
            &mut Keyed {
                enc: &mut *enc,
                key: field.json_name(),
            },
            &field,
            &value,
            options,
        )?;
    }

    Ok(())
}

/// Decode the payload of a `google.protobuf.Any` against the wrapper's pool.
fn unpack_any(any: &DynamicMessage) -> Result<DynamicMessage> {
    let type_url = any
        .get_field_by_name("type_url")
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default();
    if type_url.is_empty() {
        return Err(MarshalError::EmptyTypeUrl);
    }

    let type_name = type_url
        .rsplit_once('/')
        .map_or(type_url.as_str(), |(_, name)| name);
    let descriptor = any
        .descriptor()
        .parent_pool()
        .get_message_by_name(type_name)
        .ok_or_else(|| MarshalError::UnknownType {
            type_url: type_url.clone(),
        })?;

    let payload = any
        .get_field_by_name("value")
        .and_then(|v| v.as_bytes().cloned())
        .unwrap_or_default();

    log::trace!("unpacking {} ({} bytes)", descriptor.full_name(), payload.len());

    DynamicMessage::decode(descriptor, payload).map_err(|source| MarshalError::Decode {
        type_name: type_name.to_string(),
        source,
    })
}
