// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Errors raised while marshaling a message into an encoder.

/// Errors produced by a marshaling traversal.
///
/// Every variant aborts the traversal that raised it and is returned
/// unchanged to the caller that invoked the top-level marshaler.
#[derive(Debug, thiserror::Error)]
pub enum MarshalError {
    /// The field's declared kind (or the kind of the value it carries) has
    /// no encoding.
    #[error("cannot marshal value for protobuf field {field}")]
    UnsupportedKind {
        /// Fully qualified field name.
        field: String,
    },

    /// A `google.protobuf.Any` without a type URL.
    #[error("invalid empty type URL")]
    EmptyTypeUrl,

    /// The type URL of a `google.protobuf.Any` names a message unknown to
    /// its descriptor pool.
    #[error("unable to resolve message type for type URL {type_url:?}")]
    UnknownType {
        /// Type URL as found in the wrapper.
        type_url: String,
    },

    /// The payload of a `google.protobuf.Any` does not decode as its
    /// declared type.
    #[error("failed to decode {type_name} payload: {source}")]
    Decode {
        /// Fully qualified name of the payload type.
        type_name: String,
        /// Underlying protobuf decoding error.
        #[source]
        source: prost::DecodeError,
    },

    /// Failure reported by a destination encoder or a caller-defined
    /// marshaler.
    #[error("{0}")]
    Encoder(String),
}

impl MarshalError {
    /// Create an encoder failure from any message.
    pub fn encoder(message: impl Into<String>) -> Self {
        Self::Encoder(message.into())
    }
}

/// Result type for marshaling operations.
pub type Result<T> = std::result::Result<T, MarshalError>;
