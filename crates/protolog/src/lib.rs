// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Reflective protobuf marshaling for structured logs.
//!
//! Turns any [`prost_reflect::DynamicMessage`] into calls on a structured
//! encoder, so a message can become a log field without hand-written
//! serialization code.
//!
//! # Features
//!
//! - **Schema-driven**: fields are walked from the runtime descriptor, in
//!   declaration order; unset fields are skipped
//! - **Lazy**: marshalers borrow the message and only traverse it when the
//!   destination encoder asks for it
//! - **`Any` aware**: `google.protobuf.Any` is unwrapped and tagged with
//!   `@type`
//! - **Typed mode**: optional `@type` prefix on every encoded message
//!
//! # Example
//!
//! ```rust,ignore
//! use protolog::{json::to_json, Options};
//!
//! let request: prost_reflect::DynamicMessage = decode_request()?;
//!
//! let value = to_json(&Options::typed().marshaler_of(Some(&request)))?;
//! println!("{value}");
//! ```
//!
//! # Kind mapping
//!
//! | Protobuf kind | Encoder call |
//! |---------------|--------------|
//! | message | nested object |
//! | bool | `add_bool` |
//! | bytes | `add_string` (standard base64) |
//! | enum | `add_string` (value name) |
//! | float / double | `add_f32` / `add_f64` |
//! | string | `add_string` |
//! | int32, sint32, sfixed32 | `add_i32` |
//! | uint32, fixed32 | `add_u32` |
//! | int64, sint64, sfixed64 | `add_i64` |
//! | uint64, fixed64 | `add_u64` |
//!
//! Repeated fields become nested arrays and map fields nested objects keyed
//! by the string form of the entry key.

pub mod encoder;
pub mod error;
pub mod json;
mod marshal;
#[cfg(any(test, feature = "recorder"))]
pub mod recorder;

#[cfg(test)]
mod fixtures;

pub use encoder::{
    array_marshaler_fn, object_marshaler_fn, ArrayEncoder, ArrayMarshaler, ObjectEncoder,
    ObjectMarshaler,
};
pub use error::{MarshalError, Result};
pub use marshal::{
    marshaler_of, MessageMarshaler, MessagesMarshaler, Options, ReflectMarshaler,
    ReflectMessagesMarshaler, ANY_FULL_NAME, TYPE_KEY, TYPE_URL_PREFIX,
};

pub use prost_reflect;
