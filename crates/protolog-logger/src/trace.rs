// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! OpenTelemetry trace correlation fields.
//!
//! Adds `traceId` and `spanId` to a record so log lines can be joined with
//! the spans they were emitted under. Invalid (all-zero) ids are omitted.

use crate::field::Field;
use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt as _, TraceId};
use opentelemetry::Context;
use protolog::{ObjectEncoder, ObjectMarshaler};

/// Key holding the 32-hex-digit trace id.
pub const TRACE_ID_KEY: &str = "traceId";
/// Key holding the 16-hex-digit span id.
pub const SPAN_ID_KEY: &str = "spanId";

/// Writes the ids of a span context as top-level entries.
#[derive(Debug, Clone)]
pub struct SpanContextMarshaler {
    span_context: SpanContext,
}

impl SpanContextMarshaler {
    pub fn new(span_context: SpanContext) -> Self {
        Self { span_context }
    }
}

impl ObjectMarshaler for SpanContextMarshaler {
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> protolog::Result<()> {
        let trace_id = self.span_context.trace_id();
        if trace_id != TraceId::INVALID {
            enc.add_string(TRACE_ID_KEY, &trace_id.to_string());
        }
        let span_id = self.span_context.span_id();
        if span_id != SpanId::INVALID {
            enc.add_string(SPAN_ID_KEY, &span_id.to_string());
        }
        Ok(())
    }
}

/// Inline field carrying the ids of `span_context`.
pub fn span_context(span_context: &SpanContext) -> Field<'static> {
    Field::inline(SpanContextMarshaler::new(span_context.clone()))
}

/// Inline field carrying the ids of the span active in `cx`.
pub fn context(cx: &Context) -> Field<'static> {
    span_context(cx.span().span_context())
}
