// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Log records.

use crate::field::Field;
use crate::filter::LogLevel;
use chrono::{DateTime, Utc};

/// A single log record.
///
/// Records borrow the messages behind their fields; formatting has to happen
/// before those messages go out of scope.
#[derive(Debug)]
pub struct LogRecord<'a> {
    /// Timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Severity.
    pub level: LogLevel,
    /// Optional logger name, matched by [`LogFilter::logger_pattern`](crate::LogFilter).
    pub logger: Option<String>,
    /// Log message.
    pub message: String,
    /// Structured fields, in insertion order.
    pub fields: Vec<Field<'a>>,
}

impl<'a> LogRecord<'a> {
    /// Create a record stamped with the current time.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self::at(Utc::now(), level, message)
    }

    /// Create a record with an explicit timestamp.
    pub fn at(timestamp: DateTime<Utc>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            logger: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Set the logger name.
    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = Some(logger.into());
        self
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field<'a>) -> Self {
        self.fields.push(field);
        self
    }

    /// Append several fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field<'a>>) -> Self {
        self.fields.extend(fields);
        self
    }
}
