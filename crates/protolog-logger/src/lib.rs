// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Protolog Structured Logger
//!
//! Log records whose fields can be whole protobuf messages, serialized
//! through `protolog` only when a record is actually written.
//!
//! # Features
//!
//! - **Message Fields**: [`field::message`], [`field::typed_message`] and
//!   friends borrow a message and marshal it on demand
//! - **Multiple Formats**: JSON (one object per line) or plain text
//! - **Flexible Output**: File (with rotation), stdout, stderr, memory buffer
//! - **Filtering**: By log level, logger name, message content
//! - **Trace Correlation**: `traceId` / `spanId` from an OpenTelemetry context
//!
//! # Example
//!
//! ```rust,ignore
//! use protolog_logger::{field, trace, LogLevel, Logger, LoggerConfig, OutputFormat};
//!
//! let config = LoggerConfig::builder()
//!     .format(OutputFormat::Json)
//!     .output_file("logs/api.log")
//!     .level(LogLevel::Debug)
//!     .build();
//!
//! let mut logger = Logger::new(config)?;
//! logger.info(
//!     "request received",
//!     [
//!         field::typed_message("request", &request),
//!         trace::context(&opentelemetry::Context::current()),
//!     ],
//! )?;
//! ```

pub mod field;
mod filter;
mod formatter;
mod logger;
mod output;
mod record;
pub mod trace;


pub use field::{Field, FieldValue};
pub use filter::{LogFilter, LogLevel};
pub use formatter::{
    create_formatter, JsonFormatter, LogFormatter, OutputFormat, TextFormatter,
};
pub use logger::{Logger, LoggerStats};
pub use output::{
    create_output, BufferOutput, FileOutput, FileRotation, LogOutput, OutputConfig,
    StderrOutput, StdoutOutput,
};
pub use record::LogRecord;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Output configuration.
    pub output: OutputConfig,
    /// Record filter settings.
    pub filter: LogFilter,
}

impl LoggerConfig {
    /// Create a new builder.
    pub fn builder() -> LoggerConfigBuilder {
        LoggerConfigBuilder::default()
    }
}

/// Builder for LoggerConfig.
#[derive(Debug, Default)]
pub struct LoggerConfigBuilder {
    format: Option<OutputFormat>,
    output: Option<OutputConfig>,
    filter: Option<LogFilter>,
}

impl LoggerConfigBuilder {
    /// Set output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Append to a file, without rotation.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(OutputConfig::file(path));
        self
    }

    /// Append to a file with rotation.
    pub fn output_file_rotated(mut self, path: impl Into<PathBuf>, rotation: FileRotation) -> Self {
        self.output = Some(OutputConfig::File {
            path: path.into(),
            append: true,
            rotation: Some(rotation),
        });
        self
    }

    /// Set output to stdout.
    pub fn output_stdout(mut self) -> Self {
        self.output = Some(OutputConfig::Stdout);
        self
    }

    /// Set output to stderr.
    pub fn output_stderr(mut self) -> Self {
        self.output = Some(OutputConfig::Stderr);
        self
    }

    /// Set minimum log level.
    pub fn level(mut self, level: LogLevel) -> Self {
        let mut filter = self.filter.take().unwrap_or_default();
        filter.min_level = level;
        self.filter = Some(filter);
        self
    }

    /// Set logger name filter (glob pattern).
    pub fn logger_filter(mut self, pattern: impl Into<String>) -> Self {
        let mut filter = self.filter.take().unwrap_or_default();
        filter.logger_pattern = Some(pattern.into());
        self.filter = Some(filter);
        self
    }

    /// Set message filter (substring).
    pub fn message_filter(mut self, pattern: impl Into<String>) -> Self {
        let mut filter = self.filter.take().unwrap_or_default();
        filter.message_pattern = Some(pattern.into());
        self.filter = Some(filter);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LoggerConfig {
        LoggerConfig {
            format: self.format.unwrap_or_default(),
            output: self.output.unwrap_or_default(),
            filter: self.filter.unwrap_or_default(),
        }
    }
}
