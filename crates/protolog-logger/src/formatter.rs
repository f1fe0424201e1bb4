// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Log formatters: JSON and text.
//!
//! Both formatters run the field marshalers. A field that fails to marshal
//! leaves no partial output; it is replaced by `<key>Error` holding the
//! error message.

use crate::field::Field;
use crate::filter::LogLevel;
use crate::record::LogRecord;
use protolog::json::JsonObjectEncoder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Output format for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Plain text format (human-readable).
    #[default]
    Text,
    /// JSON format, one object per line.
    Json,
}

/// Log formatter trait.
pub trait LogFormatter {
    /// Format a log record to string.
    fn format(&self, record: &LogRecord<'_>) -> String;
}

/// Key used when `field` fails to marshal.
fn error_key(field: &Field<'_>) -> String {
    if field.key().is_empty() {
        "error".to_string()
    } else {
        format!("{}Error", field.key())
    }
}

/// Prefix given to fields whose key is taken by the record header.
const SHADOWED_PREFIX: &str = "fields.";

/// First of `base`, `base2`, `base3`, ... not yet present in `map`.
fn unused_key(map: &Map<String, Value>, base: String) -> String {
    if !map.contains_key(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}{}", base, n);
        if !map.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Marshal every field of `record` into one ordered JSON map.
fn encode_fields(record: &LogRecord<'_>) -> Map<String, Value> {
    let mut out = Map::new();
    for field in &record.fields {
        let mut scratch = JsonObjectEncoder::new();
        match field.add_to(&mut scratch) {
            Ok(()) => out.extend(scratch.into_map()),
            Err(e) => {
                tracing::debug!(field = field.key(), error = %e, "failed to marshal log field");
                // Earlier failures keep their entry
                let key = unused_key(&out, error_key(field));
                out.insert(key, Value::String(e.to_string()));
            }
        }
    }
    out
}

/// Text formatter for human-readable output.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Include timestamp.
    pub show_timestamp: bool,
    /// Include logger name.
    pub show_logger: bool,
    /// Use colors (ANSI escape codes).
    pub use_colors: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            show_timestamp: true,
            show_logger: true,
            use_colors: true,
        }
    }
}

impl TextFormatter {
    /// Create formatter without colors.
    pub fn no_colors() -> Self {
        Self {
            use_colors: false,
            ..Default::default()
        }
    }

    /// Get ANSI color code for log level.
    fn level_color(&self, level: LogLevel) -> &'static str {
        if !self.use_colors {
            return "";
        }
        match level {
            LogLevel::Debug => "\x1b[36m",   // Cyan
            LogLevel::Info => "\x1b[32m",    // Green
            LogLevel::Warn => "\x1b[33m",    // Yellow
            LogLevel::Error => "\x1b[31m",   // Red
            LogLevel::Fatal => "\x1b[35;1m", // Magenta bold
        }
    }

    /// Get ANSI reset code.
    fn reset(&self) -> &'static str {
        if self.use_colors {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl LogFormatter for TextFormatter {
    fn format(&self, record: &LogRecord<'_>) -> String {
        let mut parts = Vec::new();

        if self.show_timestamp {
            parts.push(record.timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string());
        }

        parts.push(format!(
            "{}[{:5}]{}",
            self.level_color(record.level),
            record.level.as_str(),
            self.reset()
        ));

        if self.show_logger {
            if let Some(ref logger) = record.logger {
                parts.push(format!("[{}]", logger));
            }
        }

        parts.push(record.message.clone());

        // Values are rendered as compact JSON so nested messages stay on one line
        for (key, value) in encode_fields(record) {
            parts.push(format!("{}={}", key, value));
        }

        parts.join(" ")
    }
}

/// JSON formatter for structured logging.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Pretty print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create compact JSON formatter.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Build the JSON object for `record`: header keys first, then fields.
    ///
    /// A field named like a header key (`@timestamp`, `level`, `logger`,
    /// `message`) is written under `fields.<key>` instead.
    pub fn to_value(&self, record: &LogRecord<'_>) -> Value {
        let mut object = Map::new();
        object.insert(
            "@timestamp".to_string(),
            Value::String(record.timestamp.to_rfc3339()),
        );
        object.insert(
            "level".to_string(),
            Value::String(record.level.as_str().to_string()),
        );
        if let Some(ref logger) = record.logger {
            object.insert("logger".to_string(), Value::String(logger.clone()));
        }
        object.insert("message".to_string(), Value::String(record.message.clone()));
        for (key, value) in encode_fields(record) {
            if object.contains_key(&key) {
                // Header keys always describe the record itself
                let renamed = unused_key(&object, format!("{}{}", SHADOWED_PREFIX, key));
                tracing::debug!(field = %key, renamed = %renamed, "log field shadows record header");
                object.insert(renamed, value);
            } else {
                object.insert(key, value);
            }
        }
        Value::Object(object)
    }
}

impl LogFormatter for JsonFormatter {
    fn format(&self, record: &LogRecord<'_>) -> String {
        let value = self.to_value(record);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.unwrap_or_else(|_| record.message.clone())
    }
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn LogFormatter + Send + Sync> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::default()),
        OutputFormat::Json => Box::new(JsonFormatter::compact()),
    }
}
