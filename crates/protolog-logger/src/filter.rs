// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record filtering by level, logger name, and message.

use crate::record::LogRecord;
use serde::{Deserialize, Serialize};

/// Log severity levels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum LogLevel {
    /// Debug messages for development.
    Debug = 10,
    /// Informational messages.
    #[default]
    Info = 20,
    /// Warning messages.
    Warn = 30,
    /// Error messages.
    Error = 40,
    /// Fatal/critical errors.
    Fatal = 50,
}

impl LogLevel {
    /// Get level name as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Parse level from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" | "TRACE" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARN" | "WARNING" => Some(Self::Warn),
            "ERROR" | "ERR" => Some(Self::Error),
            "FATAL" | "CRITICAL" => Some(Self::Fatal),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log filter configuration.
///
/// Filtering only looks at the record header, never at its fields, so a
/// rejected record costs no marshaling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFilter {
    /// Minimum log level to include.
    pub min_level: LogLevel,
    /// Logger name pattern (glob-style, e.g., "grpc.*").
    pub logger_pattern: Option<String>,
    /// Substring the message must contain.
    pub message_pattern: Option<String>,
}

impl LogFilter {
    /// Create a filter that accepts all records.
    pub fn all() -> Self {
        Self {
            min_level: LogLevel::Debug,
            ..Default::default()
        }
    }

    /// Create a filter for a minimum level.
    pub fn min_level(level: LogLevel) -> Self {
        Self {
            min_level: level,
            ..Default::default()
        }
    }

    /// Check if a record passes this filter.
    pub fn matches(&self, record: &LogRecord<'_>) -> bool {
        if record.level < self.min_level {
            return false;
        }

        // Records without a logger name are not subject to the pattern
        if let Some(ref pattern) = self.logger_pattern {
            if let Some(ref logger) = record.logger {
                if !glob_match(pattern, logger) {
                    return false;
                }
            }
        }

        if let Some(ref pattern) = self.message_pattern {
            if !record.message.contains(pattern.as_str()) {
                return false;
            }
        }

        true
    }
}

/// Simple glob-style pattern matching.
/// Supports: * (any chars), ? (single char)
fn glob_match(pattern: &str, text: &str) -> bool {
    let mut pattern_chars = pattern.chars().peekable();
    let mut text_chars = text.chars().peekable();

    while let Some(p) = pattern_chars.next() {
        match p {
            '*' => {
                while pattern_chars.peek() == Some(&'*') {
                    pattern_chars.next();
                }

                if pattern_chars.peek().is_none() {
                    return true;
                }

                let remaining_pattern: String = pattern_chars.collect();
                while text_chars.peek().is_some() {
                    let remaining_text: String = text_chars.clone().collect();
                    if glob_match(&remaining_pattern, &remaining_text) {
                        return true;
                    }
                    text_chars.next();
                }
                return glob_match(&remaining_pattern, "");
            }
            '?' => {
                if text_chars.next().is_none() {
                    return false;
                }
            }
            c => {
                if text_chars.next() != Some(c) {
                    return false;
                }
            }
        }
    }

    text_chars.peek().is_none()
}
