// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Logger - filters, formats, and writes records.

use crate::{
    field::Field,
    filter::{LogFilter, LogLevel},
    formatter::{create_formatter, LogFormatter},
    output::{create_output, LogOutput},
    record::LogRecord,
    LoggerConfig,
};
use std::io;

/// Structured logger.
///
/// Field marshalers only run for records that pass the filter.
pub struct Logger {
    formatter: Box<dyn LogFormatter + Send + Sync>,
    output: Box<dyn LogOutput>,
    filter: LogFilter,
    stats: LoggerStats,
}

/// Logger statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoggerStats {
    /// Total records received.
    pub records_received: u64,
    /// Records written (after filtering).
    pub records_written: u64,
    /// Records filtered out.
    pub records_filtered: u64,
    /// Write errors.
    pub write_errors: u64,
}

impl Logger {
    /// Create a logger writing to the configured output.
    pub fn new(config: LoggerConfig) -> io::Result<Self> {
        let output = create_output(&config.output)?;
        Ok(Self::with_output(config, output))
    }

    /// Create a logger writing to `output`; `config.output` is ignored.
    pub fn with_output(config: LoggerConfig, output: Box<dyn LogOutput>) -> Self {
        Self {
            formatter: create_formatter(config.format),
            output,
            filter: config.filter,
            stats: LoggerStats::default(),
        }
    }

    /// Get logger statistics.
    pub fn stats(&self) -> &LoggerStats {
        &self.stats
    }

    /// Check if records at `level` can pass the filter.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.filter.min_level
    }

    /// Filter, format, and write a single record.
    pub fn log(&mut self, record: LogRecord<'_>) -> io::Result<()> {
        self.stats.records_received += 1;

        if !self.filter.matches(&record) {
            self.stats.records_filtered += 1;
            return Ok(());
        }

        let line = self.formatter.format(&record);
        match self.output.write(&line) {
            Ok(()) => {
                self.stats.records_written += 1;
                Ok(())
            }
            Err(e) => {
                self.stats.write_errors += 1;
                tracing::warn!(error = %e, "failed to write log record");
                Err(e)
            }
        }
    }

    /// Log `message` with `fields` at `level`.
    pub fn log_with<'a>(
        &mut self,
        level: LogLevel,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field<'a>>,
    ) -> io::Result<()> {
        self.log(LogRecord::new(level, message).with_fields(fields))
    }

    pub fn debug<'a>(
        &mut self,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field<'a>>,
    ) -> io::Result<()> {
        self.log_with(LogLevel::Debug, message, fields)
    }

    pub fn info<'a>(
        &mut self,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field<'a>>,
    ) -> io::Result<()> {
        self.log_with(LogLevel::Info, message, fields)
    }

    pub fn warn<'a>(
        &mut self,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field<'a>>,
    ) -> io::Result<()> {
        self.log_with(LogLevel::Warn, message, fields)
    }

    pub fn error<'a>(
        &mut self,
        message: impl Into<String>,
        fields: impl IntoIterator<Item = Field<'a>>,
    ) -> io::Result<()> {
        self.log_with(LogLevel::Error, message, fields)
    }

    /// Flush output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
