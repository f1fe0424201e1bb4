// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Log output destinations: stdout, stderr, file (with rotation), memory buffer.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputConfig {
    /// Write to stdout.
    #[default]
    Stdout,
    /// Write to stderr.
    Stderr,
    /// Write to file with optional rotation.
    File {
        path: PathBuf,
        /// Keep existing content instead of truncating on open.
        #[serde(default = "default_append")]
        append: bool,
        #[serde(default)]
        rotation: Option<FileRotation>,
    },
}

fn default_append() -> bool {
    true
}

impl OutputConfig {
    /// Append to `path`, without rotation.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            append: true,
            rotation: None,
        }
    }
}

/// File rotation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRotation {
    /// Maximum file size in bytes before rotation.
    pub max_size: u64,
    /// Maximum number of rotated files to keep.
    pub max_files: u32,
}

impl Default for FileRotation {
    fn default() -> Self {
        Self {
            max_size: 10 * 1024 * 1024, // 10 MB
            max_files: 5,
        }
    }
}

impl FileRotation {
    /// Create rotation config with size in megabytes.
    pub fn with_max_size_mb(mb: u64) -> Self {
        Self {
            max_size: mb * 1024 * 1024,
            ..Default::default()
        }
    }

    /// Set maximum number of backup files.
    pub fn max_files(mut self, count: u32) -> Self {
        self.max_files = count;
        self
    }
}

/// Log output trait.
pub trait LogOutput: Send {
    /// Write a formatted log line.
    fn write(&mut self, line: &str) -> io::Result<()>;

    /// Flush output.
    fn flush(&mut self) -> io::Result<()>;
}

/// Stdout output.
pub struct StdoutOutput {
    handle: io::Stdout,
}

impl StdoutOutput {
    pub fn new() -> Self {
        Self {
            handle: io::stdout(),
        }
    }
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl LogOutput for StdoutOutput {
    fn write(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.handle, "{}", line)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.handle.flush()
    }
}

/// Stderr output.
pub struct StderrOutput {
    handle: io::Stderr,
}

impl StderrOutput {
    pub fn new() -> Self {
        Self {
            handle: io::stderr(),
        }
    }
}

impl Default for StderrOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl LogOutput for StderrOutput {
    fn write(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.handle, "{}", line)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.handle.flush()
    }
}

/// File output with optional rotation.
pub struct FileOutput {
    path: PathBuf,
    writer: BufWriter<File>,
    rotation: Option<FileRotation>,
    current_size: u64,
}

impl FileOutput {
    /// Open file for logging, creating parent directories.
    pub fn open(
        path: impl AsRef<Path>,
        append: bool,
        rotation: Option<FileRotation>,
    ) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = open_log_file(&path, append)?;
        let current_size = file.metadata()?.len();

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            rotation,
            current_size,
        })
    }

    /// Path of the active log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rotate when the active file reached its size limit.
    fn maybe_rotate(&mut self) -> io::Result<()> {
        let max_files = match &self.rotation {
            Some(r) if self.current_size >= r.max_size => r.max_files,
            _ => return Ok(()),
        };

        self.writer.flush()?;

        if max_files == 0 {
            // No backups kept, start over in place
            self.writer = BufWriter::new(open_log_file(&self.path, false)?);
            self.current_size = 0;
            return Ok(());
        }

        // Drop the oldest, then shift: .1 -> .2, .2 -> .3, ...
        let oldest = rotated_path(&self.path, max_files);
        if oldest.exists() {
            std::fs::remove_file(&oldest)?;
        }
        for i in (1..max_files).rev() {
            let old_path = rotated_path(&self.path, i);
            if old_path.exists() {
                std::fs::rename(&old_path, rotated_path(&self.path, i + 1))?;
            }
        }
        std::fs::rename(&self.path, rotated_path(&self.path, 1))?;

        self.writer = BufWriter::new(open_log_file(&self.path, true)?);
        self.current_size = 0;

        Ok(())
    }
}

impl LogOutput for FileOutput {
    fn write(&mut self, line: &str) -> io::Result<()> {
        self.maybe_rotate()?;

        let bytes = line.as_bytes();
        self.writer.write_all(bytes)?;
        self.writer.write_all(b"\n")?;
        self.current_size += bytes.len() as u64 + 1;

        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

fn open_log_file(path: &Path, append: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options.open(path)
}

/// Generate rotated file path.
fn rotated_path(base: &Path, index: u32) -> PathBuf {
    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let ext = base
        .extension()
        .map(|e| e.to_string_lossy())
        .unwrap_or_default();

    let new_name = if ext.is_empty() {
        format!("{}.{}", stem, index)
    } else {
        format!("{}.{}.{}", stem, index, ext)
    };

    base.with_file_name(new_name)
}

/// In-memory output; clones share the same line buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return the lines written so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl LogOutput for BufferOutput {
    fn write(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Create output from configuration.
pub fn create_output(config: &OutputConfig) -> io::Result<Box<dyn LogOutput>> {
    match config {
        OutputConfig::Stdout => Ok(Box::new(StdoutOutput::new())),
        OutputConfig::Stderr => Ok(Box::new(StderrOutput::new())),
        OutputConfig::File {
            path,
            append,
            rotation,
        } => Ok(Box::new(FileOutput::open(path, *append, rotation.clone())?)),
    }
}
