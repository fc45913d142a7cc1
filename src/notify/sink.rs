//! Output sinks for subscriber reactions.

use super::SinkError;
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Destination for the lines a subscriber writes.
pub trait OrderSink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<(), SinkError>;
}

/// Keeps every line in memory. Useful in tests and for inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl OrderSink for MemorySink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}

/// Writes each line, newline-terminated, to any [`Write`] (stdout, a file, a buffer).
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> OrderSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Emits each line as an `info` tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OrderSink for TracingSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        info!(target: "kitchen", "{line}");
        Ok(())
    }
}
