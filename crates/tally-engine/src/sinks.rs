//! Output sinks — log lines and on-screen notifications.
//!
//! Sinks are fire-and-forget from the engine's perspective: a write failure
//! never blocks the pipeline. The pipeline swallows sink errors, counts the
//! dropped lines, and moves on.

use std::io::Write;

use tally_core::enums::LogLevel;

use crate::errors::SinkError;

/// Receives one formatted line per processed event or error, plus the
/// multi-line summary block at session end.
pub trait LogSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;
}

/// Receives short human-readable notifications (screen/console display).
pub trait NoticeSink {
    fn show(&mut self, message: &str) -> Result<(), SinkError>;
}

/// Format elapsed session seconds as `HH:MM:SS`.
pub fn format_elapsed(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Render one log line: `[HH:MM:SS] [LEVEL] message`.
pub fn format_line(elapsed_secs: f64, level: LogLevel, message: &str) -> String {
    format!(
        "[{}] [{}] {}",
        format_elapsed(elapsed_secs),
        level.tag(),
        message
    )
}

/// In-memory log sink. Used by tests and buffering hosts.
#[derive(Debug, Default)]
pub struct VecLogSink {
    pub lines: Vec<String>,
}

impl LogSink for VecLogSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// In-memory notice sink.
#[derive(Debug, Default)]
pub struct VecNoticeSink {
    pub messages: Vec<String>,
}

impl NoticeSink for VecNoticeSink {
    fn show(&mut self, message: &str) -> Result<(), SinkError> {
        self.messages.push(message.to_string());
        Ok(())
    }
}

/// Log sink writing each line to any [`Write`] (file, stdout).
pub struct WriterLogSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterLogSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LogSink for WriterLogSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

/// Discards notifications. For headless hosts with no display surface.
#[derive(Debug, Default)]
pub struct NullNoticeSink;

impl NoticeSink for NullNoticeSink {
    fn show(&mut self, _message: &str) -> Result<(), SinkError> {
        Ok(())
    }
}
