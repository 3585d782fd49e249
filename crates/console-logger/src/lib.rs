//! Console Logger
//!
//! `tracing` subscriber for the browser. Each formatted line goes to the
//! devtools console on wasm32 (stderr elsewhere) and into a circular buffer
//! of recent lines that the page can display.

use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Most verbose level that is recorded
    pub level: Level,
    /// Lines kept in the circular buffer
    pub buffer_lines: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
            buffer_lines: 200,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Circular buffer of formatted log lines, shared between the writer and
/// readers
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

static BUFFER: OnceLock<LogBuffer> = OnceLock::new();

/// Install the global subscriber. Call once, early in `main`.
pub fn init(config: LoggerConfig) -> Result<LogBuffer, LoggerError> {
    let buffer = LogBuffer::new(config.buffer_lines);

    tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_ansi(false)
        .with_target(false)
        .with_timer(ChronoTimer)
        .with_writer(ConsoleMakeWriter::new(buffer.clone()))
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialised(e.to_string()))?;

    let _ = BUFFER.set(buffer.clone());
    Ok(buffer)
}

/// Recent lines of the global logger; empty before `init`
pub fn recent_lines() -> Vec<String> {
    BUFFER.get().map(LogBuffer::lines).unwrap_or_default()
}

/// Local wall-clock timestamps via chrono (`SystemTime` is unavailable in
/// the browser)
struct ChronoTimer;

impl FormatTime for ChronoTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// `MakeWriter` handing out one `ConsoleWriter` per event
#[derive(Debug, Clone)]
pub struct ConsoleMakeWriter {
    buffer: LogBuffer,
}

impl ConsoleMakeWriter {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO, self.buffer.clone())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level(), self.buffer.clone())
    }
}

/// Collects one formatted event and emits it when dropped
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    buffer: LogBuffer,
}

impl ConsoleWriter {
    fn new(level: Level, buffer: LogBuffer) -> Self {
        Self {
            level,
            buf: Vec::new(),
            buffer,
        }
    }

    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        write_console(self.level, &line);
        self.buffer.push(line);
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        _ => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_buffer_drops_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push("a".into());
        buffer.push("b".into());
        buffer.push("c".into());
        assert_eq!(buffer.lines(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let buffer = LogBuffer::new(0);
        buffer.push("a".into());
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_writer_emits_on_drop() {
        let buffer = LogBuffer::new(10);
        let make = ConsoleMakeWriter::new(buffer.clone());
        {
            let mut writer = make.make_writer();
            write!(writer, "hello ").unwrap();
            writeln!(writer, "world").unwrap();
            assert!(buffer.lines().is_empty());
        }
        assert_eq!(buffer.lines(), vec!["hello world".to_string()]);
    }

    #[test]
    fn test_subscriber_records_events() {
        let buffer = LogBuffer::new(10);
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_timer(ChronoTimer)
            .with_writer(ConsoleMakeWriter::new(buffer.clone()))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(items = 3, "catalog loaded");
            tracing::warn!("category not found");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("catalog loaded items=3"));
        assert!(lines[1].contains("WARN"));
    }
}
