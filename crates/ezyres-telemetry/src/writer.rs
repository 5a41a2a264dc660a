//! Line writers that route formatted events to the host's log sink.
//!
//! # Design
//! - The fmt layer formats one event per writer; the writer buffers the line
//!   and flushes it on drop so each event becomes exactly one console entry.
//! - On wasm the sink is the browser console, chosen by event level so
//!   devtools filtering keeps working. Natively the sink is stderr.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// [`MakeWriter`] that emits to the browser console on wasm and stderr elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

/// Buffered writer for a single formatted event.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let text = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        self.buffer.clear();
        if text.is_empty() { None } else { Some(text) }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            emit(self.level, &line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use gloo::console;
    if level == Level::ERROR {
        console::error!(line);
    } else if level == Level::WARN {
        console::warn!(line);
    } else if level == Level::INFO {
        console::info!(line);
    } else {
        console::debug!(line);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_buffers_until_flush() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"partial ").unwrap();
        writer.write_all(b"line\n").unwrap();
        assert_eq!(writer.take_line().as_deref(), Some("partial line"));
        assert!(writer.take_line().is_none());
    }

    #[test]
    fn blank_output_is_not_emitted() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b"\n\n").unwrap();
        assert!(writer.take_line().is_none());
    }

    #[test]
    fn default_writer_logs_at_info() {
        let maker = ConsoleMakeWriter;
        assert_eq!(maker.make_writer().level, Level::INFO);
    }
}
