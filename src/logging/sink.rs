//! Output sinks.
//!
//! A sink is the append-only destination that receives formatted log lines,
//! typically the editor's output channel. The host owns the sink's lifecycle;
//! the logger only holds a shared reference and never closes or flushes it.

use std::io::Write;

use parking_lot::Mutex;

/// Append-only, order-preserving line destination.
///
/// Implementations define their own failure contract; the logger layer adds
/// no validation, retry, or recovery on top.
pub trait Sink: Send + Sync {
    /// Append one line of text.
    fn append_line(&self, line: &str);
}

/// Sink that collects lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, in append order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Sink for MemorySink {
    fn append_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

/// Sink that appends newline-terminated lines to any writer.
///
/// Write errors are discarded; this sink is best-effort.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn append_line(&self, line: &str) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
    }
}

/// Sink that discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl Sink for NoopSink {
    fn append_line(&self, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        sink.append_line("first");
        sink.append_line("second");
        sink.append_line("third");
        assert_eq!(sink.lines(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_writer_sink_terminates_lines() {
        let sink = WriterSink::new(Vec::new());
        sink.append_line("alpha");
        sink.append_line("beta");
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "alpha\nbeta\n");
    }

    #[test]
    fn test_noop_sink_accepts_lines() {
        NoopSink.append_line("dropped");
    }
}
