//! Text Sinks
//!
//! The writer emits through a minimal line-oriented sink: raw text, line
//! breaks, and an indentation level. The indentation prefix is written
//! lazily before the first text of a line, so blank lines never carry
//! trailing whitespace.

use std::io;

pub trait TextSink {
    /// Append text to the current line.
    fn append_raw(&mut self, text: &str) -> io::Result<()>;

    /// Terminate the current line.
    fn start_new_line(&mut self) -> io::Result<()>;

    /// Indentation level applied to lines started from now on.
    fn set_indent(&mut self, level: usize);

    /// Text written once per indentation level.
    fn set_indent_unit(&mut self, _unit: &str) {}
}

/// Shared line bookkeeping for the concrete sinks.
#[derive(Clone, Debug)]
struct LineState {
    indent_unit: String,
    indent: usize,
    at_line_start: bool,
}

impl LineState {
    fn new() -> Self {
        LineState {
            indent_unit: "  ".to_string(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Indentation owed before `text`, if this is the first text of a line.
    fn pending_prefix(&mut self, text: &str) -> Option<String> {
        if !self.at_line_start || text.is_empty() {
            return None;
        }
        self.at_line_start = false;
        if self.indent == 0 {
            None
        } else {
            Some(self.indent_unit.repeat(self.indent))
        }
    }
}

// =============================================================================
// In-memory sink
// =============================================================================

/// Sink collecting output into a `String`.
#[derive(Clone, Debug)]
pub struct StringSink {
    output: String,
    line: LineState,
}

impl StringSink {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        StringSink {
            output: String::with_capacity(capacity),
            line: LineState::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl Default for StringSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSink for StringSink {
    fn append_raw(&mut self, text: &str) -> io::Result<()> {
        if let Some(prefix) = self.line.pending_prefix(text) {
            self.output.push_str(&prefix);
        }
        self.output.push_str(text);
        Ok(())
    }

    fn start_new_line(&mut self) -> io::Result<()> {
        self.output.push('\n');
        self.line.at_line_start = true;
        Ok(())
    }

    fn set_indent(&mut self, level: usize) {
        self.line.indent = level;
    }

    fn set_indent_unit(&mut self, unit: &str) {
        self.line.indent_unit = unit.to_string();
    }
}

// =============================================================================
// io::Write adapter
// =============================================================================

/// Sink forwarding to any `io::Write` (a file, a socket, stdout).
///
/// The sink never closes the writer; [`IoSink::into_inner`] hands it back.
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
    line: LineState,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        IoSink {
            inner,
            line: LineState::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> TextSink for IoSink<W> {
    fn append_raw(&mut self, text: &str) -> io::Result<()> {
        if let Some(prefix) = self.line.pending_prefix(text) {
            self.inner.write_all(prefix.as_bytes())?;
        }
        self.inner.write_all(text.as_bytes())
    }

    fn start_new_line(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\n")?;
        self.line.at_line_start = true;
        Ok(())
    }

    fn set_indent(&mut self, level: usize) {
        self.line.indent = level;
    }

    fn set_indent_unit(&mut self, unit: &str) {
        self.line.indent_unit = unit.to_string();
    }
}

#[cfg(test)]
#[path = "../tests/sink.rs"]
mod tests;
