//! Output Emitter
//!
//! Sinks for rendered text. Every line the renderer writes starts with the
//! emitter's base prefix followed by one indent unit per nesting level.

use std::io::{self, Write};

use crate::RenderOptions;

/// Trait for emitting rendered output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit the base prefix and `level` indent units.
    fn emit_indent(&mut self, level: usize);

    /// Emit a single space.
    fn emit_space(&mut self);
}

/// In-memory emitter.
#[derive(Clone, Debug, Default)]
pub struct StringEmitter {
    buffer: String,
    prefix: String,
    indent: String,
}

impl StringEmitter {
    /// Emitter with no base prefix and the default indent unit.
    pub fn new() -> Self {
        Self::with_options(&RenderOptions::default())
    }

    pub fn with_options(options: &RenderOptions) -> Self {
        Self {
            buffer: String::new(),
            prefix: String::new(),
            indent: options.indent.clone(),
        }
    }

    /// Start every line with `prefix`, before any indentation.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_owned();
        self
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        self.buffer.push_str(&self.prefix);
        for _ in 0..level {
            self.buffer.push_str(&self.indent);
        }
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}

/// Streaming emitter over any [`Write`].
///
/// The [`Emitter`] methods cannot fail; the first write error is kept and
/// returned by [`WriterEmitter::finish`], and later writes are skipped.
pub struct WriterEmitter<W: Write> {
    writer: W,
    indent: String,
    error: Option<io::Error>,
}

impl<W: Write> WriterEmitter<W> {
    pub fn new(writer: W, options: &RenderOptions) -> Self {
        Self {
            writer,
            indent: options.indent.clone(),
            error: None,
        }
    }

    /// Flush and hand back the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_none() {
            if let Err(error) = self.writer.write_all(bytes) {
                self.error = Some(error);
            }
        }
    }
}

impl<W: Write> Emitter for WriterEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    fn emit_newline(&mut self) {
        self.write(b"\n");
    }

    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level {
            if self.error.is_some() {
                return;
            }
            if let Err(error) = self.writer.write_all(self.indent.as_bytes()) {
                self.error = Some(error);
            }
        }
    }

    fn emit_space(&mut self) {
        self.write(b" ");
    }
}
