//! Rewindable cursor over a lazily lexed token sequence.
//!
//! Tokens are pulled from the lexer on demand and kept, so the cursor can
//! move back over tokens it has already returned. Rewinding never goes below
//! the start, and never re-reads the byte source.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dhcpconf_ir::Token;
use dhcpconf_lexer::LexError;
use tracing::trace;

use crate::ParseError;

/// Anything that yields lexed terminals.
pub trait TokenSource: Iterator<Item = Result<Token, LexError>> {}

impl<I: Iterator<Item = Result<Token, LexError>>> TokenSource for I {}

/// Cursor over the tokens of one decode.
pub struct TokenStream<I> {
    source: I,
    /// Every token pulled so far, in order.
    buffer: Vec<Token>,
    /// Index of the token the next `next()` returns.
    pos: usize,
    source_done: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl<I: TokenSource> TokenStream<I> {
    pub fn new(source: I) -> Self {
        TokenStream {
            source,
            buffer: Vec::new(),
            pos: 0,
            source_done: false,
            cancel: None,
        }
    }

    /// Check `flag` before each token read; once set, reads fail with
    /// [`ParseError::Cancelled`].
    #[must_use]
    pub fn with_cancel(mut self, flag: Option<Arc<AtomicBool>>) -> Self {
        self.cancel = flag;
        self
    }

    /// Make sure the token at `pos` is buffered, if the input has one.
    fn fill(&mut self) -> Result<bool, ParseError> {
        if self.pos < self.buffer.len() {
            return Ok(true);
        }
        if self.source_done {
            return Ok(false);
        }
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(ParseError::Cancelled);
            }
        }
        match self.source.next() {
            Some(token) => {
                self.buffer.push(token?);
                Ok(true)
            }
            None => {
                self.source_done = true;
                Ok(false)
            }
        }
    }

    /// Return the token at the cursor and advance.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Token, ParseError> {
        if !self.fill()? {
            return Err(ParseError::StreamExhausted);
        }
        let token = self.buffer[self.pos].clone();
        self.pos += 1;
        trace!(pos = self.pos, kind = ?token.kind, "next");
        Ok(token)
    }

    /// The token at the cursor, without advancing. `None` at end of input.
    pub fn peek(&mut self) -> Result<Option<&Token>, ParseError> {
        if self.fill()? {
            Ok(self.buffer.get(self.pos))
        } else {
            Ok(None)
        }
    }

    /// Move the cursor back one token. No-op at the start.
    pub fn undo(&mut self) {
        self.pos = self.pos.saturating_sub(1);
        trace!(pos = self.pos, "undo");
    }

    /// Number of tokens consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&mut self) -> Result<bool, ParseError> {
        Ok(!self.fill()?)
    }
}
