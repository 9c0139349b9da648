//! Raw tokenizer: bytes and scanner codes in, [`RawToken`]s out.
//!
//! Every input byte belongs to exactly one raw token, whitespace and comments
//! included. The sequence is produced lazily, one byte read at a time, and
//! cannot be restarted.
//!
//! # Assembly rules
//!
//! - A boundary code (`*Begin`, punctuation) finalizes the token in progress.
//! - `Whitespace` and `IdentifierEnd` bytes extend an open whitespace token or
//!   start a new one. `CommentEnd` (the newline) starts a whitespace token.
//! - `StringEnd` appends the closing quote and finalizes the string.
//! - Punctuation bytes are complete single-byte tokens.
//! - `Continue` appends to the token in progress. Outside any nested state
//!   it comes from a stray control byte, which always goes into an
//!   identifier so the parser rejects it wherever it appears.

use std::collections::VecDeque;
use std::io::{self, Read};

use dhcpconf_ir::Span;
use dhcpconf_lexer_core::{ScanCode, ScanState, Scanner};

use crate::LexError;

/// Raw token categories, before keyword and literal resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RawKind {
    Identifier,
    /// Includes both quotes.
    String,
    Whitespace,
    /// From `#` up to, not including, the newline.
    Comment,
    BlockStart,
    BlockEnd,
    ParenOpen,
    ParenClose,
    Semicolon,
    Comma,
}

/// A contiguous run of input bytes with its category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub kind: RawKind,
    pub data: Vec<u8>,
    pub span: Span,
}

/// Token under construction.
#[derive(Debug)]
struct Pending {
    kind: RawKind,
    data: Vec<u8>,
    start: usize,
}

/// Lazy raw tokenizer over any byte source.
///
/// Reads one byte per step; wrap unbuffered sources in a `BufReader`.
pub struct RawLexer<R> {
    bytes: io::Bytes<R>,
    scanner: Scanner,
    offset: usize,
    pending: Option<Pending>,
    ready: VecDeque<RawToken>,
    done: bool,
}

impl<R: Read> RawLexer<R> {
    pub fn new(reader: R) -> Self {
        RawLexer {
            bytes: reader.bytes(),
            scanner: Scanner::new(),
            offset: 0,
            pending: None,
            ready: VecDeque::new(),
            done: false,
        }
    }

    /// Finalize the token in progress, if any.
    fn flush(&mut self) {
        if let Some(p) = self.pending.take() {
            self.ready.push_back(RawToken {
                kind: p.kind,
                span: Span::from_offsets(p.start, p.start + p.data.len()),
                data: p.data,
            });
        }
    }

    fn start(&mut self, kind: RawKind, byte: u8) {
        self.flush();
        self.pending = Some(Pending {
            kind,
            data: vec![byte],
            start: self.offset,
        });
    }

    fn single(&mut self, kind: RawKind, byte: u8) {
        self.flush();
        self.ready.push_back(RawToken {
            kind,
            data: vec![byte],
            span: Span::from_offsets(self.offset, self.offset + 1),
        });
    }

    /// Append to the open token of `kind`, or start a new one.
    fn extend_or_start(&mut self, kind: RawKind, byte: u8) {
        match &mut self.pending {
            Some(p) if p.kind == kind => p.data.push(byte),
            _ => self.start(kind, byte),
        }
    }

    fn feed(&mut self, byte: u8) -> Result<(), LexError> {
        let outer = self.scanner.state() == ScanState::FindAnyBegin;
        let code = self
            .scanner
            .step(byte)
            .map_err(|source| LexError::Scan {
                offset: self.offset,
                source,
            })?;

        match code {
            ScanCode::Whitespace | ScanCode::IdentifierEnd => {
                self.extend_or_start(RawKind::Whitespace, byte);
            }
            ScanCode::CommentEnd => self.start(RawKind::Whitespace, byte),
            ScanCode::IdentifierBegin => self.start(RawKind::Identifier, byte),
            ScanCode::StringBegin => self.start(RawKind::String, byte),
            ScanCode::CommentBegin => self.start(RawKind::Comment, byte),
            ScanCode::StringEnd => {
                if let Some(p) = &mut self.pending {
                    p.data.push(byte);
                }
                self.flush();
            }
            ScanCode::BlockBegin => self.single(RawKind::BlockStart, byte),
            ScanCode::BlockEnd => self.single(RawKind::BlockEnd, byte),
            ScanCode::ParenOpen => self.single(RawKind::ParenOpen, byte),
            ScanCode::ParenClose => self.single(RawKind::ParenClose, byte),
            ScanCode::Semicolon => self.single(RawKind::Semicolon, byte),
            ScanCode::Comma => self.single(RawKind::Comma, byte),
            ScanCode::Continue if outer => self.extend_or_start(RawKind::Identifier, byte),
            ScanCode::Continue => match &mut self.pending {
                Some(p) => p.data.push(byte),
                None => self.start(RawKind::Identifier, byte),
            },
        }
        self.offset += 1;
        Ok(())
    }

    /// Input exhausted: finalize, rejecting an open string.
    fn finish(&mut self) -> Result<(), LexError> {
        if let Some(p) = &self.pending {
            if p.kind == RawKind::String {
                return Err(LexError::UnterminatedString { offset: p.start });
            }
        }
        self.flush();
        Ok(())
    }
}

impl<R: Read> Iterator for RawLexer<R> {
    type Item = Result<RawToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            let step = match self.bytes.next() {
                Some(Ok(byte)) => self.feed(byte),
                Some(Err(e)) => Err(LexError::Io(e)),
                None => {
                    self.done = true;
                    self.finish()
                }
            };
            if let Err(e) = step {
                self.done = true;
                self.ready.clear();
                return Some(Err(e));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
