//! Lexer error types.

use std::io;

use dhcpconf_lexer_core::ScanError;
use thiserror::Error;

/// Malformed byte stream.
///
/// Offsets are byte positions in the input.
#[derive(Debug, Error)]
pub enum LexError {
    /// The scanner rejected a byte (unbalanced lexical context).
    #[error("malformed input at byte {offset}: {source}")]
    Scan {
        offset: usize,
        #[source]
        source: ScanError,
    },
    /// Input ended inside a double-quoted string.
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString { offset: usize },
    /// A token's bytes are not valid UTF-8.
    #[error("token starting at byte {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },
    /// Reading the byte source failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl LexError {
    /// Byte offset the error points at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            LexError::Scan { offset, .. }
            | LexError::UnterminatedString { offset }
            | LexError::InvalidUtf8 { offset } => Some(*offset),
            LexError::Io(_) => None,
        }
    }
}
