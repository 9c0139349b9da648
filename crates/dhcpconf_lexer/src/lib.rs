//! Tokenizer for the dhcpconf configuration language.
//!
//! Two layers:
//! - [`RawLexer`] assembles scanner codes into [`RawToken`]s covering every
//!   input byte, trivia included.
//! - [`Lexer`] cooks raw tokens into parser terminals ([`Token`]): trivia is
//!   dropped, keywords and address shapes are resolved.
//!
//! Both are lazy iterators over a single forward pass of a byte source.

mod cooker;
mod keywords;
mod lex_error;
mod literal;
mod raw;

use std::io::Read;

use dhcpconf_ir::Token;
use tracing::trace;

pub use lex_error::LexError;
pub use raw::{RawKind, RawLexer, RawToken};

/// Lazy terminal stream over a byte source.
///
/// Yields at most one error, after which iteration ends.
pub struct Lexer<R> {
    raw: RawLexer<R>,
    failed: bool,
}

impl<R: Read> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Lexer {
            raw: RawLexer::new(reader),
            failed: false,
        }
    }
}

impl<'a> Lexer<&'a [u8]> {
    /// Lex an in-memory string.
    pub fn for_str(source: &'a str) -> Self {
        Lexer::new(source.as_bytes())
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let cooked = match self.raw.next()? {
                Ok(raw) => cooker::cook(raw),
                Err(e) => Err(e),
            };
            match cooked {
                Ok(Some(token)) => {
                    trace!(kind = ?token.kind, text = %token.text, span = %token.span, "token");
                    return Some(Ok(token));
                }
                Ok(None) => {}
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Lex `source` to completion.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::for_str(source).collect()
}
