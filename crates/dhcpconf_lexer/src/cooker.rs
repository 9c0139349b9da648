//! Cooking: raw tokens to parser terminals.
//!
//! ```text
//! bytes → Scanner → RawLexer → RawToken → cook → Token
//! ```
//!
//! - **Whitespace/comments**: dropped
//! - **Punctuation**: direct 1:1 mapping
//! - **Strings**: quotes stripped, kind `String`
//! - **Identifiers**: keyword lookup on lowercased text, then literal shapes,
//!   else `Word` with the original-case text

use dhcpconf_ir::{Token, TokenKind};

use crate::raw::{RawKind, RawToken};
use crate::{keywords, literal, LexError};

/// Cook one raw token. Returns `Ok(None)` for trivia.
pub(crate) fn cook(raw: RawToken) -> Result<Option<Token>, LexError> {
    let kind = match raw.kind {
        RawKind::Whitespace | RawKind::Comment => return Ok(None),
        RawKind::BlockStart => TokenKind::BlockStart,
        RawKind::BlockEnd => TokenKind::BlockEnd,
        RawKind::ParenOpen => TokenKind::ParenOpen,
        RawKind::ParenClose => TokenKind::ParenClose,
        RawKind::Semicolon => TokenKind::Semicolon,
        RawKind::Comma => TokenKind::Comma,
        RawKind::String => TokenKind::String,
        RawKind::Identifier => TokenKind::Word,
    };

    let offset = raw.span.start as usize;
    let mut text =
        String::from_utf8(raw.data).map_err(|_| LexError::InvalidUtf8 { offset })?;

    let kind = match kind {
        TokenKind::String => {
            // The raw lexer only emits strings with both quotes present.
            text.pop();
            if !text.is_empty() {
                text.remove(0);
            }
            TokenKind::String
        }
        TokenKind::Word => classify(&text),
        other => other,
    };

    Ok(Some(Token::new(kind, text, raw.span)))
}

/// Resolve an identifier's terminal kind.
pub(crate) fn classify(text: &str) -> TokenKind {
    keywords::lookup(&text.to_ascii_lowercase()).unwrap_or_else(|| literal::classify(text))
}
