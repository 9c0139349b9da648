//! Parse error types.
//!
//! One enum covers every way a decode can fail. The first error aborts the
//! decode; nothing parsed before it is returned.

use dhcpconf_ir::{Span, Token, ValueError};
use dhcpconf_lexer::LexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed byte stream.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Unexpected terminal.
    #[error("syntax error at {span}: unexpected `{found}`, {message}")]
    Syntax {
        /// Offending token text.
        found: String,
        span: Span,
        message: String,
    },

    /// Well-formed literal with an invalid value.
    #[error("invalid value `{found}` at {span}: {source}")]
    Semantic {
        found: String,
        span: Span,
        #[source]
        source: ValueError,
    },

    /// A token was required but the input had ended.
    #[error("unexpected end of input")]
    StreamExhausted,

    /// The caller's cancellation flag was raised.
    #[error("decode cancelled")]
    Cancelled,
}

impl ParseError {
    pub(crate) fn syntax(token: &Token, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            found: token.to_string(),
            span: token.span,
            message: message.into(),
        }
    }

    pub(crate) fn semantic(token: &Token, source: ValueError) -> Self {
        ParseError::Semantic {
            found: token.to_string(),
            span: token.span,
            source,
        }
    }

    /// Source location of the offending token, when there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Syntax { span, .. } | ParseError::Semantic { span, .. } => Some(*span),
            ParseError::Lex(_) | ParseError::StreamExhausted | ParseError::Cancelled => None,
        }
    }

    /// Offending token text, for syntax and semantic errors.
    pub fn found(&self) -> Option<&str> {
        match self {
            ParseError::Syntax { found, .. } | ParseError::Semantic { found, .. } => Some(found),
            ParseError::Lex(_) | ParseError::StreamExhausted | ParseError::Cancelled => None,
        }
    }
}
