//! Recursive descent parser for the dhcpconf configuration language.
//!
//! Consumes terminals from a [`TokenStream`] and builds the AST directly;
//! there is no intermediate parse tree. Parsing is fail-fast: the first
//! unexpected terminal or invalid literal aborts the whole decode.

mod error;
mod grammar;
mod stack;
mod token_stream;

use std::io::Read;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use dhcpconf_ir::{Block, Token, TokenKind};
use dhcpconf_lexer::Lexer;

pub use error::ParseError;
pub use token_stream::{TokenSource, TokenStream};

/// Parser configuration.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Maximum nesting of blocks and boolean sub-expressions.
    ///
    /// `and`/`or` nest to the right, so every operand of an unparenthesized
    /// chain after the first is one level deeper than the one before it: a
    /// condition of `n` chained terms uses `n` levels. Raise the limit for
    /// longer chains.
    pub max_depth: usize,
    /// Cooperative cancellation: checked before each token read.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: 256,
            cancel: None,
        }
    }
}

/// Parser state for one decode.
pub struct Parser<I> {
    stream: TokenStream<I>,
    max_depth: usize,
    depth: usize,
}

impl<I: TokenSource> Parser<I> {
    pub fn new(source: I, options: &ParseOptions) -> Self {
        Parser {
            stream: TokenStream::new(source).with_cancel(options.cancel.clone()),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Parse statements until the input ends.
    pub fn parse_config(mut self) -> Result<Block, ParseError> {
        let mut statements = Vec::new();
        while !self.stream.is_at_end()? {
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    // --- Token helpers ---

    /// Consume a token of `kind`, or fail naming what was `expected`.
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        let token = self.stream.next()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::syntax(&token, format!("expected {expected}")))
        }
    }

    fn expect_semicolon(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Semicolon, "`;`").map(drop)
    }

    /// Consume an identifier-like token (plain word or keyword).
    fn word(&mut self, expected: &str) -> Result<Token, ParseError> {
        let token = self.stream.next()?;
        if token.kind.is_word_like() {
            Ok(token)
        } else {
            Err(ParseError::syntax(&token, format!("expected {expected}")))
        }
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(
        &mut self,
        at: &Token,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::syntax(
                at,
                format!("nesting too deep (limit {})", self.max_depth),
            ));
        }
        self.depth += 1;
        let result = stack::ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }
}

/// Parse a configuration from any byte source.
///
/// Bytes are read one at a time; wrap unbuffered sources in a `BufReader`.
pub fn parse<R: Read>(reader: R, options: &ParseOptions) -> Result<Block, ParseError> {
    Parser::new(Lexer::new(reader), options).parse_config()
}

/// Parse an in-memory configuration with default options.
pub fn parse_str(source: &str) -> Result<Block, ParseError> {
    parse(source.as_bytes(), &ParseOptions::default())
}
