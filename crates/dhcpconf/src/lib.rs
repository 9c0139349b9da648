//! dhcpconf
//!
//! Reads network-boot service configurations into a typed tree and writes
//! trees back out in canonical form.
//!
//! ```text
//! bytes -> Scanner -> Lexer -> TokenStream -> Parser -> Block
//! Block -> Render -> canonical text
//! ```
//!
//! Decoding is fail-fast: the first lexical, syntax or semantic error ends
//! the call and no partial tree is returned. Encoding cannot fail, and
//! decoding its output yields the same tree. Whitespace and comments are
//! not preserved.
//!
//! `include` statements only record a filename; reading the named file is up
//! to the caller.

use std::io::{self, BufReader, Read, Write};
use std::sync::Once;

use tracing::debug;

pub use dhcpconf_fmt::{render_block, Render, RenderOptions, DEFAULT_INDENT};
pub use dhcpconf_ir::{
    ast, value, AddressList, Block, BoolOperator, BooleanExpression, Branch, Cidr,
    ConditionOperator, ConditionalStatement, DataTerm, DbTimeFormat, DdnsUpdateStyle, ElsifBranch,
    FlagParameter, HardwareAddress, HardwareType, IntegerParameter, LeaseCutoff, MacAddress,
    OptionStatement, Parameter, Span, Statement, TextParameter, Token, TokenKind, ValueError,
};
pub use dhcpconf_lexer::LexError;
pub use dhcpconf_parse::{ParseError, ParseOptions};

/// Decode a configuration from a byte source with default options.
pub fn decode<R: Read>(reader: R) -> Result<Block, ParseError> {
    decode_with_options(reader, &ParseOptions::default())
}

/// Decode a configuration held in memory.
pub fn decode_str(source: &str) -> Result<Block, ParseError> {
    decode_with_options(source.as_bytes(), &ParseOptions::default())
}

/// Decode with an explicit nesting limit and cancellation flag.
pub fn decode_with_options<R: Read>(
    reader: R,
    options: &ParseOptions,
) -> Result<Block, ParseError> {
    let result = dhcpconf_parse::parse(BufReader::new(reader), options);
    match &result {
        Ok(block) => debug!(statements = block.len(), "decoded"),
        Err(error) => debug!(%error, "decode failed"),
    }
    result
}

/// Canonical text of a statement list.
pub fn encode(block: &[Statement]) -> String {
    encode_with_options(block, &RenderOptions::default())
}

pub fn encode_with_options(block: &[Statement], options: &RenderOptions) -> String {
    let text = render_block(block, options);
    debug!(statements = block.len(), bytes = text.len(), "encoded");
    text
}

/// Stream canonical text into `writer`, returning it once flushed.
pub fn encode_to<W: Write>(block: &[Statement], writer: W) -> io::Result<W> {
    let writer = dhcpconf_fmt::render_to_writer(block, &RenderOptions::default(), writer)?;
    debug!(statements = block.len(), "encoded to writer");
    Ok(writer)
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once; only
/// the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed by the host application wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
