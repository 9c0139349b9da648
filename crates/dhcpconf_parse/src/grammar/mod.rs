//! Grammar productions.
//!
//! ```text
//! config      := statement*
//! statement   := declaration | parameter | option | conditional
//! block       := "{" statement* "}"
//! ```
//!
//! Statement dispatch goes through a keyword table built once per process.
//! Each production builds its AST node as soon as it is matched.

mod conditional;
mod declaration;
mod expr;
mod option;
mod parameter;

use std::sync::OnceLock;

use dhcpconf_ir::{
    Block, FlagParameter, IntegerParameter, Statement, TextParameter, TokenKind,
};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{ParseError, Parser, TokenSource};

/// Production selected by a statement's leading keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum StatementKind {
    Group,
    Host,
    SharedNetwork,
    Subnet,
    Include,
    Authoritative,
    /// `not` at statement level; only `not authoritative` is valid.
    Negation,
    Flag(FlagParameter),
    Integer(IntegerParameter),
    Text(TextParameter),
    DdnsUpdateStyle,
    DbTimeFormat,
    DynamicBootpLeaseCutoff,
    FixedAddress,
    Hardware,
    Option,
    Conditional,
}

type StatementTable = FxHashMap<TokenKind, StatementKind>;

fn build_statement_table() -> StatementTable {
    use FlagParameter as F;
    use IntegerParameter as N;
    use TextParameter as T;

    let entries = [
        (TokenKind::Group, StatementKind::Group),
        (TokenKind::Host, StatementKind::Host),
        (TokenKind::SharedNetwork, StatementKind::SharedNetwork),
        (TokenKind::Subnet, StatementKind::Subnet),
        (TokenKind::Include, StatementKind::Include),
        (TokenKind::Authoritative, StatementKind::Authoritative),
        (TokenKind::Not, StatementKind::Negation),
        (TokenKind::AlwaysBroadcast, StatementKind::Flag(F::AlwaysBroadcast)),
        (TokenKind::AlwaysReplyRfc1048, StatementKind::Flag(F::AlwaysReplyRfc1048)),
        (TokenKind::BootUnknownClients, StatementKind::Flag(F::BootUnknownClients)),
        (TokenKind::DdnsUpdates, StatementKind::Flag(F::DdnsUpdates)),
        (TokenKind::DoForwardUpdates, StatementKind::Flag(F::DoForwardUpdates)),
        (TokenKind::UseHostDeclNames, StatementKind::Flag(F::UseHostDeclNames)),
        (
            TokenKind::AdaptiveLeaseTimeThreshold,
            StatementKind::Integer(N::AdaptiveLeaseTimeThreshold),
        ),
        (TokenKind::DefaultLeaseTime, StatementKind::Integer(N::DefaultLeaseTime)),
        (TokenKind::DelayedAck, StatementKind::Integer(N::DelayedAck)),
        (TokenKind::MaxAckDelay, StatementKind::Integer(N::MaxAckDelay)),
        (TokenKind::DdnsDomainname, StatementKind::Text(T::DdnsDomainname)),
        (TokenKind::DdnsHostname, StatementKind::Text(T::DdnsHostname)),
        (TokenKind::DdnsRevDomainname, StatementKind::Text(T::DdnsRevDomainname)),
        (TokenKind::DdnsUpdateStyle, StatementKind::DdnsUpdateStyle),
        (TokenKind::DbTimeFormat, StatementKind::DbTimeFormat),
        (TokenKind::DynamicBootpLeaseCutoff, StatementKind::DynamicBootpLeaseCutoff),
        (TokenKind::FixedAddress, StatementKind::FixedAddress),
        (TokenKind::Hardware, StatementKind::Hardware),
        (TokenKind::Option, StatementKind::Option),
        (TokenKind::If, StatementKind::Conditional),
    ];
    entries.into_iter().collect()
}

static STATEMENT_TABLE: OnceLock<StatementTable> = OnceLock::new();

/// Keyword-to-production table (lazily initialized, read-only).
fn statement_table() -> &'static StatementTable {
    STATEMENT_TABLE.get_or_init(build_statement_table)
}

impl<I: TokenSource> Parser<I> {
    /// Parse one statement.
    pub(crate) fn statement(&mut self) -> Result<Statement, ParseError> {
        let token = self.stream.next()?;
        let Some(&kind) = statement_table().get(&token.kind) else {
            return Err(ParseError::syntax(&token, "expected a statement"));
        };
        debug!(statement = ?kind, span = %token.span, depth = self.depth, "statement");

        match kind {
            StatementKind::Group => self.group(),
            StatementKind::Host => self.host(),
            StatementKind::SharedNetwork => self.shared_network(),
            StatementKind::Subnet => self.subnet(),
            StatementKind::Include => self.include(),
            StatementKind::Authoritative => self.authoritative(),
            StatementKind::Negation => self.negation(),
            StatementKind::Flag(flag) => self.flag(flag),
            StatementKind::Integer(param) => self.integer(param),
            StatementKind::Text(param) => self.text(param),
            StatementKind::DdnsUpdateStyle => self.ddns_update_style(),
            StatementKind::DbTimeFormat => self.db_time_format(),
            StatementKind::DynamicBootpLeaseCutoff => self.lease_cutoff(),
            StatementKind::FixedAddress => self.fixed_address(),
            StatementKind::Hardware => self.hardware(),
            StatementKind::Option => self.option(),
            StatementKind::Conditional => self.conditional(),
        }
    }

    /// `"{" statement* "}"`
    pub(crate) fn block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenKind::BlockStart, "`{`")?;
        self.nested(&open, |p| {
            let mut statements = Vec::new();
            loop {
                let at_close = p
                    .stream
                    .peek()?
                    .is_some_and(|t| t.kind == TokenKind::BlockEnd);
                if at_close {
                    p.stream.next()?;
                    return Ok(statements);
                }
                statements.push(p.statement()?);
            }
        })
    }
}
