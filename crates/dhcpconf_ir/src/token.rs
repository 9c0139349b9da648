//! Terminal tokens consumed by the parser.
//!
//! The lexer drops whitespace and comments before producing these; every
//! token here is a grammar terminal.

use std::fmt;

use crate::Span;

/// A terminal with its source text and location.
///
/// `text` is the original-case source text. For [`TokenKind::String`] it is
/// the literal's content without the surrounding quotes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Create a token with a dummy span, for tests and synthesized input.
    pub fn dummy(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, Span::DUMMY)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => f.write_str(&self.text),
        }
    }
}

/// Terminal kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // === Punctuation ===
    /// `{`
    BlockStart,
    /// `}`
    BlockEnd,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // === Literals ===
    /// Double-quoted string.
    String,
    /// Any identifier that is not a keyword and has no literal shape.
    Word,
    /// Dotted-quad shape: `1.2.3.4`.
    Ipv4,
    /// Dotted-quad with prefix length: `10.0.0.0/8`.
    Cidr,
    /// Six colon-separated hex groups: `00:0a:1b:2c:3d:4e`.
    Mac,

    // === Declarations ===
    Group,
    Host,
    Subnet,
    Netmask,
    SharedNetwork,
    Include,
    Option,

    // === Parameters ===
    Authoritative,
    Hardware,
    FixedAddress,
    UseHostDeclNames,
    AdaptiveLeaseTimeThreshold,
    AlwaysBroadcast,
    AlwaysReplyRfc1048,
    BootUnknownClients,
    DbTimeFormat,
    DdnsDomainname,
    DdnsHostname,
    DdnsRevDomainname,
    DdnsUpdateStyle,
    DdnsUpdates,
    DefaultLeaseTime,
    DelayedAck,
    DoForwardUpdates,
    DynamicBootpLeaseCutoff,
    MaxAckDelay,

    // === Flag values ===
    On,
    Off,
    True,
    False,

    // === Conditionals and boolean expressions ===
    If,
    Elsif,
    Else,
    And,
    Or,
    Not,
    Exists,
    Known,
    Static,

    // === Comparison operators ===
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `~=`
    RegexMatch,
    /// `~~`
    RegexIMatch,
}

impl TokenKind {
    /// Canonical lowercase spelling, for keywords and punctuation.
    ///
    /// Returns `None` for literal kinds, whose text varies.
    pub fn keyword(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::BlockStart => "{",
            TokenKind::BlockEnd => "}",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::String
            | TokenKind::Word
            | TokenKind::Ipv4
            | TokenKind::Cidr
            | TokenKind::Mac => return None,
            TokenKind::Group => "group",
            TokenKind::Host => "host",
            TokenKind::Subnet => "subnet",
            TokenKind::Netmask => "netmask",
            TokenKind::SharedNetwork => "shared-network",
            TokenKind::Include => "include",
            TokenKind::Option => "option",
            TokenKind::Authoritative => "authoritative",
            TokenKind::Hardware => "hardware",
            TokenKind::FixedAddress => "fixed-address",
            TokenKind::UseHostDeclNames => "use-host-decl-names",
            TokenKind::AdaptiveLeaseTimeThreshold => "adaptive-lease-time-threshold",
            TokenKind::AlwaysBroadcast => "always-broadcast",
            TokenKind::AlwaysReplyRfc1048 => "always-reply-rfc1048",
            TokenKind::BootUnknownClients => "boot-unknown-clients",
            TokenKind::DbTimeFormat => "db-time-format",
            TokenKind::DdnsDomainname => "ddns-domainname",
            TokenKind::DdnsHostname => "ddns-hostname",
            TokenKind::DdnsRevDomainname => "ddns-rev-domainname",
            TokenKind::DdnsUpdateStyle => "ddns-update-style",
            TokenKind::DdnsUpdates => "ddns-updates",
            TokenKind::DefaultLeaseTime => "default-lease-time",
            TokenKind::DelayedAck => "delayed-ack",
            TokenKind::DoForwardUpdates => "do-forward-updates",
            TokenKind::DynamicBootpLeaseCutoff => "dynamic-bootp-lease-cutoff",
            TokenKind::MaxAckDelay => "max-ack-delay",
            TokenKind::On => "on",
            TokenKind::Off => "off",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Elsif => "elsif",
            TokenKind::Else => "else",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Exists => "exists",
            TokenKind::Known => "known",
            TokenKind::Static => "static",
            TokenKind::Equal => "=",
            TokenKind::NotEqual => "!=",
            TokenKind::RegexMatch => "~=",
            TokenKind::RegexIMatch => "~~",
        };
        Some(text)
    }

    /// Human-readable name for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::String => "string",
            TokenKind::Word => "identifier",
            TokenKind::Ipv4 => "IPv4 address",
            TokenKind::Cidr => "network",
            TokenKind::Mac => "hardware address",
            other => other.keyword().unwrap_or("token"),
        }
    }

    /// Whether this is a reserved word of the language.
    pub fn is_keyword(self) -> bool {
        self.keyword()
            .is_some_and(|k| k.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-'))
    }

    /// Whether a token of this kind can serve as a free-form name
    /// (host names, network names, option names).
    pub fn is_word_like(self) -> bool {
        self == TokenKind::Word || self.is_keyword()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
