//! Keyword resolution.
//!
//! Keywords are matched case-insensitively; callers pass lowercased text.
//! The lookup guards on length and first byte before matching, so ordinary
//! identifiers (host names, option names, addresses) are rejected without
//! string comparisons in most cases.

use dhcpconf_ir::TokenKind;

/// Longest keyword: `adaptive-lease-time-threshold`.
const MAX_KEYWORD_LEN: usize = 29;

/// Look up a keyword or comparison operator by lowercased text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let first = *text.as_bytes().first()?;
    if text.len() > MAX_KEYWORD_LEN {
        return None;
    }
    if !first.is_ascii_lowercase() && !matches!(first, b'=' | b'!' | b'~') {
        return None;
    }

    let kind = match text {
        // Declarations
        "group" => TokenKind::Group,
        "host" => TokenKind::Host,
        "subnet" => TokenKind::Subnet,
        "netmask" => TokenKind::Netmask,
        "shared-network" => TokenKind::SharedNetwork,
        "include" => TokenKind::Include,
        "option" => TokenKind::Option,

        // Parameters
        "authoritative" => TokenKind::Authoritative,
        "hardware" => TokenKind::Hardware,
        "fixed-address" => TokenKind::FixedAddress,
        "use-host-decl-names" => TokenKind::UseHostDeclNames,
        "adaptive-lease-time-threshold" => TokenKind::AdaptiveLeaseTimeThreshold,
        "always-broadcast" => TokenKind::AlwaysBroadcast,
        "always-reply-rfc1048" => TokenKind::AlwaysReplyRfc1048,
        "boot-unknown-clients" => TokenKind::BootUnknownClients,
        "db-time-format" => TokenKind::DbTimeFormat,
        "ddns-domainname" => TokenKind::DdnsDomainname,
        "ddns-hostname" => TokenKind::DdnsHostname,
        "ddns-rev-domainname" => TokenKind::DdnsRevDomainname,
        "ddns-update-style" => TokenKind::DdnsUpdateStyle,
        "ddns-updates" => TokenKind::DdnsUpdates,
        "default-lease-time" => TokenKind::DefaultLeaseTime,
        "delayed-ack" => TokenKind::DelayedAck,
        "do-forward-updates" => TokenKind::DoForwardUpdates,
        "dynamic-bootp-lease-cutoff" => TokenKind::DynamicBootpLeaseCutoff,
        "max-ack-delay" => TokenKind::MaxAckDelay,

        // Flag values
        "on" => TokenKind::On,
        "off" => TokenKind::Off,
        "true" => TokenKind::True,
        "false" => TokenKind::False,

        // Conditionals
        "if" => TokenKind::If,
        "elsif" => TokenKind::Elsif,
        "else" => TokenKind::Else,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "exists" => TokenKind::Exists,
        "known" => TokenKind::Known,
        "static" => TokenKind::Static,

        // Comparison operators
        "=" => TokenKind::Equal,
        "!=" => TokenKind::NotEqual,
        "~=" => TokenKind::RegexMatch,
        "~~" => TokenKind::RegexIMatch,

        _ => return None,
    };
    Some(kind)
}
