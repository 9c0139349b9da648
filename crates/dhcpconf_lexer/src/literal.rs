//! Shape recognition for address literals.
//!
//! Shapes are purely lexical; a token can match the IPv4 shape and still be
//! an invalid address (`999.999.999.999`). Value checks happen in the parser.

use dhcpconf_ir::TokenKind;

fn all(text: &str, pred: impl Fn(u8) -> bool) -> bool {
    !text.is_empty() && text.bytes().all(pred)
}

/// Six colon-separated runs of hex digits.
pub(crate) fn is_mac_shape(text: &str) -> bool {
    let mut groups = 0;
    for group in text.split(':') {
        if !all(group, |b| b.is_ascii_hexdigit()) {
            return false;
        }
        groups += 1;
    }
    groups == 6
}

/// Four dot-separated runs of 1-3 decimal digits.
pub(crate) fn is_ipv4_shape(text: &str) -> bool {
    let mut octets = 0;
    for octet in text.split('.') {
        if octet.len() > 3 || !all(octet, |b| b.is_ascii_digit()) {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

/// IPv4 shape, `/`, then 1-2 decimal digits.
pub(crate) fn is_cidr_shape(text: &str) -> bool {
    match text.split_once('/') {
        Some((address, prefix)) => {
            prefix.len() <= 2 && all(prefix, |b| b.is_ascii_digit()) && is_ipv4_shape(address)
        }
        None => false,
    }
}

/// Classify a non-keyword identifier, testing MAC, then CIDR, then IPv4.
pub(crate) fn classify(text: &str) -> TokenKind {
    if is_mac_shape(text) {
        TokenKind::Mac
    } else if is_cidr_shape(text) {
        TokenKind::Cidr
    } else if is_ipv4_shape(text) {
        TokenKind::Ipv4
    } else {
        TokenKind::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_literal_shapes() {
        assert_eq!(classify("0:01:a2:3b:4:50"), TokenKind::Mac);
        assert_eq!(classify("000:0a:1b:2c:3d:4e"), TokenKind::Mac);
        assert_eq!(classify("10.0.0.0/8"), TokenKind::Cidr);
        assert_eq!(classify("1.2.3.4"), TokenKind::Ipv4);
        assert_eq!(classify("999.999.999.999"), TokenKind::Ipv4);
    }

    #[test]
    fn near_misses_are_words() {
        for text in [
            "serverA.myDomain.tld",
            "1.2.3",
            "1.2.3.4.5",
            "1234.1.1.1",
            "10.0.0.0/123",
            "10.0.0.0/",
            "23:59:59",
            "1999/12/31",
            "0:1:2:3:4:g",
            "0:1:2:3:4:5:6",
            "1",
        ] {
            assert_eq!(classify(text), TokenKind::Word, "{text:?}");
        }
    }
}
