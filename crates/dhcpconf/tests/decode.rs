//! End-to-end decode/encode behavior through the public facade.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::{self, Read};
use std::net::Ipv4Addr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use dhcpconf::{
    decode, decode_str, decode_with_options, encode, encode_to, init_tracing, AddressList,
    BooleanExpression, ConditionOperator, ConditionalStatement, DataTerm, HardwareAddress,
    HardwareType, LexError, MacAddress, Parameter, ParseError, ParseOptions, Render, Statement,
    ValueError,
};
use pretty_assertions::assert_eq;

fn deep_tree() -> Statement {
    Statement::Group {
        statements: vec![Statement::Subnet {
            network: Ipv4Addr::new(192, 168, 1, 0),
            netmask: Ipv4Addr::new(255, 255, 255, 0),
            statements: vec![Statement::Host {
                name: "pxe-client".to_owned(),
                statements: vec![
                    Parameter::Hardware(HardwareAddress {
                        kind: HardwareType::Ethernet,
                        address: MacAddress([0, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]),
                    })
                    .into(),
                    Parameter::FixedAddress(AddressList::single(Ipv4Addr::new(192, 168, 1, 10))).into(),
                    Statement::Include {
                        filename: "pxe-client.conf".to_owned(),
                    },
                ],
            }],
        }],
    }
}

#[test]
fn nested_tree_round_trips() {
    init_tracing();
    let tree = deep_tree();
    let decoded = decode(tree.render("").as_bytes()).unwrap();
    assert_eq!(decoded, vec![tree]);
}

#[test]
fn encode_matches_statement_render() {
    let tree = deep_tree();
    assert_eq!(encode(std::slice::from_ref(&tree)), tree.render(""));
    let written = encode_to(std::slice::from_ref(&tree), Vec::new()).unwrap();
    assert_eq!(String::from_utf8(written).unwrap(), tree.render(""));
}

#[test]
fn conditional_chain() {
    let block = decode_str(
        r#"if "foo" != "foo" or option domain = "foo" and not static {} elsif known {} elsif "foo" ~~ "FOO" {} else {}"#,
    )
    .unwrap();
    let [Statement::Conditional(chain)] = block.as_slice() else {
        panic!("expected one conditional, got {block:?}");
    };
    assert_eq!(
        chain.sub_conditionals(),
        vec![
            ConditionOperator::Elsif,
            ConditionOperator::Elsif,
            ConditionOperator::Else
        ]
    );
    let foo = || DataTerm::StringConst("foo".to_owned());
    assert_eq!(
        chain.condition,
        BooleanExpression::or(
            BooleanExpression::Inequal(foo(), foo()),
            BooleanExpression::and(
                BooleanExpression::Equal(DataTerm::PacketOption("domain".to_owned()), foo()),
                !BooleanExpression::Static,
            ),
        )
    );
    assert_eq!(decode_str(&encode(&block)).unwrap(), block);
}

#[test]
fn address_lists() {
    for (text, addresses) in [
        ("fixed-address 1.2.3.4;\n", vec![Ipv4Addr::new(1, 2, 3, 4)]),
        (
            "fixed-address 1.2.3.4, 5.6.7.8;\n",
            vec![Ipv4Addr::new(1, 2, 3, 4), Ipv4Addr::new(5, 6, 7, 8)],
        ),
    ] {
        let block = decode_str(text).unwrap();
        let addresses = AddressList::try_from(addresses).unwrap();
        assert_eq!(block, vec![Parameter::FixedAddress(addresses).into()]);
        assert_eq!(encode(&block), text);
    }
}

#[test]
fn empty_address_list_is_rejected() {
    assert!(AddressList::try_from(Vec::new()).is_err());
    for text in ["fixed-address;", "option routers;", "option domain-name-servers ;"] {
        let err = decode_str(text).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }), "{text:?}: {err:?}");
    }
}

#[test]
fn negation_lookahead() {
    for (text, value) in [("authoritative;\n", true), ("not authoritative;\n", false)] {
        let block = decode_str(text).unwrap();
        assert_eq!(block, vec![Parameter::Authoritative(value).into()]);
        assert_eq!(encode(&block), text);
    }
}

#[test]
fn invalid_address_is_semantic() {
    let err = decode_str("fixed-address 1.2.3.4, 999.999.999.999;").unwrap_err();
    assert!(
        matches!(
            err,
            ParseError::Semantic {
                source: ValueError::InvalidIpv4(_),
                ..
            }
        ),
        "{err:?}"
    );
    assert_eq!(err.found(), Some("999.999.999.999"));
}

#[test]
fn month_out_of_range_is_semantic() {
    let err = decode_str("dynamic-bootp-lease-cutoff 1 1999/13/31 23:59:59;").unwrap_err();
    assert!(
        matches!(
            err,
            ParseError::Semantic {
                source: ValueError::FieldOutOfRange { field: "month", .. },
                ..
            }
        ),
        "{err:?}"
    );
}

#[test]
fn first_error_aborts_without_partial_result() {
    let err = decode_str("authoritative; group { bogus; }").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }), "{err:?}");
    assert_eq!(err.found(), Some("bogus"));
}

#[test]
fn stray_control_byte_is_rejected_after_any_spacing() {
    for source in ["authoritative;\x01", "authoritative; \x01", "authoritative;\n\x01\x02"] {
        let err = decode_str(source).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }), "{source:?}: {err:?}");
    }
}

#[test]
fn truncated_input_exhausts_stream() {
    assert!(matches!(
        decode_str("host a { authoritative;"),
        Err(ParseError::StreamExhausted)
    ));
}

#[test]
fn unterminated_string_is_lex_error() {
    assert!(matches!(
        decode_str("include \"never closed;"),
        Err(ParseError::Lex(LexError::UnterminatedString { offset: 8 }))
    ));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "gone"))
    }
}

#[test]
fn reader_errors_surface_as_lex_errors() {
    assert!(matches!(
        decode(FailingReader),
        Err(ParseError::Lex(LexError::Io(_)))
    ));
}

#[test]
fn options_limit_depth_and_cancel() {
    let shallow = ParseOptions {
        max_depth: 2,
        ..ParseOptions::default()
    };
    let deep = "group { group { group { } } }";
    assert!(matches!(
        decode_with_options(deep.as_bytes(), &shallow),
        Err(ParseError::Syntax { .. })
    ));
    assert!(decode_with_options(deep.as_bytes(), &ParseOptions::default()).is_ok());

    let cancelled = ParseOptions {
        cancel: Some(Arc::new(AtomicBool::new(true))),
        ..ParseOptions::default()
    };
    assert!(matches!(
        decode_with_options("authoritative;".as_bytes(), &cancelled),
        Err(ParseError::Cancelled)
    ));
}

#[test]
fn encode_of_empty_block_is_empty() {
    let empty: Vec<Statement> = Vec::new();
    assert_eq!(encode(&empty), "");
    assert_eq!(decode_str("").unwrap(), empty);
}

#[test]
fn chain_built_in_code_round_trips() {
    let chain = ConditionalStatement::new(
        BooleanExpression::and(
            BooleanExpression::or(BooleanExpression::Known, BooleanExpression::Static),
            BooleanExpression::Exists(DataTerm::PacketOption("agent".to_owned())),
        ),
        vec![Parameter::Authoritative(true).into()],
    )
    .with_else(vec![]);
    let block = vec![Statement::from(chain)];
    assert_eq!(decode_str(&encode(&block)).unwrap(), block);
}
