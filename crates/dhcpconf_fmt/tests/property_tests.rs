//! Property-based tests for the renderer.
//!
//! Generates arbitrary trees over the whole statement set and checks the
//! round-trip law: decoding a rendered statement yields exactly that
//! statement back, and rendering is a fixed point after one round trip.
//!
//! Generated names are single identifiers and generated strings contain no
//! `"`; nothing else in the language can be expressed otherwise.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::net::Ipv4Addr;

use dhcpconf_fmt::{render_block, Render, RenderOptions};
use dhcpconf_ir::{
    AddressList, BoolOperator, BooleanExpression, ConditionalStatement, DataTerm, DbTimeFormat,
    DdnsUpdateStyle, FlagParameter, HardwareAddress, HardwareType, IntegerParameter, LeaseCutoff,
    MacAddress, OptionStatement, Parameter, Statement, TextParameter,
};
use dhcpconf_parse::parse_str;
use proptest::prelude::*;

// -- Leaves --

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,10}").expect("valid regex")
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ._/-]{0,16}").expect("valid regex")
}

fn ip_strategy() -> impl Strategy<Value = Ipv4Addr> {
    any::<[u8; 4]>().prop_map(Ipv4Addr::from)
}

fn ip_list_strategy() -> impl Strategy<Value = AddressList> {
    prop::collection::vec(ip_strategy(), 1..4).prop_map(|list| AddressList::try_from(list).unwrap())
}

fn cutoff_strategy() -> impl Strategy<Value = LeaseCutoff> {
    (
        (0u32..=6, 0u32..=9999, 0u32..=12, 0u32..=31),
        (0u32..=23, 0u32..=59, 0u32..=59),
    )
        .prop_map(|((w, y, mo, d), (h, mi, s))| LeaseCutoff::new(w, y, mo, d, h, mi, s).unwrap())
}

fn parameter_strategy() -> impl Strategy<Value = Parameter> {
    prop_oneof![
        any::<bool>().prop_map(Parameter::Authoritative),
        (prop::sample::select(FlagParameter::ALL), any::<bool>())
            .prop_map(|(flag, on)| Parameter::Flag(flag, on)),
        (prop::sample::select(IntegerParameter::ALL), any::<u32>())
            .prop_map(|(param, value)| Parameter::Integer(param, value)),
        (prop::sample::select(TextParameter::ALL), text_strategy())
            .prop_map(|(param, value)| Parameter::Text(param, value)),
        prop::sample::select(DdnsUpdateStyle::ALL).prop_map(Parameter::DdnsUpdateStyle),
        prop::sample::select(DbTimeFormat::ALL).prop_map(Parameter::DbTimeFormat),
        cutoff_strategy().prop_map(Parameter::DynamicBootpLeaseCutoff),
        ip_list_strategy().prop_map(Parameter::FixedAddress),
        (prop::sample::select(HardwareType::ALL), any::<[u8; 6]>()).prop_map(|(kind, mac)| {
            Parameter::Hardware(HardwareAddress {
                kind,
                address: MacAddress(mac),
            })
        }),
    ]
}

fn option_strategy() -> impl Strategy<Value = OptionStatement> {
    prop_oneof![
        ip_list_strategy().prop_map(OptionStatement::DomainNameServers),
        ip_list_strategy().prop_map(OptionStatement::Routers),
        text_strategy().prop_map(OptionStatement::DomainName),
    ]
}

// -- Expressions --

fn data_term_strategy() -> impl Strategy<Value = DataTerm> {
    prop_oneof![
        text_strategy().prop_map(DataTerm::StringConst),
        name_strategy().prop_map(DataTerm::PacketOption),
    ]
}

fn expr_strategy() -> impl Strategy<Value = BooleanExpression> {
    let comparison = (
        prop::sample::select(vec![
            BoolOperator::Equal,
            BoolOperator::Inequal,
            BoolOperator::RegexMatch,
            BoolOperator::RegexIMatch,
        ]),
        data_term_strategy(),
        data_term_strategy(),
    )
        .prop_map(|(op, lhs, rhs)| BooleanExpression::compare(op, lhs, rhs).unwrap());
    let leaf = prop_oneof![
        Just(BooleanExpression::Known),
        Just(BooleanExpression::Static),
        data_term_strategy().prop_map(BooleanExpression::Exists),
        comparison,
    ];
    leaf.prop_recursive(5, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| BooleanExpression::and(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| BooleanExpression::or(l, r)),
            inner.prop_map(|operand| !operand),
        ]
    })
}

// -- Statements --

fn statement_strategy() -> impl Strategy<Value = Statement> {
    let leaf = prop_oneof![
        parameter_strategy().prop_map(Statement::from),
        option_strategy().prop_map(Statement::from),
        text_strategy().prop_map(|filename| Statement::Include { filename }),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        let block = prop::collection::vec(inner, 0..4);
        prop_oneof![
            block.clone().prop_map(|statements| Statement::Group { statements }),
            (name_strategy(), block.clone())
                .prop_map(|(name, statements)| Statement::Host { name, statements }),
            (name_strategy(), block.clone())
                .prop_map(|(name, statements)| Statement::SharedNetwork { name, statements }),
            (ip_strategy(), ip_strategy(), block.clone()).prop_map(
                |(network, netmask, statements)| Statement::Subnet {
                    network,
                    netmask,
                    statements,
                }
            ),
            (
                expr_strategy(),
                block.clone(),
                prop::collection::vec((expr_strategy(), block.clone()), 0..3),
                prop::option::of(block),
            )
                .prop_map(|(condition, statements, elsifs, else_branch)| {
                    let mut chain = ConditionalStatement::new(condition, statements);
                    for (condition, statements) in elsifs {
                        chain = chain.with_elsif(condition, statements);
                    }
                    if let Some(statements) = else_branch {
                        chain = chain.with_else(statements);
                    }
                    Statement::from(chain)
                }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn decode_of_render_is_identity(statement in statement_strategy()) {
        let text = statement.render("");
        let decoded = parse_str(&text)
            .unwrap_or_else(|e| panic!("rendered text did not decode: {e}\n{text}"));
        prop_assert_eq!(decoded, vec![statement]);
    }

    #[test]
    fn render_is_a_fixed_point(block in prop::collection::vec(statement_strategy(), 0..4)) {
        let options = RenderOptions::default();
        let once = render_block(&block, &options);
        let twice = render_block(&parse_str(&once).unwrap(), &options);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn expression_round_trips_through_a_conditional(expr in expr_strategy()) {
        let statement = Statement::from(ConditionalStatement::new(expr, vec![]));
        let decoded = parse_str(&statement.render("")).unwrap();
        prop_assert_eq!(decoded, vec![statement]);
    }
}
