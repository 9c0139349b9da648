use std::net::Ipv4Addr;

use pretty_assertions::assert_eq;

use super::*;
use crate::AddressList;

fn eq(option: &str, text: &str) -> BooleanExpression {
    BooleanExpression::Equal(
        DataTerm::PacketOption(option.into()),
        DataTerm::StringConst(text.into()),
    )
}

// ─── Boolean expressions ───────────────────────────────────────

#[test]
fn operand_accessors_follow_arity() {
    let and = BooleanExpression::and(eq("a", "x"), BooleanExpression::Known);
    assert_eq!(and.operator(), BoolOperator::And);
    assert_eq!(and.bool_terms().len(), 2);
    assert!(and.data_terms().is_empty());

    let not = !BooleanExpression::Static;
    assert_eq!(not, BooleanExpression::Not(Box::new(BooleanExpression::Static)));
    assert_eq!(not.operator(), BoolOperator::Not);
    assert_eq!(not.bool_terms(), vec![&BooleanExpression::Static]);

    let cmp = eq("domain", "foo");
    assert!(cmp.bool_terms().is_empty());
    assert_eq!(
        cmp.data_terms(),
        vec![
            &DataTerm::PacketOption("domain".into()),
            &DataTerm::StringConst("foo".into())
        ]
    );

    let exists = BooleanExpression::Exists(DataTerm::PacketOption("routers".into()));
    assert_eq!(exists.data_terms().len(), 1);
    assert!(BooleanExpression::Known.data_terms().is_empty());
}

#[test]
fn compare_rejects_non_comparison_operators() {
    let a = DataTerm::StringConst("a".into());
    assert!(BooleanExpression::compare(BoolOperator::And, a.clone(), a.clone()).is_none());
    assert_eq!(
        BooleanExpression::compare(BoolOperator::RegexIMatch, a.clone(), a.clone()),
        Some(BooleanExpression::RegexIMatch(a.clone(), a))
    );
}

#[test]
fn expression_depth() {
    assert_eq!(BooleanExpression::Known.depth(), 1);
    let nested = BooleanExpression::or(
        BooleanExpression::Static,
        BooleanExpression::and(eq("a", "b"), !BooleanExpression::Known),
    );
    assert_eq!(nested.depth(), 4);
}

#[test]
fn data_term_display() {
    assert_eq!(DataTerm::StringConst("foo".into()).to_string(), "\"foo\"");
    assert_eq!(DataTerm::PacketOption("domain".into()).to_string(), "option domain");
}

// ─── Conditionals ──────────────────────────────────────────────

#[test]
fn branches_in_chain_order() {
    let cond = ConditionalStatement::new(BooleanExpression::Static, vec![])
        .with_elsif(BooleanExpression::Known, vec![])
        .with_elsif(eq("a", "b"), vec![])
        .with_else(vec![Parameter::Authoritative(true).into()]);

    let ops: Vec<_> = cond.branches().map(|b| b.operator).collect();
    assert_eq!(
        ops,
        vec![
            ConditionOperator::If,
            ConditionOperator::Elsif,
            ConditionOperator::Elsif,
            ConditionOperator::Else
        ]
    );
    assert_eq!(
        cond.sub_conditionals(),
        vec![
            ConditionOperator::Elsif,
            ConditionOperator::Elsif,
            ConditionOperator::Else
        ]
    );
    let last = cond.branches().last().unwrap();
    assert!(last.condition.is_none());
    assert_eq!(last.statements.len(), 1);
}

#[test]
fn bare_if_has_single_branch() {
    let cond = ConditionalStatement::new(BooleanExpression::Known, vec![]);
    assert_eq!(cond.branches().count(), 1);
    assert!(cond.sub_conditionals().is_empty());
}

// ─── Statements ────────────────────────────────────────────────

#[test]
fn statement_keywords() {
    let subnet = Statement::Subnet {
        network: Ipv4Addr::new(10, 0, 0, 0),
        netmask: Ipv4Addr::new(255, 0, 0, 0),
        statements: vec![],
    };
    assert_eq!(subnet.keyword(), "subnet");
    assert_eq!(
        Statement::from(Parameter::Flag(FlagParameter::DdnsUpdates, true)).keyword(),
        "ddns-updates"
    );
    assert_eq!(
        Statement::from(OptionStatement::Routers(AddressList::single(Ipv4Addr::LOCALHOST))).keyword(),
        "option"
    );
}

#[test]
fn block_accessor() {
    let host = Statement::Host {
        name: "h".into(),
        statements: vec![Statement::Include {
            filename: "x".into(),
        }],
    };
    assert_eq!(host.block().map(Vec::len), Some(1));
    assert!(Statement::Include {
        filename: "x".into()
    }
    .block()
    .is_none());
}

#[test]
fn keyword_enums_lookup_case_insensitively() {
    assert_eq!(
        DdnsUpdateStyle::from_keyword("AD-HOC"),
        Some(DdnsUpdateStyle::AdHoc)
    );
    assert_eq!(DbTimeFormat::from_keyword("local"), Some(DbTimeFormat::Local));
    assert_eq!(
        HardwareType::from_keyword("Token-Ring"),
        Some(HardwareType::TokenRing)
    );
    assert_eq!(HardwareType::from_keyword("fddi"), None);
    assert_eq!(FlagParameter::ALL.len(), 6);
    assert_eq!(IntegerParameter::ALL.len(), 4);
    assert_eq!(TextParameter::ALL.len(), 3);
}

#[test]
fn option_names() {
    for name in OptionStatement::NAMES {
        assert!(!name.is_empty());
    }
    assert_eq!(OptionStatement::DomainName("x".into()).name(), "domain-name");
}
