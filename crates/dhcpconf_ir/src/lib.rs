//! dhcpconf IR - shared types of the configuration pipeline
//!
//! This crate contains the data every stage agrees on:
//! - Spans for source locations
//! - Terminal tokens produced by the lexer
//! - AST nodes (statements, parameters, options, conditionals, expressions)
//! - Literal value types and their semantic checks
//!
//! # Ownership
//!
//! The AST is a strict tree. Each node owns its children outright; nested
//! scopes are expressed by containment only.
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the AST and value types.

pub mod ast;
mod span;
mod token;
pub mod value;

pub use ast::{
    Block, BoolOperator, BooleanExpression, Branch, ConditionOperator, ConditionalStatement,
    DataTerm, DbTimeFormat, DdnsUpdateStyle, ElsifBranch, FlagParameter, HardwareAddress,
    HardwareType, IntegerParameter, OptionStatement, Parameter, Statement, TextParameter,
};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use value::{AddressList, Cidr, LeaseCutoff, MacAddress, ValueError};
