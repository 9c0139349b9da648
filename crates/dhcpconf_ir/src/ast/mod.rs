//! Abstract syntax tree for decoded configurations.
//!
//! The tree is strictly owned: every statement owns its nested block, and a
//! block owns its statements in declaration order. There are no links back to
//! enclosing scopes.
//!
//! # Module Structure
//!
//! - `parameter`: `name value;` statements
//! - `option`: `option name value;` statements
//! - `conditional`: `if`/`elsif`/`else` chains
//! - `expr`: boolean expressions and their data terms

mod conditional;
mod expr;
mod option;
mod parameter;

use std::net::Ipv4Addr;

pub use conditional::{Branch, ConditionOperator, ConditionalStatement, ElsifBranch};
pub use expr::{BoolOperator, BooleanExpression, DataTerm};
pub use option::OptionStatement;
pub use parameter::{
    DbTimeFormat, DdnsUpdateStyle, FlagParameter, HardwareAddress, HardwareType,
    IntegerParameter, Parameter, TextParameter,
};

/// Ordered statements of one scope. Order is significant and preserved.
pub type Block = Vec<Statement>;

/// One configuration statement.
///
/// Names (`host`, `shared-network`) are free text; they render verbatim and
/// must lex back as a single identifier to survive a round trip.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// `group { ... }`
    Group { statements: Block },
    /// `host <name> { ... }`
    Host { name: String, statements: Block },
    /// `shared-network <name> { ... }`
    SharedNetwork { name: String, statements: Block },
    /// `subnet <network> netmask <netmask> { ... }`
    Subnet {
        network: Ipv4Addr,
        netmask: Ipv4Addr,
        statements: Block,
    },
    /// `include "<filename>";` The file itself is never read.
    Include { filename: String },
    Parameter(Parameter),
    Option(OptionStatement),
    Conditional(ConditionalStatement),
}

impl Statement {
    /// The leading keyword of the statement's canonical text.
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Group { .. } => "group",
            Statement::Host { .. } => "host",
            Statement::SharedNetwork { .. } => "shared-network",
            Statement::Subnet { .. } => "subnet",
            Statement::Include { .. } => "include",
            Statement::Parameter(p) => p.keyword(),
            Statement::Option(_) => "option",
            Statement::Conditional(_) => "if",
        }
    }

    /// Nested block of a declaration, if the statement has one.
    ///
    /// Conditionals have one block per branch; see
    /// [`ConditionalStatement::branches`].
    pub fn block(&self) -> Option<&Block> {
        match self {
            Statement::Group { statements }
            | Statement::Host { statements, .. }
            | Statement::SharedNetwork { statements, .. }
            | Statement::Subnet { statements, .. } => Some(statements),
            Statement::Include { .. }
            | Statement::Parameter(_)
            | Statement::Option(_)
            | Statement::Conditional(_) => None,
        }
    }
}

impl From<Parameter> for Statement {
    fn from(parameter: Parameter) -> Self {
        Statement::Parameter(parameter)
    }
}

impl From<OptionStatement> for Statement {
    fn from(option: OptionStatement) -> Self {
        Statement::Option(option)
    }
}

impl From<ConditionalStatement> for Statement {
    fn from(conditional: ConditionalStatement) -> Self {
        Statement::Conditional(conditional)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
