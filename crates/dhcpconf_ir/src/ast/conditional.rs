//! Conditional chains: `if`, any number of `elsif`, an optional `else`.
//!
//! The chain ordering rules (one leading `if`, `else` at most once and last)
//! hold by construction: the leading branch, the `elsif` list and the `else`
//! block are separate fields.

use super::expr::BooleanExpression;
use super::Block;

/// Position of a branch in a conditional chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionOperator {
    If,
    Elsif,
    Else,
}

impl ConditionOperator {
    pub fn keyword(self) -> &'static str {
        match self {
            ConditionOperator::If => "if",
            ConditionOperator::Elsif => "elsif",
            ConditionOperator::Else => "else",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElsifBranch {
    pub condition: BooleanExpression,
    pub statements: Block,
}

/// `if <cond> { ... } elsif <cond> { ... } else { ... }`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalStatement {
    pub condition: BooleanExpression,
    pub statements: Block,
    pub elsif_branches: Vec<ElsifBranch>,
    pub else_branch: Option<Block>,
}

/// Borrowed view of one branch of a chain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Branch<'a> {
    pub operator: ConditionOperator,
    /// `None` only for the `else` branch.
    pub condition: Option<&'a BooleanExpression>,
    pub statements: &'a Block,
}

impl ConditionalStatement {
    pub fn new(condition: BooleanExpression, statements: Block) -> Self {
        ConditionalStatement {
            condition,
            statements,
            elsif_branches: Vec::new(),
            else_branch: None,
        }
    }

    #[must_use]
    pub fn with_elsif(mut self, condition: BooleanExpression, statements: Block) -> Self {
        self.elsif_branches.push(ElsifBranch {
            condition,
            statements,
        });
        self
    }

    #[must_use]
    pub fn with_else(mut self, statements: Block) -> Self {
        self.else_branch = Some(statements);
        self
    }

    /// All branches in chain order, starting with the `if`.
    pub fn branches(&self) -> impl Iterator<Item = Branch<'_>> {
        let head = Branch {
            operator: ConditionOperator::If,
            condition: Some(&self.condition),
            statements: &self.statements,
        };
        let elsifs = self.elsif_branches.iter().map(|b| Branch {
            operator: ConditionOperator::Elsif,
            condition: Some(&b.condition),
            statements: &b.statements,
        });
        let tail = self.else_branch.iter().map(|statements| Branch {
            operator: ConditionOperator::Else,
            condition: None,
            statements,
        });
        std::iter::once(head).chain(elsifs).chain(tail)
    }

    /// Operators of the branches after the leading `if`.
    pub fn sub_conditionals(&self) -> Vec<ConditionOperator> {
        self.branches().skip(1).map(|b| b.operator).collect()
    }
}
