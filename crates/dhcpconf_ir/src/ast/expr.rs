//! Boolean expressions of conditional statements.
//!
//! The operator set is closed, and each variant carries exactly the operands
//! its operator takes: two sub-expressions for `and`/`or`, one for `not`, two
//! data terms for comparisons, one for `exists`, nothing for `known` and
//! `static`.

use std::fmt;
use std::ops::Not;

/// Leaf operand of a boolean expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataTerm {
    /// `"text"`
    StringConst(String),
    /// `option <name>`
    PacketOption(String),
}

impl fmt::Display for DataTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataTerm::StringConst(text) => write!(f, "\"{text}\""),
            DataTerm::PacketOption(name) => write!(f, "option {name}"),
        }
    }
}

/// Operator tag of a [`BooleanExpression`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoolOperator {
    And,
    Or,
    Not,
    Equal,
    Inequal,
    RegexMatch,
    RegexIMatch,
    Exists,
    Known,
    Static,
}

impl BoolOperator {
    pub fn keyword(self) -> &'static str {
        match self {
            BoolOperator::And => "and",
            BoolOperator::Or => "or",
            BoolOperator::Not => "not",
            BoolOperator::Equal => "=",
            BoolOperator::Inequal => "!=",
            BoolOperator::RegexMatch => "~=",
            BoolOperator::RegexIMatch => "~~",
            BoolOperator::Exists => "exists",
            BoolOperator::Known => "known",
            BoolOperator::Static => "static",
        }
    }

    /// Whether the operator compares two data terms.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BoolOperator::Equal
                | BoolOperator::Inequal
                | BoolOperator::RegexMatch
                | BoolOperator::RegexIMatch
        )
    }
}

impl fmt::Display for BoolOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A condition of an `if` or `elsif` branch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BooleanExpression {
    And(Box<BooleanExpression>, Box<BooleanExpression>),
    Or(Box<BooleanExpression>, Box<BooleanExpression>),
    Not(Box<BooleanExpression>),
    Equal(DataTerm, DataTerm),
    Inequal(DataTerm, DataTerm),
    RegexMatch(DataTerm, DataTerm),
    RegexIMatch(DataTerm, DataTerm),
    Exists(DataTerm),
    Known,
    Static,
}

impl BooleanExpression {
    pub fn and(lhs: BooleanExpression, rhs: BooleanExpression) -> Self {
        BooleanExpression::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: BooleanExpression, rhs: BooleanExpression) -> Self {
        BooleanExpression::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Build a comparison. Returns `None` if `op` is not a comparison.
    pub fn compare(op: BoolOperator, lhs: DataTerm, rhs: DataTerm) -> Option<Self> {
        let expr = match op {
            BoolOperator::Equal => BooleanExpression::Equal(lhs, rhs),
            BoolOperator::Inequal => BooleanExpression::Inequal(lhs, rhs),
            BoolOperator::RegexMatch => BooleanExpression::RegexMatch(lhs, rhs),
            BoolOperator::RegexIMatch => BooleanExpression::RegexIMatch(lhs, rhs),
            _ => return None,
        };
        Some(expr)
    }

    pub fn operator(&self) -> BoolOperator {
        match self {
            BooleanExpression::And(..) => BoolOperator::And,
            BooleanExpression::Or(..) => BoolOperator::Or,
            BooleanExpression::Not(_) => BoolOperator::Not,
            BooleanExpression::Equal(..) => BoolOperator::Equal,
            BooleanExpression::Inequal(..) => BoolOperator::Inequal,
            BooleanExpression::RegexMatch(..) => BoolOperator::RegexMatch,
            BooleanExpression::RegexIMatch(..) => BoolOperator::RegexIMatch,
            BooleanExpression::Exists(_) => BoolOperator::Exists,
            BooleanExpression::Known => BoolOperator::Known,
            BooleanExpression::Static => BoolOperator::Static,
        }
    }

    /// Boolean sub-expressions, in order.
    pub fn bool_terms(&self) -> Vec<&BooleanExpression> {
        match self {
            BooleanExpression::And(lhs, rhs) | BooleanExpression::Or(lhs, rhs) => {
                vec![&**lhs, &**rhs]
            }
            BooleanExpression::Not(operand) => vec![&**operand],
            _ => Vec::new(),
        }
    }

    /// Data-term operands, in order.
    pub fn data_terms(&self) -> Vec<&DataTerm> {
        match self {
            BooleanExpression::Equal(lhs, rhs)
            | BooleanExpression::Inequal(lhs, rhs)
            | BooleanExpression::RegexMatch(lhs, rhs)
            | BooleanExpression::RegexIMatch(lhs, rhs) => vec![lhs, rhs],
            BooleanExpression::Exists(term) => vec![term],
            _ => Vec::new(),
        }
    }

    /// Whether the expression is built from other boolean expressions.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            BooleanExpression::And(..) | BooleanExpression::Or(..) | BooleanExpression::Not(_)
        )
    }

    /// Nesting depth; leaves are depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .bool_terms()
            .into_iter()
            .map(BooleanExpression::depth)
            .max()
            .unwrap_or(0)
    }
}

/// `!expr` wraps `expr` in a `not`.
impl Not for BooleanExpression {
    type Output = BooleanExpression;

    fn not(self) -> BooleanExpression {
        BooleanExpression::Not(Box::new(self))
    }
}
