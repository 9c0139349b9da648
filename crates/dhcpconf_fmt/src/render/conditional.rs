use std::fmt;

use dhcpconf_ir::{BooleanExpression, ConditionalStatement};

use super::{scope, Render};
use crate::Emitter;

impl Render for ConditionalStatement {
    fn render_to<E: Emitter>(&self, out: &mut E, level: usize) {
        for branch in self.branches() {
            let head = match branch.condition {
                Some(condition) => {
                    format!("{} {}", branch.operator.keyword(), expression(condition))
                }
                None => branch.operator.keyword().to_owned(),
            };
            scope(out, level, &head, branch.statements);
        }
    }
}

/// Canonical text of a boolean expression.
///
/// `and`, `or` and the operand of `not` extend as far right as possible when
/// read back, so only a compound left operand of `and`/`or` needs
/// parentheses.
pub fn expression(expr: &BooleanExpression) -> String {
    Infix(expr).to_string()
}

struct Infix<'a>(&'a BooleanExpression);

impl fmt::Display for Infix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expr = self.0;
        match expr {
            BooleanExpression::And(lhs, rhs) | BooleanExpression::Or(lhs, rhs) => {
                if lhs.is_compound() {
                    write!(f, "({})", Infix(lhs))?;
                } else {
                    write!(f, "{}", Infix(lhs))?;
                }
                write!(f, " {} {}", expr.operator().keyword(), Infix(rhs))
            }
            BooleanExpression::Not(operand) => write!(f, "not {}", Infix(operand)),
            BooleanExpression::Equal(lhs, rhs)
            | BooleanExpression::Inequal(lhs, rhs)
            | BooleanExpression::RegexMatch(lhs, rhs)
            | BooleanExpression::RegexIMatch(lhs, rhs) => {
                write!(f, "{lhs} {} {rhs}", expr.operator().keyword())
            }
            BooleanExpression::Exists(term) => write!(f, "exists {term}"),
            BooleanExpression::Known | BooleanExpression::Static => {
                f.write_str(expr.operator().keyword())
            }
        }
    }
}
