//! Boolean expressions.
//!
//! ```text
//! bool-expr := unary (("and" | "or") bool-expr)?
//! unary     := "not" bool-expr | primary
//! primary   := "(" bool-expr ")"
//!            | "static" | "known"
//!            | "exists" data-term
//!            | data-term ("=" | "!=" | "~=" | "~~") data-term
//! data-term := string | "option" name
//! ```
//!
//! `and` and `or` share one precedence level and extend as far right as
//! possible, as does the operand of `not`:
//! - `a or b and c` is `Or(a, And(b, c))`
//! - `not a and b` is `Not(And(a, b))`
//!
//! Parentheses override this grouping.
//!
//! Each `bool-expr` is one nesting level, so a chain of `n` terms counts `n`
//! levels against [`ParseOptions::max_depth`](crate::ParseOptions::max_depth).

use dhcpconf_ir::{BoolOperator, BooleanExpression, DataTerm, TokenKind};

use crate::{ParseError, Parser, TokenSource};

impl<I: TokenSource> Parser<I> {
    pub(super) fn bool_expr(&mut self) -> Result<BooleanExpression, ParseError> {
        let Some(at) = self.stream.peek()?.cloned() else {
            return Err(ParseError::StreamExhausted);
        };
        self.nested(&at, |p| {
            let lhs = p.unary()?;
            let connective = match p.stream.peek()?.map(|t| t.kind) {
                Some(TokenKind::And) => BoolOperator::And,
                Some(TokenKind::Or) => BoolOperator::Or,
                _ => return Ok(lhs),
            };
            p.stream.next()?;
            let rhs = p.bool_expr()?;
            Ok(match connective {
                BoolOperator::And => BooleanExpression::and(lhs, rhs),
                _ => BooleanExpression::or(lhs, rhs),
            })
        })
    }

    fn unary(&mut self) -> Result<BooleanExpression, ParseError> {
        if self.stream.peek()?.is_some_and(|t| t.kind == TokenKind::Not) {
            self.stream.next()?;
            return Ok(!self.bool_expr()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<BooleanExpression, ParseError> {
        let token = self.stream.next()?;
        match token.kind {
            TokenKind::ParenOpen => {
                let inner = self.bool_expr()?;
                self.expect(TokenKind::ParenClose, "`)`")?;
                Ok(inner)
            }
            TokenKind::Static => Ok(BooleanExpression::Static),
            TokenKind::Known => Ok(BooleanExpression::Known),
            TokenKind::Exists => Ok(BooleanExpression::Exists(self.data_term()?)),
            TokenKind::String | TokenKind::Option => {
                self.stream.undo();
                let lhs = self.data_term()?;
                let op_token = self.stream.next()?;
                let op = match op_token.kind {
                    TokenKind::Equal => BoolOperator::Equal,
                    TokenKind::NotEqual => BoolOperator::Inequal,
                    TokenKind::RegexMatch => BoolOperator::RegexMatch,
                    TokenKind::RegexIMatch => BoolOperator::RegexIMatch,
                    _ => {
                        return Err(ParseError::syntax(
                            &op_token,
                            "expected `=`, `!=`, `~=` or `~~`",
                        ))
                    }
                };
                let rhs = self.data_term()?;
                BooleanExpression::compare(op, lhs, rhs)
                    .ok_or_else(|| ParseError::syntax(&op_token, "expected a comparison"))
            }
            _ => Err(ParseError::syntax(&token, "expected a boolean expression")),
        }
    }

    fn data_term(&mut self) -> Result<DataTerm, ParseError> {
        let token = self.stream.next()?;
        match token.kind {
            TokenKind::String => Ok(DataTerm::StringConst(token.text)),
            TokenKind::Option => {
                let name = self.word("an option name")?;
                Ok(DataTerm::PacketOption(name.text))
            }
            _ => Err(ParseError::syntax(
                &token,
                "expected a string or `option <name>`",
            )),
        }
    }
}
