//! Conditional chains.
//!
//! ```text
//! conditional := "if" bool-expr block elsif* else?
//! elsif       := "elsif" bool-expr block
//! else        := "else" block
//! ```
//!
//! `elsif` and `else` are only reachable from here; at statement level they
//! are not in the dispatch table and fail as syntax errors.

use dhcpconf_ir::{ConditionalStatement, Statement, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser, TokenSource};

impl<I: TokenSource> Parser<I> {
    /// Called with the cursor just past `if`.
    pub(super) fn conditional(&mut self) -> Result<Statement, ParseError> {
        let condition = self.bool_expr()?;
        let statements = self.block()?;
        let mut chain = ConditionalStatement::new(condition, statements);

        loop {
            match self.stream.peek()?.map(|t| t.kind) {
                Some(TokenKind::Elsif) => {
                    self.stream.next()?;
                    let condition = self.bool_expr()?;
                    let statements = self.block()?;
                    trace!(branch = chain.elsif_branches.len() + 1, "elsif");
                    chain = chain.with_elsif(condition, statements);
                }
                Some(TokenKind::Else) => {
                    self.stream.next()?;
                    let statements = self.block()?;
                    trace!("else");
                    return Ok(chain.with_else(statements).into());
                }
                _ => return Ok(chain.into()),
            }
        }
    }
}
