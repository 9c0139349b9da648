//! Scope declarations and `include`.
//!
//! ```text
//! group          := "group" block
//! host           := "host" name block
//! shared-network := "shared-network" name block
//! subnet         := "subnet" ipv4 "netmask" ipv4 block
//!                 | "subnet" cidr block
//! include        := "include" string ";"
//! ```

use dhcpconf_ir::value::parse_ipv4;
use dhcpconf_ir::{Cidr, Statement, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser, TokenSource};

impl<I: TokenSource> Parser<I> {
    pub(super) fn group(&mut self) -> Result<Statement, ParseError> {
        let statements = self.block()?;
        Ok(Statement::Group { statements })
    }

    pub(super) fn host(&mut self) -> Result<Statement, ParseError> {
        let name = self.word("a host name")?.text;
        trace!(%name, "host");
        let statements = self.block()?;
        Ok(Statement::Host { name, statements })
    }

    pub(super) fn shared_network(&mut self) -> Result<Statement, ParseError> {
        let name = self.word("a network name")?.text;
        let statements = self.block()?;
        Ok(Statement::SharedNetwork { name, statements })
    }

    pub(super) fn subnet(&mut self) -> Result<Statement, ParseError> {
        let token = self.stream.next()?;
        let (network, netmask) = match token.kind {
            TokenKind::Ipv4 => {
                let network =
                    parse_ipv4(&token.text).map_err(|e| ParseError::semantic(&token, e))?;
                self.expect(TokenKind::Netmask, "`netmask`")?;
                let mask = self.expect(TokenKind::Ipv4, "a netmask address")?;
                let netmask = parse_ipv4(&mask.text).map_err(|e| ParseError::semantic(&mask, e))?;
                (network, netmask)
            }
            TokenKind::Cidr => {
                let cidr: Cidr = token
                    .text
                    .parse()
                    .map_err(|e| ParseError::semantic(&token, e))?;
                (cidr.address, cidr.netmask())
            }
            _ => {
                return Err(ParseError::syntax(
                    &token,
                    "expected a subnet address or network",
                ))
            }
        };
        let statements = self.block()?;
        Ok(Statement::Subnet {
            network,
            netmask,
            statements,
        })
    }

    pub(super) fn include(&mut self) -> Result<Statement, ParseError> {
        let filename = self.expect(TokenKind::String, "a quoted file name")?.text;
        self.expect_semicolon()?;
        Ok(Statement::Include { filename })
    }
}
