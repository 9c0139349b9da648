//! `option` statements.
//!
//! ```text
//! option := "option" "domain-name-servers" ipv4-list ";"
//!         | "option" "routers" ipv4-list ";"
//!         | "option" "domain-name" string ";"
//! ```

use dhcpconf_ir::{OptionStatement, Statement, TokenKind};

use crate::{ParseError, Parser, TokenSource};

impl<I: TokenSource> Parser<I> {
    pub(super) fn option(&mut self) -> Result<Statement, ParseError> {
        let name = self.word("an option name")?;
        let option = match name.text.to_ascii_lowercase().as_str() {
            "domain-name-servers" => OptionStatement::DomainNameServers(self.address_list()?),
            "routers" => OptionStatement::Routers(self.address_list()?),
            "domain-name" => {
                let value = self.expect(TokenKind::String, "a quoted domain name")?.text;
                self.expect_semicolon()?;
                OptionStatement::DomainName(value)
            }
            _ => return Err(ParseError::syntax(&name, "unknown option")),
        };
        Ok(option.into())
    }
}
