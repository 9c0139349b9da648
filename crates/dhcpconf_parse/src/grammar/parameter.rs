//! Parameter statements.
//!
//! ```text
//! authoritative  := "not"? "authoritative" ";"
//! flag           := flag-name ("on" | "off" | "true" | "false") ";"
//! integer        := integer-name digits ";"
//! text           := text-name string ";"
//! fixed-address  := "fixed-address" ipv4 ("," ipv4)* ";"
//! hardware       := "hardware" ("ethernet" | "token-ring") mac ";"
//! lease-cutoff   := "dynamic-bootp-lease-cutoff" W YYYY/MM/DD HH:MM:SS ";"
//! ```

use std::net::Ipv4Addr;

use dhcpconf_ir::value::{parse_ipv4, parse_u32};
use dhcpconf_ir::{
    AddressList, DbTimeFormat, DdnsUpdateStyle, FlagParameter, HardwareAddress, HardwareType,
    IntegerParameter, LeaseCutoff, MacAddress, Parameter, Statement, TextParameter, Token,
    TokenKind,
};
use tracing::trace;

use crate::{ParseError, Parser, TokenSource};

impl<I: TokenSource> Parser<I> {
    /// `not` at statement level: must introduce `authoritative`.
    pub(super) fn negation(&mut self) -> Result<Statement, ParseError> {
        self.expect(TokenKind::Authoritative, "`authoritative` after `not`")?;
        self.authoritative()
    }

    /// Called with the cursor just past `authoritative`.
    ///
    /// Rewinds over the keyword to check whether a `not` immediately precedes
    /// it, then returns to where it started.
    pub(super) fn authoritative(&mut self) -> Result<Statement, ParseError> {
        let end = self.stream.position();
        self.stream.undo();
        self.stream.undo();
        let preceding = self.stream.next()?;
        let negated = preceding.kind == TokenKind::Not && self.stream.position() < end;
        while self.stream.position() < end {
            self.stream.next()?;
        }
        trace!(negated, "authoritative");
        self.expect_semicolon()?;
        Ok(Parameter::Authoritative(!negated).into())
    }

    pub(super) fn flag(&mut self, flag: FlagParameter) -> Result<Statement, ParseError> {
        let token = self.stream.next()?;
        let value = match token.kind {
            TokenKind::On | TokenKind::True => true,
            TokenKind::Off | TokenKind::False => false,
            _ => {
                return Err(ParseError::syntax(
                    &token,
                    "expected `on`, `off`, `true` or `false`",
                ))
            }
        };
        self.expect_semicolon()?;
        Ok(Parameter::Flag(flag, value).into())
    }

    pub(super) fn integer(&mut self, param: IntegerParameter) -> Result<Statement, ParseError> {
        let token = self.stream.next()?;
        let is_number = token.kind == TokenKind::Word
            && !token.text.is_empty()
            && token.text.bytes().all(|b| b.is_ascii_digit());
        if !is_number {
            return Err(ParseError::syntax(&token, "expected an unsigned integer"));
        }
        let value = parse_u32(&token.text).map_err(|e| ParseError::semantic(&token, e))?;
        self.expect_semicolon()?;
        Ok(Parameter::Integer(param, value).into())
    }

    pub(super) fn text(&mut self, param: TextParameter) -> Result<Statement, ParseError> {
        let value = self.expect(TokenKind::String, "a quoted string")?.text;
        self.expect_semicolon()?;
        Ok(Parameter::Text(param, value).into())
    }

    pub(super) fn ddns_update_style(&mut self) -> Result<Statement, ParseError> {
        let token = self.word("an update style")?;
        let style = DdnsUpdateStyle::from_keyword(&token.text).ok_or_else(|| {
            ParseError::syntax(&token, "expected `ad-hoc`, `interim` or `none`")
        })?;
        self.expect_semicolon()?;
        Ok(Parameter::DdnsUpdateStyle(style).into())
    }

    pub(super) fn db_time_format(&mut self) -> Result<Statement, ParseError> {
        let token = self.word("a time format")?;
        let format = DbTimeFormat::from_keyword(&token.text)
            .ok_or_else(|| ParseError::syntax(&token, "expected `default` or `local`"))?;
        self.expect_semicolon()?;
        Ok(Parameter::DbTimeFormat(format).into())
    }

    pub(super) fn lease_cutoff(&mut self) -> Result<Statement, ParseError> {
        let weekday = self.expect(TokenKind::Word, "a weekday number")?;
        let date = self.expect(TokenKind::Word, "a date (YYYY/MM/DD)")?;
        let time = self.expect(TokenKind::Word, "a time (HH:MM:SS)")?;
        let cutoff = LeaseCutoff::parse(&weekday.text, &date.text, &time.text).map_err(|e| {
            let whole = Token::new(
                TokenKind::Word,
                format!("{} {} {}", weekday.text, date.text, time.text),
                weekday.span.merge(time.span),
            );
            ParseError::semantic(&whole, e)
        })?;
        self.expect_semicolon()?;
        Ok(Parameter::DynamicBootpLeaseCutoff(cutoff).into())
    }

    pub(super) fn fixed_address(&mut self) -> Result<Statement, ParseError> {
        let addresses = self.address_list()?;
        Ok(Parameter::FixedAddress(addresses).into())
    }

    pub(super) fn hardware(&mut self) -> Result<Statement, ParseError> {
        let kind_token = self.word("a hardware type")?;
        let kind = HardwareType::from_keyword(&kind_token.text)
            .ok_or_else(|| ParseError::syntax(&kind_token, "expected `ethernet` or `token-ring`"))?;
        let mac = self.expect(TokenKind::Mac, "a hardware address")?;
        let address: MacAddress = mac
            .text
            .parse()
            .map_err(|e| ParseError::semantic(&mac, e))?;
        self.expect_semicolon()?;
        Ok(Parameter::Hardware(HardwareAddress { kind, address }).into())
    }

    /// `ipv4 ("," ipv4)* ";"`, consuming the terminating `;`.
    pub(super) fn address_list(&mut self) -> Result<AddressList, ParseError> {
        let mut addresses = AddressList::single(self.address()?);
        loop {
            let sep = self.stream.next()?;
            match sep.kind {
                TokenKind::Comma => addresses.push(self.address()?),
                TokenKind::Semicolon => return Ok(addresses),
                _ => return Err(ParseError::syntax(&sep, "expected `,` or `;`")),
            }
        }
    }

    fn address(&mut self) -> Result<Ipv4Addr, ParseError> {
        let token = self.expect(TokenKind::Ipv4, "an IPv4 address")?;
        parse_ipv4(&token.text).map_err(|e| ParseError::semantic(&token, e))
    }
}
