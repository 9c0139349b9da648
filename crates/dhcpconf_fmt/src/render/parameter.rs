use dhcpconf_ir::{OptionStatement, Parameter};

use super::{line, Render};
use crate::Emitter;

impl Render for Parameter {
    fn render_to<E: Emitter>(&self, out: &mut E, level: usize) {
        let value = match self {
            Parameter::Authoritative(true) => String::new(),
            Parameter::Authoritative(false) => {
                line(out, level, "not authoritative;");
                return;
            }
            Parameter::Flag(_, on) => (if *on { "on" } else { "off" }).to_owned(),
            Parameter::Integer(_, value) => value.to_string(),
            Parameter::Text(_, text) => format!("\"{text}\""),
            Parameter::DdnsUpdateStyle(style) => style.keyword().to_owned(),
            Parameter::DbTimeFormat(format) => format.keyword().to_owned(),
            Parameter::DynamicBootpLeaseCutoff(cutoff) => cutoff.to_string(),
            Parameter::FixedAddress(addresses) => addresses.to_string(),
            Parameter::Hardware(hardware) => {
                format!("{} {}", hardware.kind.keyword(), hardware.address)
            }
        };
        if value.is_empty() {
            line(out, level, &format!("{};", self.keyword()));
        } else {
            line(out, level, &format!("{} {value};", self.keyword()));
        }
    }
}

impl Render for OptionStatement {
    fn render_to<E: Emitter>(&self, out: &mut E, level: usize) {
        let value = match self {
            OptionStatement::DomainNameServers(addresses) | OptionStatement::Routers(addresses) => {
                addresses.to_string()
            }
            OptionStatement::DomainName(name) => format!("\"{name}\""),
        };
        line(out, level, &format!("option {} {value};", self.name()));
    }
}
