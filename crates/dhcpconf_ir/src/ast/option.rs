use crate::AddressList;

/// `option <name> <value>;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionStatement {
    DomainNameServers(AddressList),
    Routers(AddressList),
    DomainName(String),
}

impl OptionStatement {
    /// Option names, as written after `option`.
    pub const NAMES: &'static [&'static str] = &["domain-name-servers", "routers", "domain-name"];

    pub fn name(&self) -> &'static str {
        match self {
            OptionStatement::DomainNameServers(_) => "domain-name-servers",
            OptionStatement::Routers(_) => "routers",
            OptionStatement::DomainName(_) => "domain-name",
        }
    }
}
