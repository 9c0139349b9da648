//! Parameter statements: `name value;`.

use crate::value::{AddressList, LeaseCutoff, MacAddress};

/// A scope parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parameter {
    /// `authoritative;` (`true`) or `not authoritative;` (`false`).
    Authoritative(bool),
    /// On/off switch, rendered `on` or `off`.
    Flag(FlagParameter, bool),
    /// Unsigned decimal value.
    Integer(IntegerParameter, u32),
    /// Quoted text value.
    Text(TextParameter, String),
    DdnsUpdateStyle(DdnsUpdateStyle),
    DbTimeFormat(DbTimeFormat),
    DynamicBootpLeaseCutoff(LeaseCutoff),
    /// One or more addresses, in declaration order.
    FixedAddress(AddressList),
    Hardware(HardwareAddress),
}

impl Parameter {
    pub fn keyword(&self) -> &'static str {
        match self {
            Parameter::Authoritative(_) => "authoritative",
            Parameter::Flag(flag, _) => flag.keyword(),
            Parameter::Integer(param, _) => param.keyword(),
            Parameter::Text(param, _) => param.keyword(),
            Parameter::DdnsUpdateStyle(_) => "ddns-update-style",
            Parameter::DbTimeFormat(_) => "db-time-format",
            Parameter::DynamicBootpLeaseCutoff(_) => "dynamic-bootp-lease-cutoff",
            Parameter::FixedAddress(_) => "fixed-address",
            Parameter::Hardware(_) => "hardware",
        }
    }
}

/// Defines a fieldless keyword enum with `keyword()` and an `ALL` table.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $kw:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn keyword(self) -> &'static str {
                match self {
                    $($name::$variant => $kw),+
                }
            }

            /// Case-insensitive lookup by keyword.
            pub fn from_keyword(text: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.keyword().eq_ignore_ascii_case(text))
            }
        }
    };
}

keyword_enum! {
    /// Parameters taking `on`/`off`/`true`/`false`.
    FlagParameter {
        AlwaysBroadcast => "always-broadcast",
        AlwaysReplyRfc1048 => "always-reply-rfc1048",
        BootUnknownClients => "boot-unknown-clients",
        DdnsUpdates => "ddns-updates",
        DoForwardUpdates => "do-forward-updates",
        UseHostDeclNames => "use-host-decl-names",
    }
}

keyword_enum! {
    /// Parameters taking an unsigned 32-bit integer.
    IntegerParameter {
        AdaptiveLeaseTimeThreshold => "adaptive-lease-time-threshold",
        DefaultLeaseTime => "default-lease-time",
        DelayedAck => "delayed-ack",
        MaxAckDelay => "max-ack-delay",
    }
}

keyword_enum! {
    /// Parameters taking a quoted string.
    TextParameter {
        DdnsDomainname => "ddns-domainname",
        DdnsHostname => "ddns-hostname",
        DdnsRevDomainname => "ddns-rev-domainname",
    }
}

keyword_enum! {
    /// Value of `ddns-update-style`.
    DdnsUpdateStyle {
        AdHoc => "ad-hoc",
        Interim => "interim",
        None => "none",
    }
}

keyword_enum! {
    /// Value of `db-time-format`.
    DbTimeFormat {
        Default => "default",
        Local => "local",
    }
}

keyword_enum! {
    /// Link-layer type of a `hardware` parameter.
    HardwareType {
        Ethernet => "ethernet",
        TokenRing => "token-ring",
    }
}

/// `hardware <type> <address>;`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardwareAddress {
    pub kind: HardwareType,
    pub address: MacAddress,
}
