//! Literal value types and their value-level checks.
//!
//! The lexer only recognizes the *shape* of an address or date literal. The
//! constructors here decide whether a shape-matching literal is actually a
//! valid value; failures are [`ValueError`]s, which the parser reports as
//! semantic errors.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use thiserror::Error;

/// A literal that has the right shape but an invalid value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("invalid IPv4 address `{0}`")]
    InvalidIpv4(String),
    #[error("invalid network `{0}`: expected a.b.c.d/prefix with prefix 0-32")]
    InvalidCidr(String),
    #[error("invalid hardware address `{0}`: expected six groups of 1-2 hex digits")]
    InvalidMac(String),
    #[error("integer `{0}` does not fit in 32 bits")]
    IntegerOutOfRange(String),
    #[error("invalid lease cutoff `{0}`: expected W YYYY/MM/DD HH:MM:SS")]
    InvalidLeaseCutoff(String),
    #[error("{field} {value} out of range {min}..={max}")]
    FieldOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("address list is empty")]
    EmptyAddressList,
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an unsigned decimal integer.
///
/// The caller has already established that `text` is all digits; the only
/// failure left is overflow.
pub fn parse_u32(text: &str) -> Result<u32, ValueError> {
    text.parse::<u32>()
        .map_err(|_| ValueError::IntegerOutOfRange(text.to_owned()))
}

/// Parse a dotted-quad IPv4 address.
///
/// Each octet is 1-3 decimal digits with value 0-255. Leading zeros are
/// accepted (`010.001.000.001`), unlike `Ipv4Addr::from_str`.
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr, ValueError> {
    let invalid = || ValueError::InvalidIpv4(text.to_owned());
    let mut octets = [0u8; 4];
    let mut parts = text.split('.');
    for octet in &mut octets {
        let part = parts.next().ok_or_else(invalid)?;
        if !is_digits(part) || part.len() > 3 {
            return Err(invalid());
        }
        let value: u16 = part.parse().map_err(|_| invalid())?;
        *octet = u8::try_from(value).map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(Ipv4Addr::from(octets))
}

/// Netmask with the leading `prefix` bits set.
///
/// `prefix` values above 32 are treated as 32.
pub fn prefix_netmask(prefix: u8) -> Ipv4Addr {
    let bits = u32::from(prefix.min(32));
    let mask = u32::MAX.checked_shl(32 - bits).unwrap_or(0);
    Ipv4Addr::from(mask)
}

/// One or more IPv4 addresses, in declaration order.
///
/// Never empty: the list syntax has no empty form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Ipv4Addr>", into = "Vec<Ipv4Addr>"))]
pub struct AddressList(Vec<Ipv4Addr>);

impl AddressList {
    pub fn single(address: Ipv4Addr) -> Self {
        AddressList(vec![address])
    }

    pub fn push(&mut self, address: Ipv4Addr) {
        self.0.push(address);
    }

    pub fn first(&self) -> Ipv4Addr {
        self.0[0]
    }

    pub fn as_slice(&self) -> &[Ipv4Addr] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ipv4Addr> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<Ipv4Addr>> for AddressList {
    type Error = ValueError;

    fn try_from(addresses: Vec<Ipv4Addr>) -> Result<Self, ValueError> {
        if addresses.is_empty() {
            return Err(ValueError::EmptyAddressList);
        }
        Ok(AddressList(addresses))
    }
}

impl From<AddressList> for Vec<Ipv4Addr> {
    fn from(list: AddressList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a Ipv4Addr;
    type IntoIter = std::slice::Iter<'a, Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for AddressList {
    /// `a, b, c` with no trailing separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, address) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{address}")?;
        }
        Ok(())
    }
}

/// A network in prefix notation, `a.b.c.d/len`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cidr {
    pub address: Ipv4Addr,
    pub prefix: u8,
}

impl Cidr {
    pub fn netmask(&self) -> Ipv4Addr {
        prefix_netmask(self.prefix)
    }
}

impl FromStr for Cidr {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidCidr(text.to_owned());
        let (address, prefix) = text.split_once('/').ok_or_else(invalid)?;
        if !is_digits(prefix) || prefix.len() > 2 {
            return Err(invalid());
        }
        let prefix: u8 = prefix.parse().map_err(|_| invalid())?;
        if prefix > 32 {
            return Err(invalid());
        }
        let address = parse_ipv4(address).map_err(|_| invalid())?;
        Ok(Cidr { address, prefix })
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

/// A six-octet hardware address.
///
/// Parsed from six colon-separated groups of one or two hex digits; renders
/// as lowercase two-digit groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacAddress(pub [u8; 6]);

impl FromStr for MacAddress {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidMac(text.to_owned());
        let mut bytes = [0u8; 6];
        let mut groups = text.split(':');
        for byte in &mut bytes {
            let group = groups.next().ok_or_else(invalid)?;
            if group.is_empty() || group.len() > 2 {
                return Err(invalid());
            }
            *byte = u8::from_str_radix(group, 16).map_err(|_| invalid())?;
        }
        if groups.next().is_some() {
            return Err(invalid());
        }
        Ok(MacAddress(bytes))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Absolute cutoff for dynamic BOOTP leases: weekday, date and time.
///
/// Only constructible with every field in range; deserialization goes
/// through [`LeaseCutoff::new`] as well.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CutoffFields"))]
pub struct LeaseCutoff {
    weekday: u8,
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

/// Unchecked wire shape of a [`LeaseCutoff`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CutoffFields {
    weekday: u32,
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<CutoffFields> for LeaseCutoff {
    type Error = ValueError;

    fn try_from(f: CutoffFields) -> Result<Self, ValueError> {
        LeaseCutoff::new(f.weekday, f.year, f.month, f.day, f.hour, f.minute, f.second)
    }
}

fn check(field: &'static str, value: u32, max: u32) -> Result<u32, ValueError> {
    if value > max {
        return Err(ValueError::FieldOutOfRange {
            field,
            value,
            min: 0,
            max,
        });
    }
    Ok(value)
}

/// Split `text` on `sep` into exactly three all-digit fields.
fn three_fields(text: &str, sep: char) -> Option<[&str; 3]> {
    let mut parts = text.split(sep);
    let fields = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() || !fields.iter().all(|f| is_digits(f)) {
        return None;
    }
    Some(fields)
}

impl LeaseCutoff {
    /// Build a cutoff, checking each field's range.
    ///
    /// Ranges: weekday 0-6, year 0-9999, month 0-12, day 0-31, hour 0-23,
    /// minute and second 0-59.
    pub fn new(
        weekday: u32,
        year: u32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, ValueError> {
        // Each check bounds the value well below the narrowed type's max.
        let narrow = |v: u32| u8::try_from(v).unwrap_or(u8::MAX);
        Ok(LeaseCutoff {
            weekday: narrow(check("weekday", weekday, 6)?),
            year: u16::try_from(check("year", year, 9999)?).unwrap_or(u16::MAX),
            month: narrow(check("month", month, 12)?),
            day: narrow(check("day", day, 31)?),
            hour: narrow(check("hour", hour, 23)?),
            minute: narrow(check("minute", minute, 59)?),
            second: narrow(check("second", second, 59)?),
        })
    }

    /// Parse the three source fields `W`, `YYYY/MM/DD` and `HH:MM:SS`.
    pub fn parse(weekday: &str, date: &str, time: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidLeaseCutoff(format!("{weekday} {date} {time}"));
        if !is_digits(weekday) {
            return Err(invalid());
        }
        let [year, month, day] = three_fields(date, '/').ok_or_else(invalid)?;
        let [hour, minute, second] = three_fields(time, ':').ok_or_else(invalid)?;
        // Digit runs too long for u32 saturate and then fail the range check.
        let num = |text: &str| text.parse::<u32>().unwrap_or(u32::MAX);
        LeaseCutoff::new(
            num(weekday),
            num(year),
            num(month),
            num(day),
            num(hour),
            num(minute),
            num(second),
        )
    }

    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

impl fmt::Display for LeaseCutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            self.weekday, self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
