//! Text parsers for the INET type.
//!
//! Two related grammars share this module: dotted-decimal IPv4 and
//! colon-separated hexadecimal IPv6. Dispatch looks at the leading lexical
//! shape of the input: a run of hex digits followed by `.` selects the
//! IPv4 grammar, a run followed by `:` (or a bare leading `:`, for the
//! `::`-compressed forms) selects the IPv6 grammar. Each grammar then
//! consumes the whole input or fails with a [`ParseError`] naming the
//! expected token; there is no partial success.

mod ipv4;
mod ipv6;

use std::str::FromStr;

use crate::address::IpAddress;
use crate::error::ParseError;

pub(crate) use ipv4::parse_ipv4;

/// Parse a textual IPv4 or IPv6 address with an optional `/mask` suffix.
///
/// # Example
///
/// ```
/// use inetsql_core::{parse, AddressFamily};
///
/// let inet = parse("2001:db8::1").unwrap();
/// assert_eq!(inet.family, AddressFamily::Ipv6);
/// assert_eq!(inet.mask, 128);
///
/// assert!(parse("10.0.0.256").is_err());
/// ```
pub fn parse(input: &str) -> Result<IpAddress, ParseError> {
    let bytes = input.as_bytes();
    let mut c = 0;
    while c < bytes.len() && bytes[c].is_ascii_hexdigit() {
        c += 1;
    }
    if c == bytes.len() {
        return Err(ParseError::new(input, "expected an IP address"));
    }
    // IPv6 can start with a colon
    if bytes[c] == b':' {
        return ipv6::parse_ipv6(input);
    }
    if c == 0 {
        return Err(ParseError::new(input, "expected a number"));
    }
    if bytes[c] == b'.' {
        return ipv4::parse_ipv4(input);
    }
    Err(ParseError::new(input, "expected an IP address"))
}

impl FromStr for IpAddress {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse(input)
    }
}

/// Scan a run of one or more decimal digits at `*c` and return its value.
///
/// `empty` is the error for a zero-length run, `range` the error for a
/// value above `max`. The cursor is left on the first non-digit byte.
fn parse_decimal(
    bytes: &[u8],
    c: &mut usize,
    max: u16,
    input: &str,
    empty: &'static str,
    range: &'static str,
) -> Result<u16, ParseError> {
    let start = *c;
    let mut value: u32 = 0;
    while *c < bytes.len() && bytes[*c].is_ascii_digit() {
        value = value * 10 + u32::from(bytes[*c] - b'0');
        if value > u32::from(max) {
            return Err(ParseError::new(input, range));
        }
        *c += 1;
    }
    if *c == start {
        return Err(ParseError::new(input, empty));
    }
    Ok(value as u16)
}
