//! Dotted-decimal IPv4 grammar.

use crate::address::IpAddress;
use crate::error::ParseError;

use super::parse_decimal;

/// Parse a full dotted-decimal IPv4 address with an optional `/mask`
/// suffix: `number dot number dot number dot number [slash mask]`.
///
/// Also reused by the IPv6 grammar on the substring holding an embedded
/// dotted-decimal tail (which never carries its own mask, so the default
/// mask of 32 falls out naturally).
pub(crate) fn parse_ipv4(input: &str) -> Result<IpAddress, ParseError> {
    let bytes = input.as_bytes();
    let mut c = 0;
    let mut address: u32 = 0;

    for group in 0..4 {
        if group > 0 {
            if c >= bytes.len() || bytes[c] != b'.' {
                return Err(ParseError::new(input, "expected a dot"));
            }
            c += 1;
        }
        let octet = parse_decimal(
            bytes,
            &mut c,
            255,
            input,
            "expected a number",
            "expected a number between 0 and 255",
        )?;
        address = (address << 8) | u32::from(octet);
    }

    let mask = if c == bytes.len() {
        IpAddress::IPV4_DEFAULT_MASK
    } else {
        if bytes[c] != b'/' {
            return Err(ParseError::new(input, "expected a slash"));
        }
        c += 1;
        let mask = parse_decimal(
            bytes,
            &mut c,
            32,
            input,
            "expected a number between 0 and 32",
            "expected a number between 0 and 32",
        )?;
        if c != bytes.len() {
            return Err(ParseError::new(input, "unexpected extra characters"));
        }
        mask
    };

    Ok(IpAddress::from_ipv4(address, mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressFamily;

    fn expect_err(input: &str) -> &'static str {
        parse_ipv4(input).unwrap_err().expected
    }

    #[test]
    fn test_parse_basic() {
        let inet = parse_ipv4("192.168.1.1").unwrap();
        assert_eq!(inet.family, AddressFamily::Ipv4);
        assert_eq!(inet.address, 0xC0A80101);
        assert_eq!(inet.mask, 32);
    }

    #[test]
    fn test_parse_extremes() {
        assert_eq!(parse_ipv4("0.0.0.0").unwrap().address, 0);
        assert_eq!(parse_ipv4("255.255.255.255").unwrap().address, 0xFFFFFFFF);
    }

    #[test]
    fn test_parse_mask() {
        assert_eq!(parse_ipv4("10.0.0.0/8").unwrap().mask, 8);
        assert_eq!(parse_ipv4("10.0.0.0/0").unwrap().mask, 0);
        assert_eq!(parse_ipv4("10.0.0.0/32").unwrap().mask, 32);
    }

    #[test]
    fn test_octet_out_of_range() {
        assert_eq!(expect_err("256.0.0.1"), "expected a number between 0 and 255");
        assert_eq!(expect_err("1.2.3.999"), "expected a number between 0 and 255");
        // A huge digit run must not wrap into range.
        assert_eq!(
            expect_err("4294967297.0.0.1"),
            "expected a number between 0 and 255"
        );
    }

    #[test]
    fn test_missing_pieces() {
        assert_eq!(expect_err("1.2.3"), "expected a dot");
        assert_eq!(expect_err("1.2.3."), "expected a number");
        assert_eq!(expect_err("1..2.3"), "expected a number");
        assert_eq!(expect_err("1.2.3.4.5"), "expected a slash");
    }

    #[test]
    fn test_mask_out_of_range() {
        assert_eq!(expect_err("1.2.3.4/33"), "expected a number between 0 and 32");
        assert_eq!(expect_err("1.2.3.4/"), "expected a number between 0 and 32");
    }

    #[test]
    fn test_trailing_characters() {
        assert_eq!(expect_err("1.2.3.4/8x"), "unexpected extra characters");
        assert_eq!(expect_err("1.2.3.4x"), "expected a slash");
    }
}
