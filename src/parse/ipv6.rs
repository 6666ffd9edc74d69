//! Colon-separated hexadecimal IPv6 grammar.
//!
//! An IPv6 address is written as 8 groups of up to 4 hex digits. Each
//! 16-bit group is four nibbles, hence its informal name "quibble"
//! (quad-nibble). Two notations shorten the written form:
//!
//! - one run of zero quibbles may be collapsed to `::`, its length
//!   inferred as whatever is missing from the 8;
//! - the final 32 bits may be written as a dotted-decimal IPv4 literal
//!   (the legacy, mapped, and translated embedded forms).
//!
//! Explicit groups are collected into two bounded buffers, one on each
//! side of the `::` gap, and assembled into the packed 128-bit address
//! once the input is fully consumed.

use smallvec::SmallVec;

use crate::address::IpAddress;
use crate::error::ParseError;

use super::{parse_decimal, parse_ipv4};

/// Quibble groups written on one side of the `::` gap.
type QuibbleRun = SmallVec<[u16; IpAddress::IPV6_NUM_QUIBBLE]>;

/// Parse a full IPv6 address with an optional `/mask` suffix.
pub(crate) fn parse_ipv6(input: &str) -> Result<IpAddress, ParseError> {
    const NUM_QUIBBLE: usize = IpAddress::IPV6_NUM_QUIBBLE;

    let bytes = input.as_bytes();
    let mut c = 0;
    let mut head = QuibbleRun::new();
    let mut tail = QuibbleRun::new();
    let mut gap = false;
    let mut mask = IpAddress::IPV6_DEFAULT_MASK;

    while c < bytes.len() && head.len() + tail.len() < NUM_QUIBBLE {
        let start = c;
        while c < bytes.len() && bytes[c].is_ascii_hexdigit() {
            c += 1;
        }
        if c - start > 4 {
            return Err(ParseError::new(input, "expected 4 or fewer hex digits"));
        }

        if c < bytes.len() && bytes[c] == b'.' {
            // Dotted-decimal tail. Rescan it in full; it must run to the
            // end of the address and fill the last two quibble positions.
            c = start;
            while c < bytes.len() && (bytes[c].is_ascii_digit() || bytes[c] == b'.') {
                c += 1;
            }
            if c < bytes.len() && bytes[c] != b'/' {
                return Err(ParseError::new(
                    input,
                    "IPv4 format can only be used for the final 2 quibbles",
                ));
            }
            if head.len() + tail.len() > NUM_QUIBBLE - 2 {
                return Err(ParseError::new(
                    input,
                    "IPv4 format can only be used for the final 2 quibbles",
                ));
            }
            let v4 = parse_ipv4(&input[start..c])?;
            let groups = if gap { &mut tail } else { &mut head };
            groups.push((v4.address >> 16) as u16);
            groups.push(v4.address as u16);
            if c < bytes.len() {
                mask = parse_mask(bytes, &mut c, input)?;
            }
            break;
        }

        if c < bytes.len() && bytes[c] != b':' && bytes[c] != b'/' {
            return Err(ParseError::new(input, "unexpected character found"));
        }

        if c > start {
            let quibble = bytes[start..c]
                .iter()
                .fold(0u16, |acc, &b| (acc << 4) | u16::from(hex_value(b)));
            if gap {
                tail.push(quibble);
            } else {
                head.push(quibble);
            }
        }

        // A second colon right behind the separator marks the zero-run
        // gap; only one may appear, and never a third colon in a row.
        let mut double = false;
        if c + 1 < bytes.len() && bytes[c] == b':' && bytes[c + 1] == b':' {
            if gap {
                return Err(ParseError::new(
                    input,
                    "encountered more than one double-colon",
                ));
            }
            if c + 2 < bytes.len() && bytes[c + 2] == b':' {
                return Err(ParseError::new(
                    input,
                    "encountered more than two consecutive colons",
                ));
            }
            gap = true;
            double = true;
            c += 1;
        }

        if c < bytes.len() && bytes[c] == b'/' {
            mask = parse_mask(bytes, &mut c, input)?;
            break;
        }

        // Only a `:` separator can be left here. A bare separator after
        // the 8th quibble has nothing to attach to.
        if !double && c < bytes.len() && head.len() + tail.len() == NUM_QUIBBLE {
            return Err(ParseError::new(input, "unexpected extra characters"));
        }
        c += 1;
    }

    let parsed = head.len() + tail.len();
    if parsed < NUM_QUIBBLE && !gap {
        return Err(ParseError::new(input, "expected 8 sets of 4 hex digits"));
    }
    if c < bytes.len() {
        return Err(ParseError::new(input, "unexpected extra characters"));
    }
    if gap && parsed == NUM_QUIBBLE {
        return Err(ParseError::new(
            input,
            "invalid double-colon, too many hex digits",
        ));
    }

    // Zero-fill the gap between the two runs and pack big-endian.
    let mut quibbles = [0u16; NUM_QUIBBLE];
    quibbles[..head.len()].copy_from_slice(&head);
    quibbles[NUM_QUIBBLE - tail.len()..].copy_from_slice(&tail);
    let address = quibbles
        .iter()
        .fold(0u128, |acc, &q| (acc << IpAddress::IPV6_QUIBBLE_BITS) | u128::from(q));

    Ok(IpAddress::from_ipv6(address, mask))
}

fn parse_mask(bytes: &[u8], c: &mut usize, input: &str) -> Result<u16, ParseError> {
    // Caller has already seen the slash.
    *c += 1;
    parse_decimal(
        bytes,
        c,
        128,
        input,
        "expected a number between 0 and 128",
        "expected a number between 0 and 128",
    )
}

/// Value of a byte the scanner has already verified to be a hex digit.
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}
