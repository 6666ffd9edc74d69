//! Canonical text rendering for INET values.
//!
//! IPv4 renders as four dotted-decimal octets. IPv6 renders in the
//! RFC-style canonical form: lowercase hex quibbles without leading
//! zeros, the longest (leftmost on ties) run of two or more zero quibbles
//! collapsed to `::`, and the legacy embedded-IPv4 display forms spelled
//! with a dotted-decimal tail. Either family appends `/mask` only when
//! the mask is not the family default.

use std::fmt::Write;
use std::net::Ipv4Addr;

use crate::address::{AddressFamily, IpAddress};
use crate::error::ConversionError;

/// Render the canonical textual form of `value`.
///
/// Fails only for [`AddressFamily::Invalid`], which no parser output ever
/// carries.
///
/// # Example
///
/// ```
/// use inetsql_core::{parse, to_text};
///
/// let inet = parse("2001:0db8:0000:0000:0000:cef3:0035:0363").unwrap();
/// assert_eq!(to_text(&inet).unwrap(), "2001:db8::cef3:35:363");
/// ```
pub fn to_text(value: &IpAddress) -> Result<String, ConversionError> {
    match value.family {
        AddressFamily::Ipv4 => Ok(ipv4_text(value.address as u32, value.mask)),
        AddressFamily::Ipv6 => Ok(ipv6_text(value)),
        AddressFamily::Invalid => Err(ConversionError::InvalidFamily),
    }
}

fn ipv4_text(address: u32, mask: u16) -> String {
    let mut out = Ipv4Addr::from(address).to_string();
    if mask != IpAddress::IPV4_DEFAULT_MASK {
        let _ = write!(out, "/{mask}");
    }
    out
}

fn ipv6_text(value: &IpAddress) -> String {
    const NUM_QUIBBLE: usize = IpAddress::IPV6_NUM_QUIBBLE;

    let mut quibbles = [0u16; NUM_QUIBBLE];
    for (i, q) in quibbles.iter_mut().enumerate() {
        let shift = (NUM_QUIBBLE - 1 - i) as u32 * IpAddress::IPV6_QUIBBLE_BITS;
        *q = (value.address >> shift) as u16;
    }

    let (zero_start, zero_run) = longest_zero_run(&quibbles);
    let zero_end = zero_start + zero_run;

    let mut out = String::new();
    let mut i = 0;
    while i < NUM_QUIBBLE {
        if i > 0 {
            out.push(':');
        }
        if i >= zero_start && i < zero_end {
            // A run at either boundary needs its extra colon so the
            // double-colon stays well formed.
            if i == 0 {
                out.push(':');
            }
            i = zero_end - 1;
            if i == NUM_QUIBBLE - 1 {
                out.push(':');
            }
        } else if i == 6 && embedded_ipv4_form(&quibbles, zero_start, zero_end) {
            // The default mask suppresses any suffix inside the tail; the
            // real mask is appended below.
            out.push_str(&ipv4_text(
                value.address as u32,
                IpAddress::IPV4_DEFAULT_MASK,
            ));
            break;
        } else {
            let _ = write!(out, "{:x}", quibbles[i]);
        }
        i += 1;
    }

    if value.mask != IpAddress::IPV6_DEFAULT_MASK {
        let _ = write!(out, "/{}", value.mask);
    }
    out
}

/// Find the longest run of two or more consecutive zero quibbles.
///
/// Ties keep the leftmost run, and a lone zero quibble never counts as a
/// run. Returns `(start, length)`, with length 0 when nothing qualifies.
fn longest_zero_run(quibbles: &[u16; IpAddress::IPV6_NUM_QUIBBLE]) -> (usize, usize) {
    let mut best_start = 0;
    let mut best_run = 0;
    let mut run_start = None;

    for (i, &q) in quibbles.iter().enumerate() {
        if q == 0 {
            run_start.get_or_insert(i);
        } else if let Some(start) = run_start.take() {
            let run = i - start;
            if run > 1 && run > best_run {
                best_run = run;
                best_start = start;
            }
        }
    }
    if let Some(start) = run_start {
        let run = quibbles.len() - start;
        if run > 1 && run > best_run {
            best_run = run;
            best_start = start;
        }
    }

    (best_start, best_run)
}

/// Whether the low 32 bits should display as an embedded dotted-decimal
/// tail. Checked once the render loop reaches quibble 6, most specific
/// (longest zero run) form first.
fn embedded_ipv4_form(
    quibbles: &[u16; IpAddress::IPV6_NUM_QUIBBLE],
    zero_start: usize,
    zero_end: usize,
) -> bool {
    if zero_start != 0 {
        return false;
    }
    // Deprecated all-zero-prefix form, except `::1` which stays hex
    (zero_end == 6 && quibbles[7] != 1)
        // IPv4-mapped: ::ffff:a.b.c.d
        || (zero_end == 5 && quibbles[5] == 0xffff)
        // IPv4-translated: ::ffff:0:a.b.c.d
        || (zero_end == 4 && quibbles[4] == 0xffff && quibbles[5] == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn text(input: &str) -> String {
        parse(input).unwrap().to_text().unwrap()
    }

    #[test]
    fn test_ipv4_basic() {
        assert_eq!(text("192.168.1.1"), "192.168.1.1");
        assert_eq!(text("0.0.0.0"), "0.0.0.0");
        assert_eq!(text("255.255.255.255"), "255.255.255.255");
    }

    #[test]
    fn test_ipv4_mask_suffix() {
        assert_eq!(text("10.0.0.0/8"), "10.0.0.0/8");
        assert_eq!(text("10.0.0.0/0"), "10.0.0.0/0");
        // The default mask is suppressed.
        assert_eq!(text("10.0.0.0/32"), "10.0.0.0");
    }

    #[test]
    fn test_ipv6_compression_longest_leftmost() {
        assert_eq!(
            text("2001:0db8:0000:0000:0000:cef3:0035:0363"),
            "2001:db8::cef3:35:363"
        );
        // Equal-length runs keep the leftmost.
        assert_eq!(text("1:0:0:2:3:0:0:4"), "1::2:3:0:0:4");
        // The longer run wins even when it is to the right.
        assert_eq!(text("1:0:0:2:0:0:0:4"), "1:0:0:2::4");
    }

    #[test]
    fn test_ipv6_single_zero_not_compressed() {
        assert_eq!(text("1:2:3:0:5:6:7:8"), "1:2:3:0:5:6:7:8");
        assert_eq!(text("2001:db8:1:1:1:ffff:0:1"), "2001:db8:1:1:1:ffff:0:1");
    }

    #[test]
    fn test_ipv6_run_at_boundaries() {
        assert_eq!(text("::"), "::");
        assert_eq!(text("::1"), "::1");
        assert_eq!(text("1::"), "1::");
        assert_eq!(text("0:0:1:2:3:4:5:6"), "::1:2:3:4:5:6");
        assert_eq!(text("1:2:3:4:5:6:0:0"), "1:2:3:4:5:6::");
    }

    #[test]
    fn test_ipv6_lowercase_no_leading_zeros() {
        assert_eq!(text("2001:DB8::0001"), "2001:db8::1");
        assert_eq!(text("00ff::"), "ff::");
    }

    #[test]
    fn test_ipv6_mask_suffix() {
        assert_eq!(text("2001:db8::/32"), "2001:db8::/32");
        assert_eq!(text("::/0"), "::/0");
        assert_eq!(text("::1/128"), "::1");
    }

    #[test]
    fn test_embedded_deprecated_form() {
        // Zero run covers the first six quibbles: dotted-decimal tail.
        assert_eq!(text("::102:304"), "::1.2.3.4");
        assert_eq!(text("::2:3"), "::0.2.0.3");
        // ...but the loopback stays hexadecimal.
        assert_eq!(text("::1"), "::1");
        // A zero run reaching quibble 6 does not qualify.
        assert_eq!(text("::5"), "::5");
    }

    #[test]
    fn test_embedded_mapped_form() {
        assert_eq!(text("::ffff:192.0.2.1"), "::ffff:192.0.2.1");
        assert_eq!(text("::ffff:c000:201"), "::ffff:192.0.2.1");
    }

    #[test]
    fn test_embedded_translated_form() {
        assert_eq!(text("::ffff:0:10.0.0.1"), "::ffff:0:10.0.0.1");
        assert_eq!(text("::ffff:0:a00:1"), "::ffff:0:10.0.0.1");
    }

    #[test]
    fn test_embedded_form_keeps_mask() {
        assert_eq!(text("::ffff:192.0.2.1/96"), "::ffff:192.0.2.1/96");
    }

    #[test]
    fn test_invalid_family_rejected() {
        let value = IpAddress::default();
        assert_eq!(to_text(&value), Err(ConversionError::InvalidFamily));
    }

    #[test]
    fn test_format_idempotent() {
        for input in ["2001:0db8::cef3:0035:363", "10.1.2.3/24", "::ffff:1.2.3.4"] {
            let value = parse(input).unwrap();
            assert_eq!(value.to_text().unwrap(), value.to_text().unwrap());
        }
    }
}
