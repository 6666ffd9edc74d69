//! Checked offset arithmetic over INET values.
//!
//! Offsets treat the address as an unsigned 128-bit integer and add or
//! subtract the delta's magnitude with overflow checking. IPv4 results
//! must additionally stay below 2^32. Family and mask are copied through
//! unchanged; a zero delta returns the input as-is.

use crate::address::{AddressFamily, IpAddress};
use crate::error::{ArithmeticError, Result};

/// Offset `value` by `delta`.
///
/// # Example
///
/// ```
/// use inetsql_core::{add, parse};
///
/// let inet = parse("192.168.1.5").unwrap();
/// assert_eq!(add(&inet, 10).unwrap().to_text().unwrap(), "192.168.1.15");
/// assert!(add(&parse("255.255.255.255").unwrap(), 1).is_err());
/// ```
pub fn add(value: &IpAddress, delta: i128) -> Result<IpAddress> {
    offset(value, delta.unsigned_abs(), delta < 0, delta)
}

/// Offset `value` by `-delta`.
///
/// The magnitude/sign split keeps `i128::MIN` applicable; only the delta
/// echoed in a failure message wraps for that one input.
pub fn subtract(value: &IpAddress, delta: i128) -> Result<IpAddress> {
    offset(value, delta.unsigned_abs(), delta > 0, delta.wrapping_neg())
}

/// Shared add/subtract core. `delta` is carried only for diagnostics.
fn offset(value: &IpAddress, magnitude: u128, negative: bool, delta: i128) -> Result<IpAddress> {
    if magnitude == 0 {
        return Ok(*value);
    }

    let shifted = if negative {
        value.address.checked_sub(magnitude)
    } else {
        value.address.checked_add(magnitude)
    };
    let Some(address) = shifted else {
        return Err(ArithmeticError::Overflow {
            address: value.to_text()?,
            delta,
        }
        .into());
    };

    if value.family == AddressFamily::Ipv4 && address > u128::from(u32::MAX) {
        return Err(ArithmeticError::OutOfRange {
            address: value.to_text()?,
            delta,
        }
        .into());
    }

    Ok(IpAddress::new(value.family, address, value.mask))
}
