//! Legacy storage encoding for INET values.
//!
//! The persisted layout predates the unsigned value model and keeps the
//! 128-bit address in a *signed* field. Stored IPv6 addresses get their
//! top bit flipped so that signed comparisons order them like the real
//! unsigned addresses; IPv4 addresses never reach bit 127 and pass
//! through unchanged. The transform is applied exactly once per boundary
//! crossing and never leaks into the value model, which always works on
//! the raw unsigned address.

use crate::address::{AddressFamily, IpAddress};
use crate::error::ConversionError;

/// Bit flipped on IPv6 addresses at the storage boundary.
const ORDER_BIT: u128 = 1 << 127;

/// The persisted struct-of-three layout: family tag, compat address, mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoredIpAddress {
    /// Family tag; matches the [`AddressFamily`] discriminants.
    pub family: u8,
    /// Address in the sign-flipped compat encoding.
    pub address: i128,
    /// Prefix length, stored as-is.
    pub mask: u16,
}

/// Encode a value for storage.
pub fn to_storage(value: &IpAddress) -> StoredIpAddress {
    StoredIpAddress {
        family: value.family as u8,
        address: encode_address(value.address, value.family),
        mask: value.mask,
    }
}

/// Decode a stored value.
///
/// Fails when the family tag does not name a parseable family, which can
/// only come from corrupt data.
pub fn from_storage(stored: &StoredIpAddress) -> Result<IpAddress, ConversionError> {
    let family = AddressFamily::try_from(stored.family)?;
    if family == AddressFamily::Invalid {
        return Err(ConversionError::InvalidFamily);
    }
    Ok(IpAddress::new(
        family,
        decode_address(stored.address, family),
        stored.mask,
    ))
}

/// Raw unsigned address to compat encoding.
pub fn encode_address(address: u128, family: AddressFamily) -> i128 {
    match family {
        AddressFamily::Ipv6 => (address ^ ORDER_BIT) as i128,
        _ => address as i128,
    }
}

/// Compat encoding back to the raw unsigned address.
pub fn decode_address(stored: i128, family: AddressFamily) -> u128 {
    match family {
        AddressFamily::Ipv6 => (stored as u128) ^ ORDER_BIT,
        _ => stored as u128,
    }
}
