//! The INET value type.
//!
//! An [`IpAddress`] is an immutable tagged value: an address family, a
//! 128-bit unsigned address, and a prefix length ("mask"). IPv4 addresses
//! occupy only the low 32 bits; IPv6 addresses use all 128. Every
//! operation in this crate consumes and produces whole values, so a value
//! never changes in place.

use crate::error::{ConversionError, ParseError, Result};
use crate::{arith, format, parse, storage};

/// The address family tag of an [`IpAddress`].
///
/// The discriminants match the family tag persisted by the storage layout,
/// see [`crate::storage`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// Uninitialized value; only produced by `Default`, never by parsing.
    #[default]
    Invalid = 0,
    /// 32-bit dotted-decimal address
    Ipv4 = 1,
    /// 128-bit colon-separated hexadecimal address
    Ipv6 = 2,
}

impl TryFrom<u8> for AddressFamily {
    type Error = ConversionError;

    fn try_from(tag: u8) -> std::result::Result<Self, ConversionError> {
        match tag {
            0 => Ok(AddressFamily::Invalid),
            1 => Ok(AddressFamily::Ipv4),
            2 => Ok(AddressFamily::Ipv6),
            other => Err(ConversionError::UnknownFamily(other)),
        }
    }
}

/// An IPv4 or IPv6 address with an attached prefix length.
///
/// # Example
///
/// ```
/// use inetsql_core::IpAddress;
///
/// let inet: IpAddress = "10.0.0.0/8".parse().unwrap();
/// assert_eq!(inet.mask, 8);
/// assert_eq!(inet.to_text().unwrap(), "10.0.0.0/8");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IpAddress {
    /// Which grammar and range the address belongs to.
    pub family: AddressFamily,
    /// The address bits; only the low 32 are meaningful for IPv4.
    pub address: u128,
    /// Prefix length: 0..=32 for IPv4, 0..=128 for IPv6.
    pub mask: u16,
}

impl IpAddress {
    /// Mask value that marks an IPv4 address as having no explicit prefix.
    pub const IPV4_DEFAULT_MASK: u16 = 32;
    /// Mask value that marks an IPv6 address as having no explicit prefix.
    pub const IPV6_DEFAULT_MASK: u16 = 128;
    /// Number of 16-bit groups ("quibbles") in an IPv6 address.
    pub const IPV6_NUM_QUIBBLE: usize = 8;
    /// Width of one IPv6 quibble in bits.
    pub const IPV6_QUIBBLE_BITS: u32 = 16;

    /// Construct a value from raw parts.
    pub fn new(family: AddressFamily, address: u128, mask: u16) -> Self {
        IpAddress {
            family,
            address,
            mask,
        }
    }

    /// Construct an IPv4 value from its packed big-endian 32-bit address.
    pub fn from_ipv4(address: u32, mask: u16) -> Self {
        IpAddress::new(AddressFamily::Ipv4, u128::from(address), mask)
    }

    /// Construct an IPv6 value from its packed big-endian 128-bit address.
    pub fn from_ipv6(address: u128, mask: u16) -> Self {
        IpAddress::new(AddressFamily::Ipv6, address, mask)
    }

    /// Parse an address from its textual form.
    ///
    /// See [`crate::parse`] for the accepted grammars.
    pub fn parse(input: &str) -> std::result::Result<Self, ParseError> {
        parse::parse(input)
    }

    /// Render the canonical textual form.
    ///
    /// See [`crate::format`] for the canonicalization rules.
    pub fn to_text(&self) -> std::result::Result<String, ConversionError> {
        format::to_text(self)
    }

    /// Offset the address by `delta`, checking overflow and family range.
    pub fn add(&self, delta: i128) -> Result<Self> {
        arith::add(self, delta)
    }

    /// Offset the address by `-delta`, checking overflow and family range.
    pub fn subtract(&self, delta: i128) -> Result<Self> {
        arith::subtract(self, delta)
    }

    /// The same address with the prefix dropped (mask reset to the family
    /// default, which suppresses the `/mask` suffix in text).
    pub fn host(&self) -> Self {
        let mask = match self.family {
            AddressFamily::Ipv4 => Self::IPV4_DEFAULT_MASK,
            AddressFamily::Ipv6 => Self::IPV6_DEFAULT_MASK,
            AddressFamily::Invalid => self.mask,
        };
        IpAddress { mask, ..*self }
    }

    /// Encode for the legacy signed-integer storage layout.
    pub fn to_storage(&self) -> storage::StoredIpAddress {
        storage::to_storage(self)
    }

    /// Decode from the legacy signed-integer storage layout.
    pub fn from_storage(
        stored: &storage::StoredIpAddress,
    ) -> std::result::Result<Self, ConversionError> {
        storage::from_storage(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        let value = IpAddress::default();
        assert_eq!(value.family, AddressFamily::Invalid);
        assert_eq!(value.address, 0);
        assert_eq!(value.mask, 0);
    }

    #[test]
    fn test_from_ipv4_packs_low_bits() {
        let value = IpAddress::from_ipv4(0xC0A80101, 32);
        assert_eq!(value.family, AddressFamily::Ipv4);
        assert_eq!(value.address, 0xC0A80101);
        assert_eq!(value.mask, 32);
    }

    #[test]
    fn test_host_drops_prefix() {
        let value = IpAddress::from_ipv4(0x0A000000, 8);
        let host = value.host();
        assert_eq!(host.address, value.address);
        assert_eq!(host.mask, IpAddress::IPV4_DEFAULT_MASK);
        assert_eq!(host.to_text().unwrap(), "10.0.0.0");

        let value = IpAddress::from_ipv6(1, 64);
        assert_eq!(value.host().mask, IpAddress::IPV6_DEFAULT_MASK);
        assert_eq!(value.host().to_text().unwrap(), "::1");
    }

    #[test]
    fn test_family_tag_roundtrip() {
        for family in [
            AddressFamily::Invalid,
            AddressFamily::Ipv4,
            AddressFamily::Ipv6,
        ] {
            assert_eq!(AddressFamily::try_from(family as u8), Ok(family));
        }
        assert_eq!(
            AddressFamily::try_from(3),
            Err(crate::ConversionError::UnknownFamily(3))
        );
    }
}
