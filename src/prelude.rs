//! Convenient re-exports for common usage.
//!
//! This module provides a curated set of the most commonly used types
//! from inetsql-core, allowing you to import them with a single `use`
//! statement.
//!
//! # Example
//!
//! ```rust
//! use inetsql_core::prelude::*;
//!
//! let inet: IpAddress = "10.0.0.1".parse().unwrap();
//! assert_eq!(inet.family, AddressFamily::Ipv4);
//! ```

// Value types
pub use crate::address::{AddressFamily, IpAddress};

// Per-value operations
pub use crate::arith::{add, subtract};
pub use crate::format::to_text;
pub use crate::parse::parse;

// Storage boundary
pub use crate::storage::{from_storage, to_storage, StoredIpAddress};

// Error types
pub use crate::error::{ArithmeticError, ConversionError, Error, ParseError, Result};
