//! # inetsql-core
//!
//! Engine-agnostic core of an `inet` SQL type.
//!
//! This crate provides the value model and algorithms for an
//! address+prefix column type, without any SQL engine dependencies: a
//! parser for both IP families, the canonical text renderer, checked
//! offset arithmetic, and the legacy storage encoding. SQL integrations
//! (DataFusion, DuckDB) own batching, null handling, and vectorized
//! dispatch; they call into this crate once per value.
//!
//! ## Quick Start
//!
//! ```rust
//! use inetsql_core::prelude::*;
//!
//! let inet: IpAddress = "2001:0db8:0000:0000:0000:cef3:0035:0363/64".parse().unwrap();
//! assert_eq!(inet.family, AddressFamily::Ipv6);
//! assert_eq!(inet.to_text().unwrap(), "2001:db8::cef3:35:363/64");
//!
//! let next = inet.add(1).unwrap();
//! assert_eq!(next.to_text().unwrap(), "2001:db8::cef3:35:364/64");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +----------------------------------------------------------------+
//! |                         inetsql-core                           |
//! +----------------------------------------------------------------+
//! |  address/  - IpAddress value type, AddressFamily tag           |
//! |  parse/    - IPv4 and IPv6 text grammars                       |
//! |  format/   - canonical rendering, zero-run compression         |
//! |  arith/    - overflow-checked offset arithmetic                |
//! |  storage/  - legacy signed-integer compat encoding             |
//! |  error/    - error types                                       |
//! +----------------------------------------------------------------+
//! ```
//!
//! Every operation is a pure function of its inputs. Values are immutable
//! and self-contained, so parsing, formatting, and arithmetic over
//! independent values (one per row of a batch) need no coordination, and
//! a failure on one value never taints another.

pub mod address;
pub mod arith;
pub mod error;
pub mod format;
pub mod parse;
pub mod prelude;
pub mod storage;

// Re-export commonly used types at crate root for convenience
pub use address::{AddressFamily, IpAddress};
pub use arith::{add, subtract};
pub use error::{ArithmeticError, ConversionError, Error, ParseError, Result};
pub use format::to_text;
pub use parse::parse;
pub use storage::{from_storage, to_storage, StoredIpAddress};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
