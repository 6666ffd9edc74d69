//! Error types for inetsql-core.
//!
//! This module provides structured error types for all inetsql-core
//! operations:
//!
//! - [`enum@Error`] - Main error enum that wraps all error types
//! - [`ParseError`] - Errors from parsing textual addresses
//! - [`ConversionError`] - Errors from rendering or decoding invalid values
//! - [`ArithmeticError`] - Errors from checked offset arithmetic
//!
//! All errors implement `std::error::Error`. Every error is returned as a
//! value from the operation that detects it; a failure on one input never
//! affects another, so a caller walking a column of values can keep going
//! after a bad row.

use thiserror::Error;

/// Main error type for inetsql-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed textual input
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Value with an invalid address family
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Overflow or out-of-range offset arithmetic
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

/// A textual address that does not match either grammar.
///
/// Carries the offending input together with a description of the token
/// the grammar expected at the point of failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to convert string \"{input}\" to inet: {expected}")]
pub struct ParseError {
    /// The input that failed to parse.
    pub input: String,
    /// The token or rule the grammar expected.
    pub expected: &'static str,
}

impl ParseError {
    pub(crate) fn new(input: &str, expected: &'static str) -> Self {
        ParseError {
            input: input.to_string(),
            expected,
        }
    }
}

/// A value whose address family is not usable for the attempted operation.
///
/// The parser never produces such a value, so hitting this indicates a
/// programming error in the caller (or corrupt data at the storage
/// boundary).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// Formatting or storing an uninitialized (default) value
    #[error("address family is invalid")]
    InvalidFamily,

    /// Decoding a stored family tag that maps to no known family
    #[error("unknown address family tag: {0}")]
    UnknownFamily(u8),
}

/// Checked offset arithmetic failure.
///
/// Both variants carry the original address (already rendered as text) and
/// the attempted delta for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The unsigned 128-bit add or subtract wrapped
    #[error("overflow offsetting address {address} by {delta}")]
    Overflow { address: String, delta: i128 },

    /// An IPv4 result left the 32-bit range
    #[error("offsetting address {address} by {delta} is out of range for IPv4")]
    OutOfRange { address: String, delta: i128 },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
