//! # Fragment Errors
//!
//! Construction either succeeds with a normalized fragment or fails with one
//! of these. Out-of-range numbers are never an error, they are clamped.

use thiserror::Error;

use crate::network::Family;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// The input's type is not accepted by this family (e.g. a float, or a
    /// string given to an IPv4 fragment).
    #[error("{family} fragment cannot be built from {kind} input")]
    InvalidInputType { family: Family, kind: &'static str },

    /// A string input is not 1 to 4 hexadecimal digits.
    #[error("'{input}' is not a valid IPv6 partition")]
    InvalidFormat { input: String },
}
