//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Core operations of the crate never fail. This type is only returned by the strict
/// parsing and checked construction APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryKitError {
    /// The text did not contain a numeric token for every field of the value.
    #[error("expected {expected} numeric components, found {found}")]
    MissingComponents {
        /// Number of fields of the value being parsed.
        expected: usize,
        /// Number of numeric tokens found in the text.
        found: usize,
    },
    /// Range end is before its start.
    #[error("invalid range bounds: {to} is less than {from}")]
    InvalidBounds {
        /// Requested first location.
        from: usize,
        /// Requested last location.
        to: usize,
    },
}
