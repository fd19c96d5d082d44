//! Error types.
//!
//! The algebraic core (gcd, predicates, images, enumeration) is total and
//! never fails. Errors only arise at the boundary: an oversized domain, a
//! malformed user-supplied map, or a serialization failure.

use thiserror::Error;

/// Errors raised while configuring a run or building a map from input.
#[derive(Debug, Error)]
pub enum Error {
    /// `n` exceeds the configured search limit.
    #[error("domain size n = {n} exceeds the limit of {limit}: the search space (n+1)^(n+1) is too large")]
    DomainTooLarge {
        /// Requested `n`.
        n: usize,
        /// Largest `n` permitted.
        limit: usize,
    },

    /// `(n+1)^(n+1)` does not fit in a `u64`.
    #[error("search space (n+1)^(n+1) overflows u64 for n = {n}")]
    SearchSpaceOverflow {
        /// Requested `n`.
        n: usize,
    },

    /// A map value lies outside `{0, …, n}`.
    #[error("f({position}) = {value} is outside the domain {{0..={n}}}")]
    MapOutOfDomain {
        /// Position of the offending value.
        position: usize,
        /// The offending value.
        value: usize,
        /// Largest domain element.
        n: usize,
    },

    /// A map does not have exactly one value per domain element.
    #[error("expected {expected} map values, got {actual}")]
    LengthMismatch {
        /// Domain size.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A map literal could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
