//! Run configuration.

use serde::{Deserialize, Serialize};

use crate::core::domain::Domain;
use crate::error::{Error, Result};

/// Default `n`.
pub const DEFAULT_N: usize = 2;

/// Default largest accepted `n`: 8^8 ≈ 1.7e7 candidates.
pub const DEFAULT_LIMIT: usize = 7;

/// Parameters for one enumeration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest domain element; the domain is `{0, …, n}`.
    pub n: usize,
    /// Largest `n` the run will accept.
    pub limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl AnalysisConfig {
    /// Config for `n` with the default limit.
    #[must_use]
    pub fn with_n(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    /// Validates the config and returns the domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainTooLarge`] if `n > limit`, or
    /// [`Error::SearchSpaceOverflow`] if `(n+1)^(n+1)` does not fit in a
    /// `u64`.
    pub fn domain(&self) -> Result<Domain> {
        if self.n > self.limit {
            return Err(Error::DomainTooLarge {
                n: self.n,
                limit: self.limit,
            });
        }
        let domain = Domain::new(self.n);
        if domain.search_space().is_none() {
            return Err(Error::SearchSpaceOverflow { n: self.n });
        }
        Ok(domain)
    }
}
