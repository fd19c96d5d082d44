//! Exhaustive generation of GCD-endomorphisms.
//!
//! # Complexity
//!
//! The candidate space is every tuple in `M^(n+1)`, i.e. `(n+1)^(n+1)` maps,
//! and each survivor of the `f(0) = 0` filter costs an O(n²) endomorphism
//! scan. There is no pruning beyond the zero check.
//!
//! | n | candidates |
//! |---|------------|
//! | 2 | 27 |
//! | 4 | 3 125 |
//! | 6 | 823 543 |
//! | 7 | 16 777 216 |
//! | 8 | 387 420 489 |
//!
//! Keep `n` in the single digits.
//!
//! # Order
//!
//! Candidates come out in lexicographic order on `(f(0), …, f(n))`: the last
//! position varies fastest. Output order is deterministic and tests rely on
//! it.

use tracing::debug;

use crate::core::domain::Domain;
use crate::core::map::SelfMap;
use crate::predicate::{fixes_zero, is_endomorphism};

/// Iterator over every tuple in `M^(n+1)` as a [`SelfMap`].
///
/// A multi-radix counter: `n + 1` digits, each in `0..=n`. Each step bumps
/// the last digit and carries leftwards; the iterator ends when the carry
/// falls off the first digit.
///
/// # Example
///
/// ```
/// use gcd_endo::{Candidates, Domain};
///
/// let all: Vec<String> = Candidates::new(Domain::new(1))
///     .map(|f| f.to_string())
///     .collect();
/// assert_eq!(all, ["(0, 0)", "(0, 1)", "(1, 0)", "(1, 1)"]);
/// ```
#[derive(Debug, Clone)]
pub struct Candidates {
    radix: usize,
    digits: Vec<usize>,
    done: bool,
}

impl Candidates {
    /// Starts the counter at `(0, 0, …, 0)`.
    #[must_use]
    pub fn new(domain: Domain) -> Self {
        Self {
            radix: domain.len(),
            digits: vec![0; domain.len()],
            done: false,
        }
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.radix {
                return;
            }
            *digit = 0;
        }
        self.done = true;
    }
}

impl Iterator for Candidates {
    type Item = SelfMap;

    fn next(&mut self) -> Option<SelfMap> {
        if self.done {
            return None;
        }
        let current = SelfMap::from_values_unchecked(self.digits.clone().into_boxed_slice());
        self.advance();
        Some(current)
    }
}

/// Counters from one exhaustive pass.
///
/// `examined = rejected_nonzero + rejected_endomorphism + accepted` and
/// `examined = (n+1)^(n+1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct EnumerationStats {
    /// Candidates generated.
    pub examined: u64,
    /// Dropped by the `f(0) = 0` filter.
    pub rejected_nonzero: u64,
    /// Passed the zero filter but failed the gcd check.
    pub rejected_endomorphism: u64,
    /// Valid GCD-endomorphisms.
    pub accepted: u64,
}

/// Every valid GCD-endomorphism of `domain`, in generation order.
///
/// See the [module docs](self) for cost and ordering.
#[must_use]
pub fn enumerate_valid(domain: Domain) -> Vec<SelfMap> {
    enumerate_with_stats(domain).0
}

/// Like [`enumerate_valid`], also returning filter counters.
#[must_use]
pub fn enumerate_with_stats(domain: Domain) -> (Vec<SelfMap>, EnumerationStats) {
    let mut stats = EnumerationStats::default();
    let mut valid = Vec::new();

    for f in Candidates::new(domain) {
        stats.examined += 1;
        if !fixes_zero(&f) {
            stats.rejected_nonzero += 1;
        } else if !is_endomorphism(&f, domain) {
            stats.rejected_endomorphism += 1;
        } else {
            stats.accepted += 1;
            valid.push(f);
        }
    }

    debug!(
        n = domain.max(),
        examined = stats.examined,
        rejected_nonzero = stats.rejected_nonzero,
        rejected_endomorphism = stats.rejected_endomorphism,
        accepted = stats.accepted,
        "enumeration complete"
    );

    (valid, stats)
}
