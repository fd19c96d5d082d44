//! Predicates on self-maps.
//!
//! | Predicate | Condition | Cost |
//! |-----------|-----------|------|
//! | [`fixes_zero`] | `f(0) = 0` | O(1) |
//! | [`is_endomorphism`] | `f(gcd(x, y)) = gcd(f(x), f(y))` on `M × M` | O(n²) |
//! | [`is_idempotent`] | `f(f(x)) = f(x)` on `M` | O(n) |
//!
//! All predicates take the map and the domain separately and only inspect
//! positions `0..=n`. The domain must be the map's own, `f.domain()`.

use crate::core::domain::Domain;
use crate::core::gcd::gcd;
use crate::core::map::SelfMap;

/// `f(0) = 0`.
#[inline]
#[must_use]
pub fn fixes_zero(f: &SelfMap) -> bool {
    f.get(0) == Some(0)
}

/// Whether `f` commutes with gcd over every ordered pair of `domain`.
///
/// The check runs over the full Cartesian product, symmetric pairs and the
/// diagonal included.
///
/// # Example
///
/// ```
/// use gcd_endo::{is_endomorphism, Domain, SelfMap};
///
/// let m = Domain::new(2);
/// assert!(is_endomorphism(&SelfMap::new(m, vec![0, 1, 2]).unwrap(), m));
/// // gcd(1, 2) = 1 but gcd(f(1), f(2)) = gcd(2, 1) = 1 != f(1)
/// assert!(!is_endomorphism(&SelfMap::new(m, vec![0, 2, 1]).unwrap(), m));
/// ```
///
/// # Panics
///
/// `domain` must equal `f.domain()`. A mismatch fails a debug assertion; in
/// release builds a larger `domain` indexes past the end of `f`.
#[must_use]
pub fn is_endomorphism(f: &SelfMap, domain: Domain) -> bool {
    debug_assert_eq!(f.domain(), domain, "map and domain disagree");
    domain
        .elements()
        .all(|x| domain.elements().all(|y| f[gcd(x, y)] == gcd(f[x], f[y])))
}

/// Whether `f ∘ f = f` on `domain`.
///
/// # Panics
///
/// `domain` must equal `f.domain()`. A mismatch fails a debug assertion; in
/// release builds a larger `domain` indexes past the end of `f`.
#[must_use]
pub fn is_idempotent(f: &SelfMap, domain: Domain) -> bool {
    debug_assert_eq!(f.domain(), domain, "map and domain disagree");
    domain.elements().all(|x| f[f[x]] == f[x])
}

/// A valid GCD-endomorphism: fixes `0` and commutes with gcd.
///
/// The O(1) zero check runs first and short-circuits the O(n²) scan.
///
/// # Panics
///
/// As [`is_endomorphism`], when `domain` differs from `f.domain()`.
#[inline]
#[must_use]
pub fn is_valid(f: &SelfMap, domain: Domain) -> bool {
    fixes_zero(f) && is_endomorphism(f, domain)
}
