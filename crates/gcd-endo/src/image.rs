//! Direct and extended images of a self-map.
//!
//! ```text
//! Im(f)    = { f(x) : x in M }
//! ExtIm(f) = { y in M : exists x in M, gcd(y, f(x)) in Im(f) }
//! ```
//!
//! Taking `x` with `f(x) = y` for `y in Im(f)` gives `gcd(y, y) = y`, so
//! `Im(f) ⊆ ExtIm(f) ⊆ M` always holds, including `y = 0` under the
//! `gcd(0, 0) = 0` convention.
//!
//! Nothing is cached: every call recomputes from the map.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::core::domain::Domain;
use crate::core::gcd::gcd;
use crate::core::map::SelfMap;

/// A set of domain elements, kept sorted.
///
/// Equality is set equality. Renders as a set literal, `{0, 2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageSet(BTreeSet<usize>);

impl ImageSet {
    /// Whether `value` is a member.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: usize) -> bool {
        self.0.contains(&value)
    }

    /// Number of members.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every member of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, usize> {
        self.0.iter()
    }
}

impl FromIterator<usize> for ImageSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ImageSet {
    type Item = &'a usize;
    type IntoIter = btree_set::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ImageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("}")
    }
}

/// `{ f(x) : x in M }`.
///
/// # Example
///
/// ```
/// use gcd_endo::{direct_image, Domain, SelfMap};
///
/// let m = Domain::new(2);
/// let f = SelfMap::new(m, vec![0, 2, 2]).unwrap();
/// assert_eq!(direct_image(&f, m).to_string(), "{0, 2}");
/// ```
///
/// # Panics
///
/// `domain` must equal `f.domain()`. A mismatch fails a debug assertion; in
/// release builds a larger `domain` indexes past the end of `f`.
#[must_use]
pub fn direct_image(f: &SelfMap, domain: Domain) -> ImageSet {
    debug_assert_eq!(f.domain(), domain, "map and domain disagree");
    domain.elements().map(|x| f[x]).collect()
}

/// `{ y in M : gcd(y, f(x)) in Im(f) for some x in M }`.
///
/// Builds the direct image first, then scans `M × M`.
///
/// # Example
///
/// ```
/// use gcd_endo::{extended_image, Domain, SelfMap};
///
/// let m = Domain::new(2);
/// // gcd(2, f(1)) = gcd(2, 1) = 1 lands in the image, so 2 joins.
/// let f = SelfMap::new(m, vec![0, 1, 0]).unwrap();
/// assert_eq!(extended_image(&f, m).to_string(), "{0, 1, 2}");
/// ```
///
/// # Panics
///
/// `domain` must equal `f.domain()`. A mismatch fails a debug assertion; in
/// release builds a larger `domain` indexes past the end of `f`.
#[must_use]
pub fn extended_image(f: &SelfMap, domain: Domain) -> ImageSet {
    let image = direct_image(f, domain);
    domain
        .elements()
        .filter(|&y| domain.elements().any(|x| image.contains(gcd(y, f[x]))))
        .collect()
}
