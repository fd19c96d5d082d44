//! The finite domain `M = {0, 1, …, n}`.

use core::fmt;
use core::ops::RangeInclusive;

/// The domain `M = {0, 1, …, n}`.
///
/// Elements coincide with their positions, so a self-map on `M` is just an
/// array of `n + 1` values. `n` is unsigned; a negative domain is not
/// representable.
///
/// # Example
///
/// ```
/// use gcd_endo::Domain;
///
/// let m = Domain::new(3);
/// assert_eq!(m.len(), 4);
/// assert_eq!(m.elements().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
/// assert_eq!(m.search_space(), Some(256));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    n: usize,
}

impl Domain {
    /// Creates the domain `{0, …, n}`.
    #[inline]
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    /// The largest element `n`.
    #[inline]
    #[must_use]
    pub const fn max(self) -> usize {
        self.n
    }

    /// Number of elements, `n + 1`.
    ///
    /// # Panics
    ///
    /// Overflows for `n = usize::MAX`. [`search_space`](Self::search_space)
    /// and [`AnalysisConfig::domain`](crate::AnalysisConfig::domain) reject
    /// that domain first.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.n + 1
    }

    /// Whether `value` belongs to the domain.
    #[inline]
    #[must_use]
    pub const fn contains(self, value: usize) -> bool {
        value <= self.n
    }

    /// Elements in ascending order.
    #[inline]
    pub fn elements(self) -> RangeInclusive<usize> {
        0..=self.n
    }

    /// Number of candidate maps, `(n + 1)^(n + 1)`, or `None` on `u64`
    /// overflow.
    #[must_use]
    pub fn search_space(self) -> Option<u64> {
        let len = self.n.checked_add(1)?;
        let base = u64::try_from(len).ok()?;
        let exp = u32::try_from(len).ok()?;
        base.checked_pow(exp)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{0..={}}}", self.n)
    }
}
