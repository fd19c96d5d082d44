//! Per-map classification.

use serde::Serialize;
use tracing::debug;

use crate::core::domain::Domain;
use crate::core::map::SelfMap;
use crate::image::{direct_image, extended_image, ImageSet};
use crate::predicate::{fixes_zero, is_endomorphism, is_idempotent};

/// Classification of one GCD-endomorphism.
///
/// Fields appear in report column order: function, idempotent, image,
/// extended image, i-regular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRecord {
    /// The map `(f(0), …, f(n))`.
    pub function: SelfMap,
    /// `f ∘ f = f`.
    #[serde(rename = "idempotent")]
    pub is_idempotent: bool,
    /// `Im(f)`.
    #[serde(rename = "image")]
    pub direct_image: ImageSet,
    /// `ExtIm(f)`.
    pub extended_image: ImageSet,
    /// `Im(f) = ExtIm(f)`.
    #[serde(rename = "i_regular")]
    pub is_i_regular: bool,
}

/// Classifies a single map on `domain`.
///
/// Does not check that `f` is a GCD-endomorphism; see
/// [`is_valid`](crate::predicate::is_valid). [`check`] classifies a map on
/// its own domain.
///
/// # Example
///
/// ```
/// use gcd_endo::{classify, Domain, SelfMap};
///
/// let m = Domain::new(2);
/// let r = classify(&SelfMap::new(m, vec![0, 1, 1]).unwrap(), m);
/// assert!(r.is_idempotent);
/// assert!(!r.is_i_regular);
/// ```
///
/// # Panics
///
/// `domain` must equal `f.domain()`. A mismatch fails a debug assertion; in
/// release builds a larger `domain` indexes past the end of `f`.
#[must_use]
pub fn classify(f: &SelfMap, domain: Domain) -> ClassificationRecord {
    let direct = direct_image(f, domain);
    let extended = extended_image(f, domain);
    ClassificationRecord {
        function: f.clone(),
        is_idempotent: is_idempotent(f, domain),
        is_i_regular: direct == extended,
        direct_image: direct,
        extended_image: extended,
    }
}

/// Classifies every map, preserving input order.
#[must_use]
pub fn classify_all(domain: Domain, maps: &[SelfMap]) -> Vec<ClassificationRecord> {
    let records: Vec<_> = maps.iter().map(|f| classify(f, domain)).collect();
    let summary = Summary::of(&records);
    debug!(
        n = domain.max(),
        total = summary.total,
        idempotent = summary.idempotent,
        i_regular = summary.i_regular,
        "classification complete"
    );
    records
}

/// Aggregate counts over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of records.
    pub total: usize,
    /// Idempotent maps.
    pub idempotent: usize,
    /// i-regular maps.
    pub i_regular: usize,
    /// Maps that are both idempotent and i-regular.
    pub idempotent_and_i_regular: usize,
}

impl Summary {
    /// Tallies `records`.
    #[must_use]
    pub fn of(records: &[ClassificationRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.total += 1;
            acc.idempotent += usize::from(r.is_idempotent);
            acc.i_regular += usize::from(r.is_i_regular);
            acc.idempotent_and_i_regular += usize::from(r.is_idempotent && r.is_i_regular);
            acc
        })
    }
}

/// Validity verdict for one user-supplied map.
///
/// `record` is present only when the map is a valid GCD-endomorphism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapCheck {
    /// The map under test.
    pub function: SelfMap,
    /// `f(0) = 0`.
    pub fixes_zero: bool,
    /// `f` commutes with gcd on `M × M`.
    pub is_endomorphism: bool,
    /// Classification, if the map is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ClassificationRecord>,
}

impl MapCheck {
    /// Whether the map is a valid GCD-endomorphism.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fixes_zero && self.is_endomorphism
    }
}

/// Checks and, when valid, classifies a single map on its own domain.
#[must_use]
pub fn check(f: &SelfMap) -> MapCheck {
    let domain = f.domain();
    let fixes_zero = fixes_zero(f);
    let is_endomorphism = is_endomorphism(f, domain);
    let record = (fixes_zero && is_endomorphism).then(|| classify(f, domain));
    MapCheck {
        function: f.clone(),
        fixes_zero,
        is_endomorphism,
        record,
    }
}
