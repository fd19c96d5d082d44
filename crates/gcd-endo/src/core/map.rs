//! Total self-maps on a [`Domain`].

use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::Domain;
use crate::error::{Error, Result};

/// A total map `f: M → M`, stored as the tuple `(f(0), f(1), …, f(n))`.
///
/// The values are held in a fixed-size boxed slice and never mutated after
/// construction. Indexing with a domain element returns its image.
///
/// # Example
///
/// ```
/// use gcd_endo::{Domain, SelfMap};
///
/// let m = Domain::new(2);
/// let f = SelfMap::identity(m);
/// assert_eq!(f[2], 2);
/// assert_eq!(f.to_string(), "(0, 1, 2)");
///
/// let g: SelfMap = "0,2,2".parse().unwrap();
/// assert_eq!(g.values(), &[0, 2, 2]);
/// ```
///
/// Serializes as a JSON array. Deserializing goes through
/// [`SelfMap::try_from`], so an empty array or an out-of-domain value is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct SelfMap {
    values: Box<[usize]>,
}

impl SelfMap {
    /// Builds a map on `domain` from its value tuple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `values` does not have exactly
    /// `domain.len()` entries, or [`Error::MapOutOfDomain`] if any value lies
    /// outside the domain.
    pub fn new(domain: Domain, values: impl Into<Box<[usize]>>) -> Result<Self> {
        let values = values.into();
        if values.len() != domain.len() {
            return Err(Error::LengthMismatch {
                expected: domain.len(),
                actual: values.len(),
            });
        }
        if let Some((position, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, &v)| !domain.contains(v))
        {
            return Err(Error::MapOutOfDomain {
                position,
                value,
                n: domain.max(),
            });
        }
        Ok(Self { values })
    }

    /// Wraps a tuple already known to lie in the domain.
    pub(crate) fn from_values_unchecked(values: Box<[usize]>) -> Self {
        Self { values }
    }

    /// The identity map `x ↦ x`.
    #[must_use]
    pub fn identity(domain: Domain) -> Self {
        Self {
            values: domain.elements().collect(),
        }
    }

    /// The constant map `x ↦ 0`.
    #[must_use]
    pub fn zero(domain: Domain) -> Self {
        Self {
            values: vec![0; domain.len()].into_boxed_slice(),
        }
    }

    /// The domain this map is defined on, inferred from its arity.
    ///
    /// A `SelfMap` always has at least one entry, so the result is well
    /// defined.
    #[must_use]
    pub fn domain(&self) -> Domain {
        Domain::new(self.values.len().saturating_sub(1))
    }

    /// The image of `x`, or `None` if `x` lies outside the domain.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize) -> Option<usize> {
        self.values.get(x).copied()
    }

    /// The value tuple `(f(0), …, f(n))`.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[usize] {
        &self.values
    }
}

impl Index<usize> for SelfMap {
    type Output = usize;

    #[inline]
    fn index(&self, x: usize) -> &usize {
        &self.values[x]
    }
}

/// Infers the domain from the arity, `n = len - 1`.
impl TryFrom<Vec<usize>> for SelfMap {
    type Error = Error;

    fn try_from(values: Vec<usize>) -> Result<Self> {
        let Some(n) = values.len().checked_sub(1) else {
            return Err(Error::Parse("empty map".to_owned()));
        };
        Self::new(Domain::new(n), values)
    }
}

impl From<SelfMap> for Vec<usize> {
    fn from(map: SelfMap) -> Self {
        map.values.into_vec()
    }
}

/// Renders as a tuple literal; a one-element map keeps its trailing comma.
impl fmt::Display for SelfMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        if self.values.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

/// Parses `0,1,2`, `0 1 2`, or `(0, 1, 2)`.
///
/// The domain is inferred from the arity, so every value must be at most
/// `len - 1`.
impl FromStr for SelfMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let body = s.trim();
        let body = body
            .strip_prefix('(')
            .and_then(|b| b.strip_suffix(')'))
            .unwrap_or(body);

        let values = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<usize>()
                    .map_err(|e| Error::Parse(format!("invalid map value `{tok}`: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        if values.is_empty() {
            return Err(Error::Parse(format!("empty map literal `{s}`")));
        }
        Self::try_from(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_zero() {
        let m = Domain::new(3);
        assert_eq!(SelfMap::identity(m).values(), &[0, 1, 2, 3]);
        assert_eq!(SelfMap::zero(m).values(), &[0, 0, 0, 0]);
        assert_eq!(SelfMap::identity(m).domain(), m);
    }

    #[test]
    fn test_new_rejects_wrong_arity() {
        let err = SelfMap::new(Domain::new(2), vec![0, 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_new_rejects_out_of_domain() {
        let err = SelfMap::new(Domain::new(2), vec![0, 3, 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::MapOutOfDomain {
                position: 1,
                value: 3,
                n: 2
            }
        ));
    }

    #[test]
    fn test_display_tuple() {
        assert_eq!(SelfMap::zero(Domain::new(0)).to_string(), "(0,)");
        assert_eq!(SelfMap::identity(Domain::new(1)).to_string(), "(0, 1)");
    }

    #[test]
    fn test_parse_forms() {
        for literal in ["0,1,1", "(0, 1, 1)", "0 1 1", " ( 0,1 ,1 ) "] {
            let f: SelfMap = literal.parse().unwrap();
            assert_eq!(f.values(), &[0, 1, 1], "literal {literal:?}");
        }
        let single: SelfMap = "(0,)".parse().unwrap();
        assert_eq!(single.values(), &[0]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<SelfMap>(), Err(Error::Parse(_))));
        assert!(matches!("()".parse::<SelfMap>(), Err(Error::Parse(_))));
        assert!(matches!("0,x".parse::<SelfMap>(), Err(Error::Parse(_))));
        assert!(matches!("0,-1".parse::<SelfMap>(), Err(Error::Parse(_))));
        assert!(matches!(
            "0,2".parse::<SelfMap>(),
            Err(Error::MapOutOfDomain { value: 2, .. })
        ));
    }

    #[test]
    fn test_json_array_form() {
        let f = SelfMap::identity(Domain::new(1));
        assert_eq!(serde_json::to_string(&f).unwrap(), "[0,1]");
        let back: SelfMap = serde_json::from_str("[0, 1]").unwrap();
        assert_eq!(back, f);
    }

    #[test]
    fn test_deserialize_validates() {
        // 5 is outside {0, 1}
        assert!(serde_json::from_str::<SelfMap>("[0, 5]").is_err());
        assert!(serde_json::from_str::<SelfMap>("[]").is_err());
    }

    #[test]
    fn test_get_out_of_range() {
        let f = SelfMap::identity(Domain::new(1));
        assert_eq!(f.get(1), Some(1));
        assert_eq!(f.get(2), None);
    }
}
