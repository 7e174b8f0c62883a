//! Fuzzy sets as membership arrays over a sampled domain, and as labeled
//! collections of elements.

use indexmap::IndexMap;
use num::Float;
use serde::Serialize;

use crate::error::{FuzzyError, Result};
use crate::ops::{AndOp, OrOp};

/// Crisp set of the samples whose membership reaches `alpha`.
///
/// Each element of the result is 1 when `membership[i] >= alpha` and 0
/// otherwise. `alpha` is not restricted to [0, 1]: anything above 1 yields
/// an empty cut.
pub fn alpha_cut<F: Float>(membership: &[F], alpha: F) -> Result<Vec<F>> {
    if alpha.is_nan() {
        return Err(FuzzyError::InvalidAlpha);
    }

    Ok(membership
        .iter()
        .map(|&m| if m >= alpha { F::one() } else { F::zero() })
        .collect())
}

/// Element-wise maximum of two membership arrays.
pub fn union<F: Float>(a: &[F], b: &[F]) -> Result<Vec<F>> {
    OrOp::Max.call(a, b)
}

/// Element-wise minimum of two membership arrays.
pub fn intersection<F: Float>(a: &[F], b: &[F]) -> Result<Vec<F>> {
    AndOp::Min.call(a, b)
}

pub fn complement<F: Float>(a: &[F]) -> Vec<F> {
    a.iter().map(|&m| F::one() - m).collect()
}

/// A fuzzy set over named elements. Iteration follows insertion order, which
/// fixes the row and column order of relations built from the set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LabeledSet<F>(IndexMap<String, F>);

impl<F: Float> LabeledSet<F> {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Builds a set from `(label, degree)` pairs, keeping their order.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, F)>) -> Result<Self> {
        let pairs = pairs.into_iter();
        let mut set = Self::with_capacity(pairs.size_hint().0);

        for (label, degree) in pairs {
            set.insert(label, degree)?;
        }

        Ok(set)
    }

    /// Appends an element. Labels must be unique and degrees within [0, 1].
    pub fn insert(&mut self, label: impl Into<String>, degree: F) -> Result<()> {
        check_degree(degree)?;

        let label = label.into();

        if self.0.contains_key(&label) {
            return Err(FuzzyError::DuplicateLabel(label));
        }

        self.0.insert(label, degree);

        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<F> {
        self.0.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn degrees(&self) -> impl Iterator<Item = F> + '_ {
        self.0.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, F)> {
        self.0.iter().map(|(label, degree)| (label.as_str(), *degree))
    }
}

pub(crate) fn check_degree<F: Float>(degree: F) -> Result<()> {
    if degree >= F::zero() && degree <= F::one() {
        Ok(())
    } else {
        Err(FuzzyError::DegreeOutOfRange {
            value: degree.to_f64().unwrap_or(f64::NAN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_cut() {
        let membership = [0.0, 0.2, 0.5, 0.7, 1.0];

        assert_eq!(alpha_cut(&membership, 0.5).unwrap(), vec![0., 0., 1., 1., 1.]);
        assert_eq!(alpha_cut(&membership, 0.0).unwrap(), vec![1.; 5]);
        assert_eq!(alpha_cut(&membership, 1.0).unwrap(), vec![0., 0., 0., 0., 1.]);
        assert_eq!(alpha_cut(&membership, 1.1).unwrap(), vec![0.; 5]);
        assert_eq!(alpha_cut(&membership, f64::NAN), Err(FuzzyError::InvalidAlpha));
    }

    #[test]
    fn test_union_intersection() {
        let a = [0.1, 0.6, 0.3];
        let b = [0.4, 0.2, 0.3];

        assert_eq!(union(&a, &b).unwrap(), vec![0.4, 0.6, 0.3]);
        assert_eq!(intersection(&a, &b).unwrap(), vec![0.1, 0.2, 0.3]);
        assert_eq!(union(&a, &a).unwrap(), a.to_vec());
        assert_eq!(intersection(&b, &b).unwrap(), b.to_vec());
        assert!(union(&a, &b[..2]).is_err());
        assert!(intersection(&a[..1], &b).is_err());
    }

    #[test]
    fn test_complement() {
        assert_eq!(complement(&[0.0, 0.25, 1.0]), vec![1.0, 0.75, 0.0]);
    }

    #[test]
    fn test_labeled_set_keeps_order() {
        let set = LabeledSet::from_pairs([("x3", 0.8), ("x1", 0.2), ("x2", 0.5)]).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.labels().collect::<Vec<_>>(), ["x3", "x1", "x2"]);
        assert_eq!(set.degrees().collect::<Vec<_>>(), [0.8, 0.2, 0.5]);
        assert_eq!(set.get("x1"), Some(0.2));
        assert_eq!(set.get("x4"), None);
    }

    #[test]
    fn test_labeled_set_rejects_bad_input() {
        let mut set = LabeledSet::new();

        set.insert("a", 0.5).unwrap();

        assert_eq!(set.insert("a", 0.1), Err(FuzzyError::DuplicateLabel("a".into())));
        assert_eq!(set.insert("b", 1.5), Err(FuzzyError::DegreeOutOfRange { value: 1.5 }));
        assert!(set.insert("c", -0.1).is_err());
        assert!(set.insert("d", f64::NAN).is_err());
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("a"), Some(0.5));
    }
}
