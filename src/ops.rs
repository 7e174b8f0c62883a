use num::Float;
use serde::Serialize;

use crate::error::{FuzzyError, Result};

fn zip_checked<F: Float>(u: &[F], v: &[F], op: impl Fn(F, F) -> F) -> Result<Vec<F>> {
    if u.len() != v.len() {
        return Err(FuzzyError::LengthMismatch {
            left: u.len(),
            right: v.len(),
        });
    }

    Ok(u.iter().zip(v).map(|(&u, &v)| op(u, v)).collect())
}

/// And operator (t-norm) for intersecting membership degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AndOp {
    /// Standard intersection
    #[default]
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
}

impl AndOp {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => F::min(u, v),
            Self::Prod => u * v,
            Self::BoundedProd => F::max(F::zero(), u + v - F::one()),
            Self::DrasticProd => {
                if v == F::one() {
                    u
                } else if u == F::one() {
                    v
                } else {
                    F::zero()
                }
            },
        }
    }

    /// Applies the operator element-wise over two equally long membership arrays.
    pub fn call<F: Float>(self, u: &[F], v: &[F]) -> Result<Vec<F>> {
        zip_checked(u, v, |u, v| self.apply(u, v))
    }
}

/// Or operator (t-conorm) for uniting membership degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrOp {
    /// Standard union
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl OrOp {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
            Self::DrasticSum => {
                if v == F::zero() {
                    u
                } else if u == F::zero() {
                    v
                } else {
                    F::one()
                }
            },
        }
    }

    /// Applies the operator element-wise over two equally long membership arrays.
    pub fn call<F: Float>(self, u: &[F], v: &[F]) -> Result<Vec<F>> {
        zip_checked(u, v, |u, v| self.apply(u, v))
    }
}

/// Composition operator for chaining fuzzy relations. Both variants take
/// the maximum over the shared dimension and differ in how a pair of
/// degrees along a path is combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionOp {
    #[default]
    MaxMin,
    MaxProd,
}

impl CompositionOp {
    /// Strength of the path through a single intermediate element.
    pub fn link<F: Float>(self, r: F, s: F) -> F {
        match self {
            Self::MaxMin => AndOp::Min.apply(r, s),
            Self::MaxProd => AndOp::Prod.apply(r, s),
        }
    }
}

#[test]
fn test_and_ops() {
    let u = [0.0, 0.25, 0.5, 1.0];
    let v = [1.0, 0.5, 0.75, 0.5];

    assert_eq!(AndOp::Min.call(&u, &v).unwrap(), vec![0.0, 0.25, 0.5, 0.5]);
    assert_eq!(AndOp::Prod.call(&u, &v).unwrap(), vec![0.0, 0.125, 0.375, 0.5]);
    assert_eq!(AndOp::BoundedProd.call(&u, &v).unwrap(), vec![0.0, 0.0, 0.25, 0.5]);
    assert_eq!(AndOp::DrasticProd.call(&u, &v).unwrap(), vec![0.0, 0.0, 0.0, 0.5]);
}

#[test]
fn test_or_ops() {
    let u = [0.0, 0.25, 0.5, 1.0];
    let v = [1.0, 0.5, 0.75, 0.0];

    assert_eq!(OrOp::Max.call(&u, &v).unwrap(), vec![1.0, 0.5, 0.75, 1.0]);
    assert_eq!(OrOp::ProbOr.call(&u, &v).unwrap(), vec![1.0, 0.625, 0.875, 1.0]);
    assert_eq!(OrOp::BoundedSum.call(&u, &v).unwrap(), vec![1.0, 0.75, 1.0, 1.0]);
    assert_eq!(OrOp::DrasticSum.call(&u, &v).unwrap(), vec![1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_length_mismatch() {
    assert_eq!(
        OrOp::Max.call(&[0.1, 0.2], &[0.3]),
        Err(FuzzyError::LengthMismatch { left: 2, right: 1 })
    );
    assert!(AndOp::Min.call::<f64>(&[], &[0.3]).is_err());
    assert_eq!(AndOp::Min.call::<f64>(&[], &[]), Ok(vec![]));
}
