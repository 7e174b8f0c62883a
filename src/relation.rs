//! Fuzzy relations as dense matrices of membership degrees.

use std::ops::Index;

use num::Float;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::{FuzzyError, Result};
use crate::ops::{AndOp, CompositionOp};
use crate::set::{check_degree, LabeledSet};

/// A fuzzy relation between two finite sets, stored row-major.
///
/// Every entry is a membership degree in [0, 1]; `from_rows` rejects
/// anything else.
#[derive(Clone, Debug, PartialEq)]
pub struct Relation<F> {
    data: Vec<F>,
    rows: usize,
    cols: usize,
}

/// Which of the classical properties a square relation has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RelationProperties {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
}

/// A relation built from two labeled sets along with the labels of its rows
/// and columns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CartesianRelation<F> {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub relation: Relation<F>,
}

impl<F: Float> Relation<F> {
    /// Builds a relation from nested rows. All rows must share a length.
    pub fn from_rows<R: AsRef<[F]>>(rows: impl IntoIterator<Item = R>) -> Result<Self> {
        let mut data = Vec::new();
        let mut n_rows = 0;
        let mut n_cols = None;

        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *n_cols.get_or_insert(row.len());

            if row.len() != expected {
                return Err(FuzzyError::RaggedRows {
                    row: i,
                    expected,
                    got: row.len(),
                });
            }

            for &degree in row {
                check_degree(degree)?;
            }

            data.extend_from_slice(row);
            n_rows += 1;
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols.unwrap_or(0),
        })
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![F::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Cartesian product of two labeled sets under the min operator:
    /// `R[i][j] = min(μA(aᵢ), μB(bⱼ))`, rows and columns in insertion order.
    pub fn cartesian(a: &LabeledSet<F>, b: &LabeledSet<F>) -> CartesianRelation<F> {
        let mut data = Vec::with_capacity(a.len() * b.len());

        for mu_a in a.degrees() {
            for mu_b in b.degrees() {
                data.push(AndOp::Min.apply(mu_a, mu_b));
            }
        }

        debug!(rows = a.len(), cols = b.len(), "built cartesian relation");

        CartesianRelation {
            row_labels: a.labels().map(String::from).collect(),
            col_labels: b.labels().map(String::from).collect(),
            relation: Self {
                data,
                rows: a.len(),
                cols: b.len(),
            },
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<F> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> &[F] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn to_rows(&self) -> Vec<Vec<F>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Composes `self` (n×p) with `other` (p×m) into an n×m relation:
    /// `T[i][k] = max_j link(R[i][j], S[j][k])`.
    pub fn compose(&self, other: &Self, op: CompositionOp) -> Result<Self> {
        if self.cols != other.rows {
            return Err(FuzzyError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut data = Vec::with_capacity(self.rows * other.cols);

        for i in 0..self.rows {
            for k in 0..other.cols {
                let mut strongest = F::zero();

                for j in 0..self.cols {
                    strongest = F::max(strongest, op.link(self[(i, j)], other[(j, k)]));
                }

                data.push(strongest);
            }
        }

        debug!(rows = self.rows, cols = other.cols, ?op, "composed relations");

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Max-min composition, `R ◦ S`.
    pub fn max_min(&self, other: &Self) -> Result<Self> {
        self.compose(other, CompositionOp::MaxMin)
    }

    fn check_square(&self) -> Result<usize> {
        if self.is_square() {
            Ok(self.rows)
        } else {
            Err(FuzzyError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Every element is fully related to itself.
    ///
    /// Compares against 1.0 exactly, so a diagonal produced by arithmetic
    /// may miss by rounding.
    pub fn is_reflexive(&self) -> Result<bool> {
        let n = self.check_square()?;

        Ok((0..n).all(|i| self[(i, i)] == F::one()))
    }

    /// `R[i][j] == R[j][i]` for every pair, compared exactly.
    pub fn is_symmetric(&self) -> Result<bool> {
        let n = self.check_square()?;

        for i in 0..n {
            for j in 0..n {
                if self[(i, j)] != self[(j, i)] {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Max-min transitivity: `R[i][k] >= max_j min(R[i][j], R[j][k])` for
    /// every `i`, `k`, i.e. `R ◦ R` never exceeds `R`.
    pub fn is_transitive(&self) -> Result<bool> {
        let n = self.check_square()?;

        for i in 0..n {
            for k in 0..n {
                let mut max_min = F::zero();

                for j in 0..n {
                    max_min = F::max(max_min, F::min(self[(i, j)], self[(j, k)]));
                }

                if self[(i, k)] < max_min {
                    trace!(i, k, "transitivity violated");
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    pub fn properties(&self) -> Result<RelationProperties> {
        Ok(RelationProperties {
            reflexive: self.is_reflexive()?,
            symmetric: self.is_symmetric()?,
            transitive: self.is_transitive()?,
        })
    }
}

impl<F> Index<(usize, usize)> for Relation<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &F {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");

        &self.data[i * self.cols + j]
    }
}

// Serialized as nested rows
impl<F: Serialize> Serialize for Relation<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq((0..self.rows).map(|i| &self.data[i * self.cols..(i + 1) * self.cols]))
    }
}
