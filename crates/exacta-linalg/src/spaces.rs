//! Fundamental subspaces and orthogonalization.
//!
//! Every basis is returned as a [`Matrix`] whose columns are the basis
//! vectors.

use num_traits::{One, Zero};

use exacta_core::Scalar;

use crate::matrix::Matrix;
use crate::vector::Vector;

impl Matrix {
    /// Basis of the row space: the nonzero rows of the RREF, as columns.
    #[must_use]
    pub fn rowspace(&self) -> Matrix {
        let work = self.reduced();
        let columns = (0..work.num_rows())
            .filter(|&r| work.pivot(r).is_some())
            .map(|r| Vector::new(work.row(r).to_vec()))
            .collect();
        Matrix::from_parts(columns, self.width())
    }

    /// Basis of the column space: the original independent columns.
    #[must_use]
    pub fn columnspace(&self) -> Matrix {
        let columns = self
            .independent_columns()
            .into_iter()
            .map(|c| self.columns()[c].clone())
            .collect();
        Matrix::from_parts(columns, self.height())
    }

    /// Basis of the solutions of `Ax = 0`.
    ///
    /// One vector per free column `f`: 1 at `f`, minus the RREF entry of
    /// `f` at each pivot position, zero elsewhere.
    #[must_use]
    pub fn nullspace(&self) -> Matrix {
        let work = self.reduced();
        let pivots = work.pivot_columns();
        let width = self.width();

        let columns = (0..width)
            .filter(|col| !pivots.contains(col))
            .map(|free| {
                let mut entries = vec![Scalar::zero(); width];
                entries[free] = Scalar::one();
                for (row, &pivot) in pivots.iter().enumerate() {
                    entries[pivot] = -work.entry(row, free);
                }
                Vector::new(entries)
            })
            .collect();
        Matrix::from_parts(columns, width)
    }

    /// Orthogonalizes the columns with Gram-Schmidt.
    ///
    /// Columns are processed left to right. Each one has its projection
    /// onto every earlier output removed and is then cleared of fractions
    /// with [`Vector::factor`]. Dependent columns come out as zero
    /// vectors.
    #[must_use]
    pub fn orthogonal_basis(&self) -> Matrix {
        let mut basis: Vec<Vector> = Vec::with_capacity(self.width());
        for column in self.columns() {
            let mut v = column.clone();
            for prior in &basis {
                // projection onto a zero vector is taken as 0
                let k = Scalar::from_ratio(&v.dot_unchecked(prior), &prior.dot_unchecked(prior))
                    .unwrap_or_default();
                v = v.sub_scaled(&k, prior).factor();
            }
            basis.push(v);
        }
        Matrix::from_parts(basis, self.height())
    }
}
