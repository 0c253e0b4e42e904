//! Scratch row storage for elimination.
//!
//! All in-place row work happens on a `RowReducer` owned by a single
//! algorithm call; the matrices it reads from are never mutated.

use num_traits::Zero;
use tracing::trace;

use exacta_core::Scalar;

use crate::matrix::Matrix;
use crate::vector::Vector;

/// Owned, row-major copy of a matrix under elimination.
pub(crate) struct RowReducer {
    rows: Vec<Vec<Scalar>>,
    width: usize,
}

impl RowReducer {
    pub(crate) fn new(matrix: &Matrix) -> Self {
        Self {
            rows: matrix.rows().into_iter().map(Vector::into_entries).collect(),
            width: matrix.width(),
        }
    }

    pub(crate) fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn entry(&self, row: usize, col: usize) -> &Scalar {
        &self.rows[row][col]
    }

    pub(crate) fn row(&self, row: usize) -> &[Scalar] {
        &self.rows[row]
    }

    /// Column of the first nonzero entry in `row`.
    pub(crate) fn pivot(&self, row: usize) -> Option<usize> {
        leading_column(&self.rows[row])
    }

    /// Pivot columns of the nonzero rows, top to bottom.
    pub(crate) fn pivot_columns(&self) -> Vec<usize> {
        (0..self.num_rows()).filter_map(|r| self.pivot(r)).collect()
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Multiplies `row` by `factor`.
    pub(crate) fn scale_row(&mut self, row: usize, factor: &Scalar) {
        for x in &mut self.rows[row] {
            *x = &*x * factor;
        }
    }

    /// Divides `row` by its pivot so the pivot becomes 1.
    ///
    /// Returns the pivot column, or `None` for a zero row (left as is).
    pub(crate) fn normalize(&mut self, row: usize) -> Option<usize> {
        let col = self.pivot(row)?;
        if let Ok(inv) = self.rows[row][col].recip() {
            self.scale_row(row, &inv);
        }
        Some(col)
    }

    /// `rows[target] -= rows[target][col] * rows[source]`.
    pub(crate) fn eliminate(&mut self, target: usize, source: usize, col: usize) {
        let factor = self.rows[target][col].clone();
        if factor.is_zero() {
            return;
        }
        let source_row = self.rows[source].clone();
        for (x, s) in self.rows[target].iter_mut().zip(&source_row) {
            *x = &*x - &(s * &factor);
        }
    }

    /// Downward pass: normalize each row and clear its pivot column in
    /// every row below. No rows are exchanged.
    pub(crate) fn forward(&mut self) {
        for i in 0..self.num_rows() {
            let Some(col) = self.normalize(i) else {
                continue;
            };
            trace!(row = i, col, "forward pivot");
            for j in i + 1..self.num_rows() {
                self.eliminate(j, i, col);
            }
        }
    }

    /// Upward pass: clear each pivot column in every row above.
    pub(crate) fn backward(&mut self) {
        for i in (0..self.num_rows()).rev() {
            let Some(col) = self.normalize(i) else {
                continue;
            };
            trace!(row = i, col, "backward pivot");
            for j in (0..i).rev() {
                self.eliminate(j, i, col);
            }
        }
    }

    /// Stable sort by pivot column; zero rows sink to the bottom.
    pub(crate) fn sort_by_pivot(&mut self) {
        self.rows
            .sort_by_key(|row| leading_column(row).unwrap_or(usize::MAX));
    }

    pub(crate) fn into_matrix(self) -> Matrix {
        let height = self.rows.len();
        let columns = (0..self.width)
            .map(|c| self.rows.iter().map(|row| row[c].clone()).collect())
            .collect();
        Matrix::from_parts(columns, height)
    }
}

fn leading_column(row: &[Scalar]) -> Option<usize> {
    row.iter().position(|x| !x.is_zero())
}
