//! Row echelon forms, rank and column independence.

use crate::matrix::Matrix;
use crate::reducer::RowReducer;

impl Matrix {
    /// Row echelon form.
    ///
    /// Each row, top to bottom, is divided by its first nonzero entry and
    /// then subtracted from every row below to clear that column. Zero
    /// rows are left untouched and rows are never reordered.
    #[must_use]
    pub fn row_echelon(&self) -> Matrix {
        let mut work = RowReducer::new(self);
        work.forward();
        work.into_matrix()
    }

    /// Reduced row echelon form (Gauss-Jordan).
    ///
    /// Rows are ordered by pivot column with zero rows last, so square
    /// invertible matrices reduce to the identity.
    #[must_use]
    pub fn rref(&self) -> Matrix {
        self.reduced().into_matrix()
    }

    pub(crate) fn reduced(&self) -> RowReducer {
        let mut work = RowReducer::new(self);
        work.forward();
        work.backward();
        work.sort_by_pivot();
        work
    }

    /// Number of nonzero rows in the RREF.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.reduced().pivot_columns().len()
    }

    /// `width - rank`.
    #[must_use]
    pub fn nullity(&self) -> usize {
        self.width() - self.rank()
    }

    /// Indices of the linearly independent columns.
    ///
    /// These are the pivot columns of the RREF, each of which reduces to a
    /// column holding a single 1.
    #[must_use]
    pub fn independent_columns(&self) -> Vec<usize> {
        self.reduced().pivot_columns()
    }

    /// Indices of the columns that are combinations of earlier ones.
    #[must_use]
    pub fn dependent_columns(&self) -> Vec<usize> {
        let independent = self.independent_columns();
        (0..self.width())
            .filter(|c| !independent.contains(c))
            .collect()
    }
}
