//! Matrices stored as ordered lists of column vectors.
//!
//! Further `impl Matrix` blocks add elimination (`echelon`), square-only
//! operations (`square`), subspace bases (`spaces`) and line fitting
//! (`regression`).

use std::ops::{Index, Mul, Neg};

use num_traits::{One, Zero};
use rayon::prelude::*;
use tracing::debug;

use exacta_core::{LinalgError, Result, Scalar, Shape};

use crate::config::Limits;
use crate::vector::{Orientation, Vector};

/// A rectangular grid of scalars held as columns.
///
/// Every column is a column-oriented [`Vector`] of length `height`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    /// Columns, left to right.
    columns: Vec<Vector>,
    /// Number of rows; kept explicitly so zero-width matrices keep it.
    height: usize,
}

impl Matrix {
    /// Creates a matrix from its columns.
    ///
    /// Columns are stored column-oriented whatever orientation they
    /// arrive with.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] if the columns differ in
    /// length.
    pub fn new(columns: Vec<Vector>) -> Result<Self> {
        let height = columns.first().map_or(0, Vector::len);
        if let Some(bad) = columns.iter().find(|c| c.len() != height) {
            return Err(LinalgError::SizeMismatch {
                expected: Shape::vector(height),
                found: Shape::vector(bad.len()),
            });
        }
        Ok(Self::from_parts(columns, height))
    }

    /// Builds a matrix whose columns are already known to have `height`
    /// entries each.
    pub(crate) fn from_parts(columns: Vec<Vector>, height: usize) -> Self {
        let columns = columns
            .into_iter()
            .map(|c| match c.orientation() {
                Orientation::Column => c,
                Orientation::Row => c.into_column(),
            })
            .collect();
        Self { columns, height }
    }

    /// Creates a matrix from column entry lists.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] if the columns differ in
    /// length.
    pub fn from_columns(columns: Vec<Vec<Scalar>>) -> Result<Self> {
        Self::new(columns.into_iter().map(Vector::new).collect())
    }

    /// Creates a matrix from row entry lists.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(LinalgError::SizeMismatch {
                expected: Shape::new(1, width),
                found: Shape::new(1, bad.len()),
            });
        }
        let height = rows.len();
        let mut columns = vec![Vec::with_capacity(height); width];
        for row in rows {
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        Ok(Self::from_parts(
            columns.into_iter().map(Vector::new).collect(),
            height,
        ))
    }

    /// Creates an `m x m` identity matrix.
    #[must_use]
    pub fn identity(m: usize) -> Self {
        let columns = (0..m)
            .map(|j| {
                (0..m)
                    .map(|i| if i == j { Scalar::one() } else { Scalar::zero() })
                    .collect()
            })
            .collect();
        Self::from_parts(columns, m)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `height x width`.
    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::new(self.height, self.width())
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.height == self.width()
    }

    /// Returns the columns.
    #[must_use]
    pub fn columns(&self) -> &[Vector] {
        &self.columns
    }

    /// Returns column `index`.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Vector> {
        self.columns.get(index)
    }

    /// Returns row `index` as a row vector.
    ///
    /// # Panics
    ///
    /// Panics if `index >= height`.
    #[must_use]
    pub fn row(&self, index: usize) -> Vector {
        assert!(index < self.height, "row index out of bounds");
        Vector::row(self.columns.iter().map(|c| c[index].clone()).collect())
    }

    /// Returns all rows as row vectors.
    #[must_use]
    pub fn rows(&self) -> Vec<Vector> {
        (0..self.height).map(|i| self.row(i)).collect()
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Scalar> {
        self.columns.get(col).and_then(|c| c.get(row))
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let columns = self.rows().into_iter().map(Vector::into_column).collect();
        Self::from_parts(columns, self.width())
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] if the shapes differ.
    pub fn try_add(&self, other: &Matrix) -> Result<Self> {
        self.zip_columns(other, Vector::try_add)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] if the shapes differ.
    pub fn try_sub(&self, other: &Matrix) -> Result<Self> {
        self.zip_columns(other, Vector::try_sub)
    }

    fn zip_columns(
        &self,
        other: &Matrix,
        op: impl Fn(&Vector, &Vector) -> Result<Vector>,
    ) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(LinalgError::SizeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        let columns = self
            .columns
            .iter()
            .zip(&other.columns)
            .map(|(a, b)| op(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(columns, self.height))
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// Large products are computed with [`Matrix::mul_parallel`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] unless
    /// `self.width() == other.height()`.
    pub fn try_mul(&self, other: &Matrix) -> Result<Self> {
        self.try_mul_with(other, &Limits::default())
    }

    /// Matrix-matrix multiply using `limits.parallel_threshold` to pick
    /// the kernel.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::try_mul`].
    pub fn try_mul_with(&self, other: &Matrix, limits: &Limits) -> Result<Self> {
        self.check_product(other)?;
        if self.height * other.width() >= limits.parallel_threshold {
            debug!(
                rows = self.height,
                cols = other.width(),
                "computing matrix product in parallel"
            );
            Ok(self.product_parallel(other))
        } else {
            Ok(self.product(other))
        }
    }

    /// Matrix-matrix multiply (parallel over result columns).
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::try_mul`].
    pub fn mul_parallel(&self, other: &Matrix) -> Result<Self> {
        self.check_product(other)?;
        Ok(self.product_parallel(other))
    }

    fn check_product(&self, other: &Matrix) -> Result<()> {
        if self.width() != other.height {
            return Err(LinalgError::SizeMismatch {
                expected: Shape::new(self.width(), other.width()),
                found: other.shape(),
            });
        }
        Ok(())
    }

    /// Column `j` of the product is `A` applied to column `j` of `B`.
    fn product_column(&self, rhs: &Vector) -> Vector {
        (0..self.height)
            .map(|i| {
                self.columns
                    .iter()
                    .zip(rhs)
                    .map(|(column, b)| &column[i] * b)
                    .sum::<Scalar>()
            })
            .collect()
    }

    fn product(&self, other: &Matrix) -> Self {
        let columns = other
            .columns
            .iter()
            .map(|c| self.product_column(c))
            .collect();
        Self::from_parts(columns, self.height)
    }

    fn product_parallel(&self, other: &Matrix) -> Self {
        let columns = other
            .columns
            .par_iter()
            .map(|c| self.product_column(c))
            .collect();
        Self::from_parts(columns, self.height)
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &Scalar) -> Self {
        let columns = self.columns.iter().map(|c| c.scale(scalar)).collect();
        Self::from_parts(columns, self.height)
    }

    /// Appends the columns of `other` to the right of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] if the heights differ.
    pub fn augment(&self, other: &Matrix) -> Result<Self> {
        if self.height != other.height {
            return Err(LinalgError::SizeMismatch {
                expected: Shape::new(self.height, other.width()),
                found: other.shape(),
            });
        }
        let columns = self.columns.iter().chain(&other.columns).cloned().collect();
        Ok(Self::from_parts(columns, self.height))
    }

    /// Splits into the first `at` columns and the remaining ones.
    ///
    /// `at` is clamped to the width.
    #[must_use]
    pub fn split_columns(&self, at: usize) -> (Self, Self) {
        let (left, right) = self.columns.split_at(at.min(self.width()));
        (
            Self::from_parts(left.to_vec(), self.height),
            Self::from_parts(right.to_vec(), self.height),
        )
    }

    /// Returns the minor with column `col` and row `row` removed.
    #[must_use]
    pub fn subsquare(&self, col: usize, row: usize) -> Self {
        let columns = self
            .columns
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != col)
            .map(|(_, c)| {
                c.iter()
                    .enumerate()
                    .filter(|&(i, _)| i != row)
                    .map(|(_, x)| x.clone())
                    .collect()
            })
            .collect();
        Self::from_parts(columns, self.height.saturating_sub(1))
    }

    /// Returns a copy with columns `i` and `j` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn with_columns_swapped(&self, i: usize, j: usize) -> Self {
        let mut columns = self.columns.clone();
        columns.swap(i, j);
        Self::from_parts(columns, self.height)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Scalar;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.columns[col][row]
    }
}

impl Mul<&Scalar> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Scalar) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<&Matrix> for &Scalar {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scale(&-Scalar::one())
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(columns: &[&[i64]]) -> Matrix {
        Matrix::new(columns.iter().map(|c| Vector::from_ints(c)).collect()).unwrap()
    }

    #[test]
    fn test_new_rejects_ragged() {
        let err = Matrix::new(vec![Vector::from_ints(&[1, 2]), Vector::from_ints(&[3])]);
        assert_eq!(
            err,
            Err(LinalgError::SizeMismatch {
                expected: Shape::vector(2),
                found: Shape::vector(1),
            })
        );
    }

    #[test]
    fn test_new_normalizes_orientation() {
        let a = Matrix::new(vec![Vector::from_ints(&[1, 2]).transpose()]).unwrap();
        assert_eq!(a, m(&[&[1, 2]]));
    }

    #[test]
    fn test_identity() {
        let id = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(id[(i, j)], Scalar::from(expected));
            }
        }
    }

    #[test]
    fn test_from_rows_matches_columns() {
        let rows = Matrix::from_rows(vec![
            vec![Scalar::from(1), Scalar::from(3)],
            vec![Scalar::from(2), Scalar::from(4)],
        ])
        .unwrap();
        assert_eq!(rows, m(&[&[1, 2], &[3, 4]]));
        assert_eq!(rows.row(0), Vector::row(vec![Scalar::from(1), Scalar::from(3)]));
    }

    #[test]
    fn test_transpose() {
        let a = m(&[&[1, 4], &[2, 5], &[3, 6]]);
        let t = a.transpose();
        assert_eq!(t.height(), 3);
        assert_eq!(t.width(), 2);
        assert_eq!(t[(0, 0)], Scalar::from(1));
        assert_eq!(t[(1, 0)], Scalar::from(2));
        assert_eq!(t[(2, 1)], Scalar::from(6));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_add_sub() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let b = m(&[&[5, 6], &[7, 8]]);
        assert_eq!(a.try_add(&b).unwrap(), m(&[&[6, 8], &[10, 12]]));
        assert_eq!(b.try_sub(&a).unwrap(), m(&[&[4, 4], &[4, 4]]));
        assert!(matches!(
            a.try_add(&m(&[&[1, 2]])),
            Err(LinalgError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_mul() {
        // rows [[1, 2], [3, 4]] * rows [[5, 6], [7, 8]]
        let a = m(&[&[1, 3], &[2, 4]]);
        let b = m(&[&[5, 7], &[6, 8]]);
        let c = a.try_mul(&b).unwrap();
        assert_eq!(c[(0, 0)], Scalar::from(19));
        assert_eq!(c[(0, 1)], Scalar::from(22));
        assert_eq!(c[(1, 0)], Scalar::from(43));
        assert_eq!(c[(1, 1)], Scalar::from(50));
        assert_eq!(a.mul_parallel(&b).unwrap(), c);
    }

    #[test]
    fn test_mul_shapes() {
        // 2x3 times 3x1 is 2x1
        let a = m(&[&[1, 4], &[2, 5], &[3, 6]]);
        let x = m(&[&[1, 2, 3]]);
        let y = a.try_mul(&x).unwrap();
        assert_eq!(y.shape(), Shape::new(2, 1));
        assert_eq!(y, m(&[&[14, 32]]));
        assert!(matches!(
            x.try_mul(&a),
            Err(LinalgError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_scalar_mul_commutes() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let k = Scalar::new(1, 2).unwrap();
        assert_eq!(&a * &k, &k * &a);
        assert_eq!(-&a, &a * &Scalar::from(-1));
    }

    #[test]
    fn test_augment_and_split() {
        let a = m(&[&[1, 2]]);
        let b = Matrix::identity(2);
        let ab = a.augment(&b).unwrap();
        assert_eq!(ab.width(), 3);
        let (left, right) = ab.split_columns(1);
        assert_eq!(left, a);
        assert_eq!(right, b);
        assert!(a.augment(&Matrix::identity(3)).is_err());
    }

    #[test]
    fn test_subsquare() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        // drop column 1 and row 0
        assert_eq!(a.subsquare(1, 0), m(&[&[2, 3], &[8, 9]]));
    }

    #[test]
    fn test_swap_is_pure() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let swapped = a.with_columns_swapped(0, 1);
        assert_eq!(swapped, m(&[&[3, 4], &[1, 2]]));
        assert_eq!(a, m(&[&[1, 2], &[3, 4]]));
    }
}
