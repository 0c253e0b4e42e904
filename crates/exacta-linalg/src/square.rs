//! Operations defined only for square matrices.

use num_traits::{One, Zero};
use tracing::debug;

use exacta_core::{LinalgError, Result, Scalar};

use crate::config::Limits;
use crate::matrix::Matrix;
use crate::reducer::RowReducer;

impl Matrix {
    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NonsquareMatrix(self.shape()))
        }
    }

    /// Computes the determinant.
    ///
    /// Small matrices use cofactor expansion, larger ones elimination;
    /// the cut-over is [`Limits::cofactor_max_dim`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonsquareMatrix`] for non-square input.
    pub fn determinant(&self) -> Result<Scalar> {
        self.determinant_with(&Limits::default())
    }

    /// Computes the determinant with an explicit cofactor cut-over.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonsquareMatrix`] for non-square input.
    pub fn determinant_with(&self, limits: &Limits) -> Result<Scalar> {
        self.require_square()?;
        Ok(self.square_determinant(limits))
    }

    fn square_determinant(&self, limits: &Limits) -> Scalar {
        let n = self.width();
        if n <= limits.cofactor_max_dim {
            debug!(n, "determinant by cofactor expansion");
            cofactor(self)
        } else {
            debug!(n, "determinant by elimination");
            elimination(self)
        }
    }

    /// Determinant by recursive cofactor expansion along the first row,
    /// limited to the default [`Limits::cofactor_max_dim`].
    ///
    /// # Errors
    ///
    /// See [`Matrix::cofactor_determinant_with`].
    pub fn cofactor_determinant(&self) -> Result<Scalar> {
        self.cofactor_determinant_with(&Limits::default())
    }

    /// Determinant by cofactor expansion for matrices no larger than
    /// `limits.cofactor_max_dim`.
    ///
    /// The cost grows factorially with the dimension.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonsquareMatrix`] for non-square input and
    /// [`LinalgError::SizeLimitExceeded`] above the cofactor limit.
    pub fn cofactor_determinant_with(&self, limits: &Limits) -> Result<Scalar> {
        self.require_square()?;
        limits.check_cofactor_dim(self.width())?;
        Ok(cofactor(self))
    }

    /// Determinant by Gaussian elimination, cubic in the dimension.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonsquareMatrix`] for non-square input.
    pub fn elimination_determinant(&self) -> Result<Scalar> {
        self.require_square()?;
        Ok(elimination(self))
    }

    /// Computes the inverse.
    ///
    /// Returns `Ok(None)` for a singular matrix: singularity is a result,
    /// not a failure.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonsquareMatrix`] for non-square input.
    pub fn inverse(&self) -> Result<Option<Matrix>> {
        self.require_square()?;
        let n = self.width();
        let identity = Matrix::identity(n);

        // RREF of [A | I] is [I | A^-1] exactly when A is invertible
        let reduced = self.augment(&identity)?.rref();
        let (left, right) = reduced.split_columns(n);
        if left != identity {
            debug!(n, "matrix is singular, no inverse");
            return Ok(None);
        }
        Ok(Some(right))
    }

    /// Sum of the diagonal entries.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonsquareMatrix`] for non-square input.
    pub fn trace(&self) -> Result<Scalar> {
        self.require_square()?;
        Ok((0..self.width()).map(|i| &self[(i, i)]).sum())
    }

    /// Transpose of the cofactor matrix, so that `A * adj(A) = det(A) * I`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonsquareMatrix`] for non-square input.
    pub fn adjugate(&self) -> Result<Matrix> {
        self.require_square()?;
        let n = self.width();
        if n == 1 {
            return Ok(Matrix::identity(1));
        }
        let limits = Limits::default();
        // adj[r][c] = (-1)^(r + c) * det(A without row c and column r)
        let columns = (0..n)
            .map(|c| {
                (0..n)
                    .map(|r| {
                        let minor = self.subsquare(r, c).square_determinant(&limits);
                        if (r + c) % 2 == 0 {
                            minor
                        } else {
                            -minor
                        }
                    })
                    .collect()
            })
            .collect();
        Matrix::new(columns)
    }
}

fn cofactor(m: &Matrix) -> Scalar {
    match m.width() {
        0 => Scalar::one(),
        1 => m[(0, 0)].clone(),
        2 => &m[(0, 0)] * &m[(1, 1)] - &m[(0, 1)] * &m[(1, 0)],
        n => (0..n)
            .filter(|&col| !m[(0, col)].is_zero())
            .map(|col| {
                let term = &m[(0, col)] * &cofactor(&m.subsquare(col, 0));
                if col % 2 == 0 {
                    term
                } else {
                    -term
                }
            })
            .sum(),
    }
}

fn elimination(m: &Matrix) -> Scalar {
    let n = m.width();
    let mut work = RowReducer::new(m);
    let mut det = Scalar::one();

    for col in 0..n {
        let Some(pivot_row) = (col..n).find(|&r| !work.entry(r, col).is_zero()) else {
            return Scalar::zero();
        };
        if pivot_row != col {
            work.swap(col, pivot_row);
            det = -det;
        }

        let pivot = work.entry(col, col).clone();
        if let Ok(inv) = pivot.recip() {
            work.scale_row(col, &inv);
        }
        det = det * pivot;

        for row in col + 1..n {
            work.eliminate(row, col, col);
        }
    }

    det
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;
    use exacta_core::Shape;

    fn m(columns: &[&[i64]]) -> Matrix {
        Matrix::new(columns.iter().map(|c| Vector::from_ints(c)).collect()).unwrap()
    }

    fn q(n: i64, d: i64) -> Scalar {
        Scalar::new(n, d).unwrap()
    }

    #[test]
    fn test_det_2x2() {
        let a = m(&[&[1, 2], &[3, 4]]);
        assert_eq!(a.determinant().unwrap(), Scalar::from(-2));
        assert_eq!(a.elimination_determinant().unwrap(), Scalar::from(-2));
    }

    #[test]
    fn test_det_3x3() {
        // rows [[2, 0, 1], [1, 3, 2], [1, 1, 1]]
        let a = m(&[&[2, 1, 1], &[0, 3, 1], &[1, 2, 1]]);
        // 2(3 - 2) - 0 + 1(1 - 3) = 0
        assert_eq!(a.cofactor_determinant().unwrap(), Scalar::from(0));
        assert_eq!(a.elimination_determinant().unwrap(), Scalar::from(0));

        // rows [[6, 1, 1], [4, -2, 5], [2, 8, 7]]
        let b = m(&[&[6, 4, 2], &[1, -2, 8], &[1, 5, 7]]);
        assert_eq!(b.cofactor_determinant().unwrap(), Scalar::from(-306));
        assert_eq!(b.elimination_determinant().unwrap(), Scalar::from(-306));
    }

    #[test]
    fn test_det_needs_pivot_swap() {
        // rows [[0, 1], [1, 0]]
        let a = m(&[&[0, 1], &[1, 0]]);
        assert_eq!(a.elimination_determinant().unwrap(), Scalar::from(-1));
    }

    #[test]
    fn test_det_identity() {
        for k in 1..=5 {
            assert_eq!(Matrix::identity(k).determinant().unwrap(), Scalar::one());
        }
        assert_eq!(Matrix::identity(8).determinant().unwrap(), Scalar::one());
    }

    #[test]
    fn test_det_strategy_cut_over() {
        let a = m(&[&[2, 0, 0], &[0, 3, 0], &[0, 0, 4]]);
        let elimination_only = Limits {
            cofactor_max_dim: 0,
            ..Limits::default()
        };
        assert_eq!(a.determinant_with(&elimination_only).unwrap(), Scalar::from(24));
        assert_eq!(a.determinant().unwrap(), Scalar::from(24));
    }

    #[test]
    fn test_cofactor_is_size_gated() {
        let big = Matrix::identity(9);
        assert!(matches!(
            big.cofactor_determinant(),
            Err(LinalgError::SizeLimitExceeded(_))
        ));
        // the general entry point switches to elimination instead
        assert_eq!(big.determinant().unwrap(), Scalar::one());

        let six = Matrix::identity(6);
        let wider = Limits {
            cofactor_max_dim: 6,
            ..Limits::default()
        };
        assert_eq!(six.cofactor_determinant_with(&wider).unwrap(), Scalar::one());
        assert!(six.cofactor_determinant().is_err());
    }

    #[test]
    fn test_nonsquare() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6]]);
        let err = Err(LinalgError::NonsquareMatrix(Shape::new(3, 2)));
        assert_eq!(a.determinant(), err.clone());
        assert_eq!(a.trace(), err.clone());
        assert_eq!(a.inverse().map(|_| Scalar::zero()), err);
        assert!(a.adjugate().is_err());
    }

    #[test]
    fn test_inverse() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let inv = a.inverse().unwrap().unwrap();
        let expected = Matrix::new(vec![
            Vector::new(vec![Scalar::from(-2), Scalar::from(1)]),
            Vector::new(vec![q(3, 2), q(-1, 2)]),
        ])
        .unwrap();
        assert_eq!(inv, expected);
        assert_eq!(a.try_mul(&inv).unwrap(), Matrix::identity(2));
    }

    #[test]
    fn test_inverse_singular() {
        let a = m(&[&[1, 2], &[2, 4]]);
        assert_eq!(a.inverse(), Ok(None));
    }

    #[test]
    fn test_trace() {
        assert_eq!(Matrix::identity(3).trace().unwrap(), Scalar::from(3));
        let a = m(&[&[1, 2], &[3, 4]]);
        assert_eq!(a.trace().unwrap(), Scalar::from(5));
    }

    #[test]
    fn test_adjugate() {
        // rows [[1, 3], [2, 4]] -> adj rows [[4, -3], [-2, 1]]
        let a = m(&[&[1, 2], &[3, 4]]);
        assert_eq!(a.adjugate().unwrap(), m(&[&[4, -2], &[-3, 1]]));

        let b = m(&[&[6, 4, 2], &[1, -2, 8], &[1, 5, 7]]);
        let det = b.determinant().unwrap();
        let product = b.try_mul(&b.adjugate().unwrap()).unwrap();
        assert_eq!(product, Matrix::identity(3).scale(&det));
    }
}
