//! Least-squares line fitting.

use num_traits::One;
use tracing::debug;

use exacta_core::{LinalgError, Result, Scalar, Shape};

use crate::matrix::Matrix;
use crate::vector::Vector;

impl Matrix {
    /// Fits `y = slope * x + intercept` to 2-D points by least squares.
    ///
    /// Computes `(AᵀA)⁻¹Aᵀy` where `A` has a column of x-values and a
    /// column of ones. Returns `[slope, intercept]`, or `Ok(None)` when
    /// `AᵀA` is singular (every x equal).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] if `points` is empty or a
    /// point does not have exactly two entries.
    pub fn linear_regression(points: &[Vector]) -> Result<Option<Vector>> {
        if points.is_empty() {
            return Err(LinalgError::SizeMismatch {
                expected: Shape::new(1, 2),
                found: Shape::new(0, 2),
            });
        }
        if let Some(bad) = points.iter().find(|p| p.len() != 2) {
            return Err(LinalgError::SizeMismatch {
                expected: Shape::vector(2),
                found: Shape::vector(bad.len()),
            });
        }

        let xs: Vector = points.iter().map(|p| p[0].clone()).collect();
        let ones: Vector = points.iter().map(|_| Scalar::one()).collect();
        let ys: Vector = points.iter().map(|p| p[1].clone()).collect();

        let design = Matrix::new(vec![xs, ones])?;
        let target = Matrix::new(vec![ys])?;
        let design_t = design.transpose();

        let Some(normal_inv) = design_t.try_mul(&design)?.inverse()? else {
            debug!(points = points.len(), "regression is degenerate");
            return Ok(None);
        };
        let coefficients = normal_inv.try_mul(&design_t)?.try_mul(&target)?;
        Ok(coefficients.column(0).cloned())
    }
}
