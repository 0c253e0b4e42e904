//! Spanning sets.

use exacta_core::Result;

use crate::matrix::Matrix;
use crate::vector::Vector;

/// The set of all linear combinations of a list of vectors.
///
/// The vectors are kept as the columns of a [`Matrix`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    matrix: Matrix,
}

impl Span {
    /// Creates the span of a matrix's columns.
    #[must_use]
    pub fn from_matrix(matrix: Matrix) -> Self {
        Self { matrix }
    }

    /// Creates the span of a list of vectors.
    ///
    /// # Errors
    ///
    /// Returns [`exacta_core::LinalgError::SizeMismatch`] if the vectors
    /// differ in length.
    pub fn from_vectors(vectors: Vec<Vector>) -> Result<Self> {
        Ok(Self::from_matrix(Matrix::new(vectors)?))
    }

    /// Returns the generating vectors as a matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the generating vectors.
    #[must_use]
    pub fn vectors(&self) -> &[Vector] {
        self.matrix.columns()
    }

    /// Number of generating vectors.
    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.width()
    }

    /// Dimension of the spanned space.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.matrix.rank()
    }

    /// Returns a span over only the linearly independent vectors.
    ///
    /// The spanned space is unchanged and vectors keep their order.
    #[must_use]
    pub fn simplify(&self) -> Self {
        Self::from_matrix(self.matrix.columnspace())
    }
}

impl From<Matrix> for Span {
    fn from(matrix: Matrix) -> Self {
        Self::from_matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify() {
        let span = Span::from_vectors(vec![
            Vector::from_ints(&[1, 0, 1]),
            Vector::from_ints(&[2, 0, 2]),
            Vector::from_ints(&[0, 1, 0]),
            Vector::from_ints(&[1, 1, 1]),
        ])
        .unwrap();
        assert_eq!(span.size(), 4);
        assert_eq!(span.dimension(), 2);

        let simple = span.simplify();
        assert_eq!(simple.size(), 2);
        assert_eq!(
            simple.vectors(),
            &[Vector::from_ints(&[1, 0, 1]), Vector::from_ints(&[0, 1, 0])]
        );
        assert_eq!(simple.simplify(), simple);
    }

    #[test]
    fn test_from_vectors_rejects_ragged() {
        assert!(Span::from_vectors(vec![Vector::from_ints(&[1]), Vector::from_ints(&[1, 2])]).is_err());
    }
}
