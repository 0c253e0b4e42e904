//! Fixed-length vectors of exact scalars.
//!
//! A [`Vector`] is immutable: every operation, including
//! [`Vector::transpose`], returns a new value, so one vector can safely
//! be shared between several matrices or threads.

use std::ops::{Index, Mul, Neg};

use num_traits::Zero;

use exacta_core::{LinalgError, Result, Scalar, Shape};

/// Whether a vector is laid out vertically or horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Vertical (the default).
    #[default]
    Column,
    /// Horizontal, i.e. a transposed column.
    Row,
}

impl Orientation {
    /// Returns the other orientation.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Column => Self::Row,
            Self::Row => Self::Column,
        }
    }
}

/// An ordered sequence of scalars with an orientation.
///
/// Two vectors are equal only if they share orientation, length and
/// entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    entries: Vec<Scalar>,
    orientation: Orientation,
}

impl Vector {
    /// Creates a column vector.
    #[must_use]
    pub fn new(entries: Vec<Scalar>) -> Self {
        Self::with_orientation(entries, Orientation::Column)
    }

    /// Creates a row vector.
    #[must_use]
    pub fn row(entries: Vec<Scalar>) -> Self {
        Self::with_orientation(entries, Orientation::Row)
    }

    /// Creates a vector with the given orientation.
    #[must_use]
    pub fn with_orientation(entries: Vec<Scalar>, orientation: Orientation) -> Self {
        Self {
            entries,
            orientation,
        }
    }

    /// Creates a column vector from integers.
    #[must_use]
    pub fn from_ints(values: &[i64]) -> Self {
        Self::new(values.iter().map(|&v| Scalar::from(v)).collect())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the vector has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Scalar> {
        self.entries.get(index)
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn entries(&self) -> &[Scalar] {
        &self.entries
    }

    /// Consumes the vector, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<Scalar> {
        self.entries
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.entries.iter()
    }

    /// Returns the orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns true for row (transposed) vectors.
    #[must_use]
    pub fn is_transposed(&self) -> bool {
        self.orientation == Orientation::Row
    }

    /// Returns a copy with the orientation flipped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::with_orientation(self.entries.clone(), self.orientation.flipped())
    }

    /// Returns this vector laid out as a column.
    #[must_use]
    pub fn into_column(self) -> Self {
        Self::with_orientation(self.entries, Orientation::Column)
    }

    /// Sum of elementwise products.
    ///
    /// Orientation does not affect the result.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<Scalar> {
        self.check_len(other)?;
        Ok(self.dot_unchecked(other))
    }

    /// Dot product over the shared prefix; callers guarantee equal lengths.
    pub(crate) fn dot_unchecked(&self, other: &Vector) -> Scalar {
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }

    /// Multiplies every entry by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: &Scalar) -> Self {
        self.map(|x| x * scalar)
    }

    /// Divides every entry by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] if `scalar` is zero.
    pub fn divide(&self, scalar: &Scalar) -> Result<Self> {
        Ok(self.scale(&scalar.recip()?))
    }

    /// Elementwise sum.
    ///
    /// Lengths are checked before orientations.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeMismatch`] if the lengths differ and
    /// [`LinalgError::OrientationMismatch`] if the orientations differ.
    pub fn try_add(&self, other: &Vector) -> Result<Self> {
        self.check_compatible(other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::try_add`].
    pub fn try_sub(&self, other: &Vector) -> Result<Self> {
        self.check_compatible(other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// `self - k * other` over equal-length vectors, keeping `self`'s
    /// orientation.
    pub(crate) fn sub_scaled(&self, k: &Scalar, other: &Vector) -> Self {
        self.zip_with(other, |a, b| a - &(b * k))
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero_vector(&self) -> bool {
        self.iter().all(|x| x.is_zero())
    }

    /// Rescales by the largest denominator present.
    ///
    /// Used to present Gram-Schmidt output without small fractions.
    #[must_use]
    pub fn factor(&self) -> Self {
        match self.iter().map(Scalar::denominator).max() {
            Some(largest) => self.scale(&Scalar::integer(largest)),
            None => self.clone(),
        }
    }

    /// Sum of `|x|^p` over all entries.
    #[must_use]
    pub fn norm_raw(&self, p: u32) -> Scalar {
        self.iter().map(|x| x.abs().pow(p)).sum()
    }

    /// The `p`-norm, `(sum |x|^p)^(1/p)`.
    ///
    /// Returns `None` when the result is irrational or `p` is zero.
    #[must_use]
    pub fn norm(&self, p: u32) -> Option<Scalar> {
        self.norm_raw(p).exact_root(p)
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::SizeMismatch {
                expected: Shape::vector(self.len()),
                found: Shape::vector(other.len()),
            });
        }
        Ok(())
    }

    fn check_compatible(&self, other: &Vector) -> Result<()> {
        self.check_len(other)?;
        if self.orientation != other.orientation {
            return Err(LinalgError::OrientationMismatch);
        }
        Ok(())
    }

    fn map(&self, f: impl Fn(&Scalar) -> Scalar) -> Self {
        Self::with_orientation(self.iter().map(f).collect(), self.orientation)
    }

    fn zip_with(&self, other: &Vector, f: impl Fn(&Scalar, &Scalar) -> Scalar) -> Self {
        Self::with_orientation(
            self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
            self.orientation,
        )
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Scalar> for Vector {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Mul<&Scalar> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: &Scalar) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<&Vector> for &Scalar {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Self::Output {
        rhs.scale(self)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
