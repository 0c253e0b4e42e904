//! Exact rational scalars.
//!
//! A [`Scalar`] is always stored in lowest terms with a positive
//! denominator; zero is `0/1`. Every operation returns a fresh value.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};

use crate::error::{excerpt, LinalgError, Result};

/// An exact rational number.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Scalar(RBig);

impl Scalar {
    /// Creates a scalar from a numerator and denominator, reducing it.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: impl Into<IBig>, denominator: impl Into<IBig>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }
        let numerator = if DashuSigned::is_negative(&denominator) {
            -numerator
        } else {
            numerator
        };
        Ok(Self(RBig::from_parts(numerator, denominator.unsigned_abs())))
    }

    /// Creates an integral scalar (denominator 1).
    #[must_use]
    pub fn integer(n: impl Into<IBig>) -> Self {
        Self(RBig::from(n.into()))
    }

    /// Creates the scalar `numerator / denominator` from two scalars by
    /// cross-multiplying their parts.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] if `denominator` is zero.
    pub fn from_ratio(numerator: &Scalar, denominator: &Scalar) -> Result<Self> {
        Self::new(
            numerator.numerator() * denominator.denominator(),
            numerator.denominator() * denominator.numerator(),
        )
    }

    /// Returns the numerator. Carries the sign.
    #[must_use]
    pub fn numerator(&self) -> &IBig {
        self.0.numerator()
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> IBig {
        IBig::from(self.0.denominator().clone())
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] if the scalar is zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(Self(self.0.clone().inv()))
    }

    /// Divides `self` by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Scalar) -> Result<Self> {
        Ok(self * &rhs.recip()?)
    }

    /// Raises numerator and denominator to the `exp`-th power.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Raises to a signed power; negative exponents invert first.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DivisionByZero`] for zero to a negative power.
    pub fn powi(&self, exp: i32) -> Result<Self> {
        if exp < 0 {
            Ok(self.recip()?.pow(exp.unsigned_abs()))
        } else {
            Ok(self.pow(exp.unsigned_abs()))
        }
    }

    /// Returns the exact `n`-th root if one exists in the rationals.
    ///
    /// Negative values only have roots for odd `n`. `n = 0` has no root.
    #[must_use]
    pub fn exact_root(&self, n: u32) -> Option<Self> {
        if n == 0 {
            return None;
        }
        if self.is_negative() && n % 2 == 0 {
            return None;
        }
        let numer = exact_nth_root(&self.numerator().clone().unsigned_abs(), n)?;
        let denom = exact_nth_root(self.0.denominator(), n)?;
        let numer = if self.is_negative() {
            -IBig::from(numer)
        } else {
            IBig::from(numer)
        };
        Some(Self(RBig::from_parts(numer, denom)))
    }
}

/// Integer `n`-th root of `value`, or `None` if it is not a perfect power.
fn exact_nth_root(value: &UBig, n: u32) -> Option<UBig> {
    if value.is_zero() || value.is_one() || n == 1 {
        return Some(value.clone());
    }
    let mut lo = UBig::ONE;
    let mut hi = value.clone();
    while lo <= hi {
        let mid: UBig = (&lo + &hi) >> 1;
        match mid.pow(n as usize).cmp(value) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + UBig::ONE,
            Ordering::Greater => hi = mid - UBig::ONE,
        }
    }
    None
}

impl Zero for Scalar {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Scalar {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({self})")
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.0.denominator())
        }
    }
}

impl FromStr for Scalar {
    type Err = LinalgError;

    /// Parses `"n"` or `"n/d"`, the forms produced by `Display`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_part = |part: &str| {
            IBig::from_str_radix(part.trim(), 10)
                .map_err(|_| LinalgError::NotAnInteger(excerpt(s.trim())))
        };
        match s.split_once('/') {
            Some((numer, denom)) => Self::new(parse_part(numer)?, parse_part(denom)?),
            None => Ok(Self::integer(parse_part(s)?)),
        }
    }
}

// Arithmetic operations
impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Self;

    fn add(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 + &rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Self;

    fn sub(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 - &rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Self;

    fn mul(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 * &rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Self::Output {
        Scalar(-&self.0)
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl From<IBig> for Scalar {
    fn from(n: IBig) -> Self {
        Self::integer(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::integer(n)
    }
}
