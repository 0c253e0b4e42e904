//! # exacta-linalg
//!
//! Exact linear algebra over the rationals.
//!
//! This crate provides:
//! - Oriented vectors and column-stored matrices of [`exacta_core::Scalar`]
//! - Row echelon forms, rank, nullity and column independence
//! - Determinant, inverse, trace and adjugate of square matrices
//! - Row, column and null space bases, Gram-Schmidt orthogonalization
//! - Least-squares line fitting
//! - Spanning sets
//! - A guarded parser for matrix literals and a fixed-width renderer
//!
//! ## Algorithm Selection
//!
//! Thresholds live in [`Limits`]:
//! - Determinants up to 5x5: cofactor expansion; larger: elimination
//! - Products with at least 64 result entries: rayon, one task per column
//!
//! Values are immutable. Elimination works on a private row-major copy
//! owned by a single call, so shared vectors and matrices are never
//! modified.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod matrix;
pub mod parse;
pub mod span;
pub mod vector;

mod echelon;
mod reducer;
mod regression;
mod render;
mod spaces;
mod square;

pub use config::Limits;
pub use matrix::Matrix;
pub use parse::{parse_grid, parse_matrix, parse_matrix_with};
pub use span::Span;
pub use vector::{Orientation, Vector};
