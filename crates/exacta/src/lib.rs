//! # Exacta
//!
//! Exact-rational linear algebra written in Rust.
//!
//! Every entry is a rational number kept in lowest terms, so eliminations,
//! determinants and inverses are exact and reproducible.
//!
//! ## Features
//!
//! - **Exact Scalars**: arbitrary precision rationals backed by `dashu`
//! - **Matrices**: echelon forms, rank, determinant, inverse, adjugate
//! - **Subspaces**: row, column and null space bases, Gram-Schmidt
//! - **Regression**: exact least-squares line fitting
//! - **Text Boundary**: guarded literal parser and fixed-width renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let a = parse_matrix("(1,2);(3,4)").unwrap();
//! assert_eq!(a.determinant().unwrap(), Scalar::from(-2));
//!
//! let inv = a.inverse().unwrap().expect("invertible");
//! assert_eq!(a.try_mul(&inv).unwrap(), Matrix::identity(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_core as core;
pub use exacta_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exacta_core::{LinalgError, Result, Scalar, Shape};
    pub use exacta_linalg::{
        parse_grid, parse_matrix, parse_matrix_with, Limits, Matrix, Orientation, Span, Vector,
    };
}
