//! # exacta-core
//!
//! Exact rational scalars and the error vocabulary shared by exacta.
//!
//! This crate wraps `dashu` to provide:
//! - Exact rationals (`Scalar`) kept in lowest terms
//! - The failure taxonomy (`LinalgError`) returned by every fallible
//!   operation in the workspace
//!
//! ## Numeric Notes
//!
//! - Numerators and denominators are arbitrary precision, so no
//!   operation overflows
//! - Division is the only partial operation and reports
//!   `LinalgError::DivisionByZero` instead of panicking

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod scalar;

#[cfg(test)]
mod proptests;

pub use error::{excerpt, LinalgError, Result, Shape};
pub use scalar::Scalar;
