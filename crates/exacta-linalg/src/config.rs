//! Size guards and algorithm thresholds.

use dashu::base::UnsignedAbs;
use dashu::integer::{IBig, UBig};

use exacta_core::{excerpt, LinalgError, Result};

/// Largest number of entries a parsed matrix may hold.
pub const MAX_ENTRIES: usize = 25;

/// Parsed entries must have a magnitude strictly below this bound.
pub const MAX_ENTRY_MAGNITUDE: u64 = 1 << 16;

/// Largest square dimension evaluated by cofactor expansion.
pub const COFACTOR_MAX_DIM: usize = 5;

/// Result-entry count at which matrix products run in parallel.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Configuration for input guards and algorithm selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total number of entries accepted by the parser.
    pub max_entries: usize,
    /// Exclusive upper bound on the magnitude of a parsed entry.
    pub max_entry_magnitude: u64,
    /// Square matrices up to this dimension use cofactor expansion for
    /// the determinant; larger ones use elimination.
    pub cofactor_max_dim: usize,
    /// Minimum number of result entries before a product is computed
    /// with rayon.
    pub parallel_threshold: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_entries: MAX_ENTRIES,
            max_entry_magnitude: MAX_ENTRY_MAGNITUDE,
            cofactor_max_dim: COFACTOR_MAX_DIM,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl Limits {
    /// Checks the entry-count ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeLimitExceeded`] if `count` exceeds
    /// `max_entries`.
    pub fn check_entry_count(&self, count: usize) -> Result<()> {
        if count > self.max_entries {
            return Err(LinalgError::SizeLimitExceeded(format!(
                "{count} entries exceed the limit of {}",
                self.max_entries
            )));
        }
        Ok(())
    }

    /// Checks the magnitude ceiling for a single entry.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeLimitExceeded`] if `|value|` is at least
    /// `max_entry_magnitude`.
    pub fn check_magnitude(&self, value: &IBig) -> Result<()> {
        if value.clone().unsigned_abs() >= UBig::from(self.max_entry_magnitude) {
            return Err(LinalgError::SizeLimitExceeded(format!(
                "entry magnitude must be below {}",
                self.max_entry_magnitude
            )));
        }
        Ok(())
    }

    /// Rejects a decimal digit string too long to be below
    /// `max_entry_magnitude`, without converting it.
    ///
    /// Passing this check does not make the value small enough; follow it
    /// with [`Limits::check_magnitude`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeLimitExceeded`] if `digits`, ignoring
    /// leading zeros, has more digits than `max_entry_magnitude`.
    pub fn check_digits(&self, digits: &str) -> Result<()> {
        let significant = digits.trim_start_matches('0').len();
        if significant > self.max_entry_magnitude.to_string().len() {
            return Err(LinalgError::SizeLimitExceeded(format!(
                "entry {} has {significant} digits, magnitude must be below {}",
                excerpt(digits),
                self.max_entry_magnitude
            )));
        }
        Ok(())
    }

    /// Checks that a square matrix is small enough for cofactor expansion.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SizeLimitExceeded`] if `dim` exceeds
    /// `cofactor_max_dim`.
    pub fn check_cofactor_dim(&self, dim: usize) -> Result<()> {
        if dim > self.cofactor_max_dim {
            return Err(LinalgError::SizeLimitExceeded(format!(
                "cofactor expansion of a {dim}x{dim} matrix exceeds the limit of {}",
                self.cofactor_max_dim
            )));
        }
        Ok(())
    }
}
