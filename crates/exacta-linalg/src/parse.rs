//! Text input for matrices.
//!
//! Two formats are accepted:
//!
//! - the literal form `(1,2,3);(4,5,6)`: semicolon-separated column
//!   vectors of comma-separated integers, guarded by [`Limits`];
//! - the rendered grid produced by `Matrix`'s `Display`, read back by
//!   [`parse_grid`].

use dashu::integer::IBig;
use tracing::debug;

use exacta_core::{excerpt, LinalgError, Result, Scalar};

use crate::config::Limits;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Parses a matrix literal such as `(1,2);(3,4)` with the default limits.
///
/// Each parenthesized group is one column.
///
/// # Errors
///
/// See [`parse_matrix_with`].
pub fn parse_matrix(text: &str) -> Result<Matrix> {
    parse_matrix_with(text, &Limits::default())
}

/// Parses a matrix literal, enforcing `limits` before building anything.
///
/// Checks run in this order, and the first failure is returned:
/// malformed parentheses or an empty vector, non-integer entries, the
/// entry-count ceiling, entry magnitudes, then equal vector lengths.
/// Tokens are only converted to integers once their count and digit
/// length are known to be within bounds, and error messages quote at most
/// an excerpt of the input.
///
/// # Errors
///
/// Returns [`LinalgError::MalformedInput`], [`LinalgError::NotAnInteger`],
/// [`LinalgError::SizeLimitExceeded`] or [`LinalgError::SizeMismatch`].
pub fn parse_matrix_with(text: &str, limits: &Limits) -> Result<Matrix> {
    let groups = text
        .split(';')
        .map(split_group)
        .collect::<Result<Vec<_>>>()?;

    let tokens = groups
        .iter()
        .map(|group| group.iter().map(|t| IntegerToken::lex(t)).collect())
        .collect::<Result<Vec<Vec<IntegerToken<'_>>>>>()?;

    limits.check_entry_count(tokens.iter().map(Vec::len).sum())?;

    let columns = tokens
        .iter()
        .map(|column| {
            column
                .iter()
                .map(|token| token.value(limits).map(Scalar::integer))
                .collect::<Result<Vector>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let matrix = Matrix::new(columns)?;
    debug!(shape = %matrix.shape(), "parsed matrix literal");
    Ok(matrix)
}

/// Splits `(a,b,c)` into its comma-separated tokens.
fn split_group(group: &str) -> Result<Vec<&str>> {
    let group = group.trim();
    let inner = group
        .strip_prefix('(')
        .and_then(|g| g.strip_suffix(')'))
        .ok_or_else(|| {
            LinalgError::MalformedInput(format!("unbalanced vector {:?}", excerpt(group)))
        })?;
    if inner.contains(['(', ')']) {
        return Err(LinalgError::MalformedInput(format!(
            "nested parentheses in {:?}",
            excerpt(group)
        )));
    }
    if inner.trim().is_empty() {
        return Err(LinalgError::MalformedInput(format!(
            "empty vector {:?}",
            excerpt(group)
        )));
    }
    Ok(inner.split(',').collect())
}

/// A token known to be an optionally signed run of decimal digits.
struct IntegerToken<'a> {
    negative: bool,
    digits: &'a str,
}

impl<'a> IntegerToken<'a> {
    fn lex(token: &'a str) -> Result<Self> {
        let token = token.trim();
        let (negative, digits) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token.strip_prefix('+').unwrap_or(token)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LinalgError::NotAnInteger(excerpt(token)));
        }
        Ok(Self { negative, digits })
    }

    fn value(&self, limits: &Limits) -> Result<IBig> {
        limits.check_digits(self.digits)?;
        let significant = match self.digits.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };
        let magnitude = IBig::from_str_radix(significant, 10)
            .map_err(|_| LinalgError::NotAnInteger(excerpt(self.digits)))?;
        let value = if self.negative { -magnitude } else { magnitude };
        limits.check_magnitude(&value)?;
        Ok(value)
    }
}

/// Parses the grid printed by `Matrix`'s `Display` back into a matrix.
///
/// Every line must be wrapped in `|`; entries are whitespace-separated
/// scalars (`n` or `n/d`). Empty text gives the empty matrix.
///
/// # Errors
///
/// Returns [`LinalgError::MalformedInput`] for a line not wrapped in `|`,
/// the scalar parse error for a bad entry, and
/// [`LinalgError::SizeMismatch`] for rows of different lengths.
pub fn parse_grid(text: &str) -> Result<Matrix> {
    let rows = text
        .lines()
        .map(|line| -> Result<Vec<Scalar>> {
            let line = line.trim();
            let inner = line
                .strip_prefix('|')
                .and_then(|l| l.strip_suffix('|'))
                .ok_or_else(|| {
                    LinalgError::MalformedInput(format!("unframed row {:?}", excerpt(line)))
                })?;
            inner.split_whitespace().map(str::parse::<Scalar>).collect()
        })
        .collect::<Result<Vec<Vec<Scalar>>>>()?;
    Matrix::from_rows(rows)
}
