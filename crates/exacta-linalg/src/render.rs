//! Fixed-width text rendering.
//!
//! Every entry is centered in a field as wide as the widest entry, and
//! each grid line is wrapped in `| … |`. When the padding is odd the
//! extra space goes on the right, so `-1` in a 3-wide field is `-1 `.
//! [`crate::parse::parse_grid`] reads this format back.

use std::fmt;

use exacta_core::Scalar;

use crate::matrix::Matrix;
use crate::span::Span;
use crate::vector::Vector;

const SPAN_LABEL: &str = "span ";

fn field_width<'a>(entries: impl IntoIterator<Item = &'a Scalar>) -> usize {
    entries
        .into_iter()
        .map(|x| x.to_string().len())
        .max()
        .unwrap_or(0)
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transposed() {
            write!(f, "[")?;
            for x in self {
                write!(f, " {x}")?;
            }
            return write!(f, " ]");
        }

        let w = field_width(self);
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "| {:^w$} |", x.to_string())?;
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = field_width(self.columns().iter().flat_map(Vector::iter));
        for r in 0..self.height() {
            if self.width() == 0 {
                break;
            }
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "| ")?;
            for c in 0..self.width() {
                write!(f, " {:^w$} ", self[(r, c)].to_string())?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.matrix().to_string();
        for (i, line) in rendered.lines().enumerate() {
            if i == 0 {
                write!(f, "{SPAN_LABEL}{line}")?;
            } else {
                write!(f, "\n{:w$}{line}", "", w = SPAN_LABEL.len())?;
            }
        }
        Ok(())
    }
}
