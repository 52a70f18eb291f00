//! Routines for printing matrices with aligned columns.

use std::fmt::{Display, Formatter};

use crate::{domains::Ring, tensors::matrix::Matrix};

/// Print a matrix with right-aligned columns, one row per line:
///
/// ```text
/// [   1 1/2 ]
/// [ 3/2   2 ]
/// ```
///
/// Entries are rendered with [Ring::format_element], so rings with custom
/// element formatting keep it here.
pub struct MatrixPrinter<'a, F: Ring> {
    pub matrix: &'a Matrix<F>,
}

impl<'a, F: Ring> MatrixPrinter<'a, F> {
    pub fn new(matrix: &'a Matrix<F>) -> MatrixPrinter<'a, F> {
        MatrixPrinter { matrix }
    }
}

impl<F: Ring> Display for MatrixPrinter<'_, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let field = self.matrix.field();
        let entries: Vec<String> = self
            .matrix
            .iter()
            .map(|e| field.format_element(e))
            .collect();
        let width = entries.iter().map(|e| e.len()).max().unwrap_or(0);

        let ncols = self.matrix.ncols() as usize;
        for (i, row) in entries.chunks(ncols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str("[ ")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", e, width = width)?;
            }
            f.write_str(" ]")?;
        }
        Ok(())
    }
}
