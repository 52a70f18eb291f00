//! Dense matrices over a generic ring, with a cofactor-expansion
//! determinant and an adjoint-based inverse that stays exact over exact
//! rings.

use std::{
    fmt::Display,
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice::Chunks,
};

use crate::{
    domains::{
        integer::Integer,
        numeric::{NumericTower, NumericValue},
        Field, Ring,
    },
    printer::MatrixPrinter,
};

/// Errors that can occur when performing matrix operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MatrixError {
    /// The input does not describe a rectangular matrix, or an index is out
    /// of range.
    InvalidShape,
    /// The dimensions of the operands do not match.
    DimensionMismatch,
    NotSquare,
    Singular,
    /// The minor of a 1x1 matrix does not exist.
    UndefinedMinor,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::InvalidShape => write!(f, "The shape of the matrix is not valid"),
            MatrixError::DimensionMismatch => {
                write!(f, "The dimensions of the matrices are not compatible")
            }
            MatrixError::NotSquare => write!(f, "The matrix is not square"),
            MatrixError::Singular => write!(f, "The matrix is singular"),
            MatrixError::UndefinedMinor => {
                write!(f, "The minor of a 1x1 matrix is not defined")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// A dense matrix with entries in the ring `F`, stored in row-major order.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) nrows: u32,
    pub(crate) ncols: u32,
    pub(crate) field: F,
}

impl<F: Ring> Matrix<F> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: u32, ncols: u32, field: F) -> Matrix<F> {
        Matrix {
            data: (0..nrows as usize * ncols as usize)
                .map(|_| field.zero())
                .collect(),
            nrows,
            ncols,
            field,
        }
    }

    /// Create a new square matrix with ones on the main diagonal and zeroes elsewhere.
    pub fn identity(nrows: u32, field: F) -> Matrix<F> {
        Matrix {
            data: (0..nrows as usize * nrows as usize)
                .map(|i| {
                    if i % nrows as usize == i / nrows as usize {
                        field.one()
                    } else {
                        field.zero()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
            field,
        }
    }

    /// Create a new matrix with the scalars `diag` on the main diagonal and zeroes elsewhere.
    pub fn eye(diag: &[F::Element], field: F) -> Matrix<F> {
        let mut m = Matrix::new(diag.len() as u32, diag.len() as u32, field);
        for (i, e) in diag.iter().enumerate() {
            m[(i as u32, i as u32)] = e.clone();
        }
        m
    }

    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(
        data: Vec<F::Element>,
        nrows: u32,
        ncols: u32,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        if data.len() == nrows as usize * ncols as usize {
            Ok(Matrix {
                data,
                nrows,
                ncols,
                field,
            })
        } else {
            Err(MatrixError::InvalidShape)
        }
    }

    /// Create a new matrix from a 2-dimensional vector of scalars. All rows
    /// must have the same length.
    pub fn from_nested_vec(
        matrix: Vec<Vec<F::Element>>,
        field: F,
    ) -> Result<Matrix<F>, MatrixError> {
        let nrows = matrix.len();
        let ncols = matrix.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(nrows * ncols);
        for r in matrix {
            if r.len() != ncols {
                return Err(MatrixError::InvalidShape);
            }
            data.extend(r);
        }

        Ok(Matrix {
            data,
            nrows: nrows as u32,
            ncols: ncols as u32,
            field,
        })
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> u32 {
        self.nrows
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> u32 {
        self.ncols
    }

    /// Return the field of the matrix entries.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Return an iterator over the entries of the matrix in row-major
    /// order.
    pub fn iter(&self) -> std::slice::Iter<'_, F::Element> {
        self.data.iter()
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, F::Element> {
        self.data.chunks(self.ncols as usize)
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|e| F::is_zero(e))
    }

    /// Return true iff every entry off the main diagonal is zero.
    pub fn is_diagonal(&self) -> bool {
        self.data
            .iter()
            .enumerate()
            .all(|(i, e)| i as u32 % self.ncols == i as u32 / self.ncols || F::is_zero(e))
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return a copy of the `r`th row.
    pub fn row(&self, r: u32) -> Result<Vec<F::Element>, MatrixError> {
        if r >= self.nrows {
            return Err(MatrixError::InvalidShape);
        }
        Ok(self[r].to_vec())
    }

    /// Return a copy of the `c`th column.
    pub fn col(&self, c: u32) -> Result<Vec<F::Element>, MatrixError> {
        if c >= self.ncols {
            return Err(MatrixError::InvalidShape);
        }
        Ok((0..self.nrows).map(|i| self[(i, c)].clone()).collect())
    }

    /// Remove the `r`th row and return its entries.
    pub fn delete_row(&mut self, r: u32) -> Result<Vec<F::Element>, MatrixError> {
        if r >= self.nrows {
            return Err(MatrixError::InvalidShape);
        }
        let start = r as usize * self.ncols as usize;
        let removed = self.data.drain(start..start + self.ncols as usize).collect();
        self.nrows -= 1;
        Ok(removed)
    }

    /// Remove the `c`th column and return its entries.
    pub fn delete_col(&mut self, c: u32) -> Result<Vec<F::Element>, MatrixError> {
        if c >= self.ncols {
            return Err(MatrixError::InvalidShape);
        }
        let mut removed = Vec::with_capacity(self.nrows as usize);
        for i in (0..self.nrows).rev() {
            removed.push(self.data.remove((i * self.ncols + c) as usize));
        }
        removed.reverse();
        self.ncols -= 1;
        Ok(removed)
    }

    /// Insert a row before the `r`th row; `r` may equal the number of rows
    /// to append.
    pub fn insert_row(&mut self, r: u32, row: Vec<F::Element>) -> Result<(), MatrixError> {
        if r > self.nrows {
            return Err(MatrixError::InvalidShape);
        }
        if self.nrows == 0 {
            self.ncols = row.len() as u32;
        } else if row.len() != self.ncols as usize {
            return Err(MatrixError::DimensionMismatch);
        }

        let start = r as usize * self.ncols as usize;
        self.data.splice(start..start, row);
        self.nrows += 1;
        Ok(())
    }

    /// Insert a column before the `c`th column; `c` may equal the number of
    /// columns to append.
    pub fn insert_col(&mut self, c: u32, col: Vec<F::Element>) -> Result<(), MatrixError> {
        if c > self.ncols {
            return Err(MatrixError::InvalidShape);
        }
        if self.ncols == 0 && self.nrows == 0 {
            self.nrows = col.len() as u32;
        } else if col.len() != self.nrows as usize {
            return Err(MatrixError::DimensionMismatch);
        }

        for (i, e) in col.into_iter().enumerate().rev() {
            self.data.insert(i * self.ncols as usize + c as usize, e);
        }
        self.ncols += 1;
        Ok(())
    }

    pub fn append_row(&mut self, row: Vec<F::Element>) -> Result<(), MatrixError> {
        self.insert_row(self.nrows, row)
    }

    pub fn append_col(&mut self, col: Vec<F::Element>) -> Result<(), MatrixError> {
        self.insert_col(self.ncols, col)
    }

    pub fn swap_rows(&mut self, r1: u32, r2: u32) -> Result<(), MatrixError> {
        if r1 >= self.nrows || r2 >= self.nrows {
            return Err(MatrixError::InvalidShape);
        }
        for j in 0..self.ncols {
            self.data.swap(
                (r1 * self.ncols + j) as usize,
                (r2 * self.ncols + j) as usize,
            );
        }
        Ok(())
    }

    pub fn swap_cols(&mut self, c1: u32, c2: u32) -> Result<(), MatrixError> {
        if c1 >= self.ncols || c2 >= self.ncols {
            return Err(MatrixError::InvalidShape);
        }
        for i in 0..self.nrows {
            self.data.swap(
                (i * self.ncols + c1) as usize,
                (i * self.ncols + c2) as usize,
            );
        }
        Ok(())
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<F> {
        let mut m = Matrix::new(self.ncols, self.nrows, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                m[(j, i)] = self[(i, j)].clone();
            }
        }
        m
    }

    /// Transpose the matrix in-place.
    pub fn into_transposed(mut self) -> Matrix<F> {
        if self.nrows == self.ncols {
            for i in 0..self.nrows {
                for j in 0..i {
                    self.data
                        .swap((i * self.ncols + j) as usize, (j * self.ncols + i) as usize);
                }
            }

            (self.nrows, self.ncols) = (self.ncols, self.nrows);
            self
        } else {
            let mut m = Matrix::new(self.ncols, self.nrows, self.field.clone());
            for i in 0..self.nrows {
                for j in 0..self.ncols {
                    m[(j, i)] = std::mem::replace(&mut self[(i, j)], m.field.zero());
                }
            }
            m
        }
    }

    /// Multiply the scalar `e` into each entry of the matrix.
    pub fn mul_scalar(&self, e: &F::Element) -> Matrix<F> {
        Matrix {
            data: self.data.iter().map(|ee| self.field.mul(ee, e)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        }
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Matrix<G> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field,
        }
    }

    /// Add two matrices of the same dimensions.
    pub fn try_add(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.add(a, b);
        }
        Ok(m)
    }

    /// Subtract two matrices of the same dimensions.
    pub fn try_sub(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.sub(a, b);
        }
        Ok(m)
    }

    /// Multiply two matrices; the number of columns of `self` must equal
    /// the number of rows of `rhs`.
    pub fn try_mul(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut m = Matrix::new(self.nrows, rhs.ncols, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let sum = &mut m[(i, j)];
                for k in 0..self.ncols {
                    self.field.add_mul_assign(sum, &self[(i, k)], &rhs[(k, j)]);
                }
            }
        }
        Ok(m)
    }

    /// The entrywise product of two matrices of the same dimensions.
    pub fn hadamard(&self, rhs: &Matrix<F>) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for (c, (a, b)) in m.data.iter_mut().zip(self.data.iter().zip(rhs.data.iter())) {
            *c = self.field.mul(a, b);
        }
        Ok(m)
    }

    /// Compute the determinant by cofactor expansion along the first row.
    pub fn det(&self) -> Result<F::Element, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare);
        }

        match self.nrows {
            0 => Err(MatrixError::Singular),
            1 => Ok(self.data[0].clone()),
            2 => Ok(self.field.sub(
                &self.field.mul(&self[(0, 0)], &self[(1, 1)]),
                &self.field.mul(&self[(0, 1)], &self[(1, 0)]),
            )),
            _ => {
                let mut det = self.field.zero();
                for j in 0..self.ncols {
                    let mut sub = self.clone();
                    sub.delete_row(0)?;
                    sub.delete_col(j)?;
                    let d = sub.det()?;

                    if j % 2 == 0 {
                        self.field.add_mul_assign(&mut det, &self[(0, j)], &d);
                    } else {
                        self.field.sub_mul_assign(&mut det, &self[(0, j)], &d);
                    }
                }
                Ok(det)
            }
        }
    }

    /// The determinant of the submatrix obtained by deleting row `r` and
    /// column `c`. The minor of a 1x1 matrix does not exist.
    pub fn minor(&self, r: u32, c: u32) -> Result<F::Element, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare);
        }
        if self.nrows <= 1 {
            return Err(MatrixError::UndefinedMinor);
        }
        if r >= self.nrows || c >= self.ncols {
            return Err(MatrixError::InvalidShape);
        }

        let mut sub = self.clone();
        sub.delete_row(r)?;
        sub.delete_col(c)?;
        sub.det()
    }

    /// The signed minor `(-1)^(r+c) * minor(r, c)`.
    pub fn cofactor(&self, r: u32, c: u32) -> Result<F::Element, MatrixError> {
        let m = self.minor(r, c)?;
        if (r + c) % 2 == 0 {
            Ok(m)
        } else {
            Ok(self.field.neg(&m))
        }
    }

    /// The matrix of cofactors.
    pub fn cofactor_matrix(&self) -> Result<Matrix<F>, MatrixError> {
        let mut m = Matrix::new(self.nrows, self.ncols, self.field.clone());
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                m[(i, j)] = self.cofactor(i, j)?;
            }
        }
        Ok(m)
    }

    /// The adjoint: the transpose of the cofactor matrix.
    pub fn adjoint(&self) -> Result<Matrix<F>, MatrixError> {
        Ok(self.cofactor_matrix()?.into_transposed())
    }
}

impl<F: Field> Matrix<F> {
    /// Compute the inverse as the adjoint divided by the determinant.
    /// Returns `MatrixError::Singular` when the determinant is zero. As the
    /// adjoint is built from minors, a 1x1 matrix cannot be inverted this
    /// way and yields `MatrixError::UndefinedMinor`.
    pub fn inv(&self) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare);
        }

        let d = self.det()?;
        if F::is_zero(&d) {
            return Err(MatrixError::Singular);
        }

        let adj = self.adjoint()?;
        Ok(adj.mul_scalar(&self.field.inv(&d)))
    }

    pub fn is_invertible(&self) -> bool {
        self.is_square() && self.det().map(|d| !F::is_zero(&d)).unwrap_or(false)
    }

    /// Raise a square matrix to an integer power. A zero exponent yields
    /// the identity; a negative exponent inverts first.
    pub fn pow(&self, e: i64) -> Result<Matrix<F>, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare);
        }
        if e == 0 {
            return Ok(Matrix::identity(self.nrows, self.field.clone()));
        }

        let base = if e < 0 { self.inv()? } else { self.clone() };
        let mut m = base.clone();
        for _ in 1..e.unsigned_abs() {
            m = m.try_mul(&base)?;
        }
        Ok(m)
    }

    /// Divide each entry of the matrix by the scalar `e`.
    pub fn div_scalar(&self, e: &F::Element) -> Matrix<F> {
        if F::is_zero(e) {
            panic!("Cannot divide matrix by zero");
        }

        Matrix {
            data: self.data.iter().map(|ee| self.field.div(ee, e)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field: self.field.clone(),
        }
    }
}

impl Matrix<NumericTower> {
    /// Replace real entries that are integral after rounding to four
    /// decimal digits by exact integers. Exact entries are unchanged.
    pub fn normalize_integers(&self) -> Matrix<NumericTower> {
        self.map(
            |e| match e {
                NumericValue::Real(f) => {
                    let r = (f.into_inner() * 1e4).round() / 1e4;
                    if r.fract() == 0. && r.is_finite() {
                        NumericValue::Integer(Integer::from_f64(r))
                    } else {
                        e.clone()
                    }
                }
                _ => e.clone(),
            },
            self.field,
        )
    }

    /// Divide each entry by the scalar `e` through the tower, then
    /// collapse the results: denominator-one fractions become integers
    /// and integral-valued reals become exact integers. Proper fractions
    /// keep their type.
    pub fn div_scalar_normalized(&self, e: &NumericValue) -> Matrix<NumericTower> {
        if NumericTower::is_zero(e) {
            panic!("Cannot divide matrix by zero");
        }

        self.map(|ee| self.field.div(ee, e).simplify(), self.field)
            .normalize_integers()
    }

    /// Round every entry to three decimal digits and truncate to an
    /// integer.
    pub fn to_integer_matrix(&self) -> Matrix<NumericTower> {
        self.map(
            |e| NumericValue::Integer(self.field.to_integer(&self.field.round_to(e, 3))),
            self.field,
        )
    }

    /// Convert every non-complex entry to a real float.
    pub fn to_real_matrix(&self) -> Matrix<NumericTower> {
        self.map(
            |e| match e {
                NumericValue::Complex(_) => e.clone(),
                v => v.to_f64().into(),
            },
            self.field,
        )
    }

    /// Round inexact entries to `digits` decimal digits.
    pub fn round_to(&self, digits: u32) -> Matrix<NumericTower> {
        self.map(|e| self.field.round_to(e, digits), self.field)
    }

    /// The entrywise remainder modulo the scalar `e`.
    pub fn rem_scalar(&self, e: &NumericValue) -> Matrix<NumericTower> {
        use crate::domains::EuclideanDomain;
        self.map(|ee| self.field.rem(ee, e), self.field)
    }

    /// The entrywise absolute value.
    pub fn abs(&self) -> Matrix<NumericTower> {
        self.map(|e| self.field.abs(e), self.field)
    }
}

impl<F: Ring> Index<u32> for Matrix<F> {
    type Output = [F::Element];

    /// Get the `index`th row of the matrix.
    #[inline]
    fn index(&self, index: u32) -> &Self::Output {
        &self.data[index as usize * self.ncols as usize..(index as usize + 1) * self.ncols as usize]
    }
}

impl<F: Ring> Index<(u32, u32)> for Matrix<F> {
    type Output = F::Element;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl<F: Ring> IndexMut<(u32, u32)> for Matrix<F> {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (u32, u32)) -> &mut F::Element {
        &mut self.data[(index.0 * self.ncols + index.1) as usize]
    }
}

impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        MatrixPrinter::new(self).fmt(f)
    }
}

impl<F: Ring> Add<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    fn add(self, rhs: &Matrix<F>) -> Self::Output {
        match self.try_add(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot add matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            ),
        }
    }
}

impl<F: Ring> AddAssign<&Matrix<F>> for Matrix<F> {
    fn add_assign(&mut self, rhs: &Matrix<F>) {
        *self = &*self + rhs;
    }
}

impl<F: Ring> Sub<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    fn sub(self, rhs: &Matrix<F>) -> Self::Output {
        match self.try_sub(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot subtract matrices of different dimensions: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            ),
        }
    }
}

impl<F: Ring> SubAssign<&Matrix<F>> for Matrix<F> {
    fn sub_assign(&mut self, rhs: &Matrix<F>) {
        *self = &*self - rhs;
    }
}

impl<F: Ring> Mul<&Matrix<F>> for &Matrix<F> {
    type Output = Matrix<F>;

    fn mul(self, rhs: &Matrix<F>) -> Self::Output {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(_) => panic!(
                "Cannot multiply matrices because of a dimension mismatch: ({},{}) vs ({},{})",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            ),
        }
    }
}

impl<F: Ring> MulAssign<&Matrix<F>> for Matrix<F> {
    fn mul_assign(&mut self, rhs: &Matrix<F>) {
        *self = &*self * rhs;
    }
}

impl<F: Ring> Neg for Matrix<F> {
    type Output = Matrix<F>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }
        self
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{
        float::{Complex, F64},
        integer::{Integer, Z},
        numeric::{NumericValue, N},
        rational::{Fraction, Q},
        Ring,
    };

    use super::{Matrix, MatrixError};

    fn fm(rows: Vec<Vec<(i64, i64)>>) -> Matrix<Q> {
        Matrix::from_nested_vec(
            rows.into_iter()
                .map(|r| r.into_iter().map(Fraction::from).collect())
                .collect(),
            Q,
        )
        .unwrap()
    }

    #[test]
    fn construction() {
        let m = fm(vec![vec![(1, 1), (2, 1)], vec![(3, 1), (4, 1)]]);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m[(1, 0)], (3, 1).into());

        assert_eq!(
            Matrix::from_nested_vec(vec![vec![Fraction::one()], vec![]], Q),
            Err(MatrixError::InvalidShape)
        );
        assert_eq!(
            Matrix::from_linear(vec![Fraction::one(); 3], 2, 2, Q),
            Err(MatrixError::InvalidShape)
        );
    }

    #[test]
    fn determinant() {
        let m = fm(vec![vec![(1, 1), (2, 1)], vec![(3, 1), (4, 1)]]);
        assert_eq!(m.det().unwrap(), (-2, 1).into());

        let m = fm(vec![
            vec![(2, 1), (0, 1), (1, 1)],
            vec![(1, 1), (1, 1), (0, 1)],
            vec![(0, 1), (3, 1), (1, 1)],
        ]);
        assert_eq!(m.det().unwrap(), (5, 1).into());

        let m = fm(vec![vec![(1, 1), (2, 1), (3, 1)], vec![(4, 1), (5, 1), (6, 1)]]);
        assert_eq!(m.det(), Err(MatrixError::NotSquare));
    }

    #[test]
    fn minors_and_cofactors() {
        let m = fm(vec![vec![(1, 1), (2, 1)], vec![(3, 1), (4, 1)]]);
        assert_eq!(m.minor(0, 0).unwrap(), (4, 1).into());
        assert_eq!(m.minor(0, 1).unwrap(), (3, 1).into());
        assert_eq!(m.cofactor(0, 1).unwrap(), (-3, 1).into());

        let one = fm(vec![vec![(5, 1)]]);
        assert_eq!(one.minor(0, 0), Err(MatrixError::UndefinedMinor));
        assert_eq!(one.inv(), Err(MatrixError::UndefinedMinor));
    }

    #[test]
    fn inverse() {
        let m = fm(vec![vec![(1, 1), (2, 1)], vec![(3, 1), (4, 1)]]);
        let inv = m.inv().unwrap();
        assert_eq!(
            inv,
            fm(vec![vec![(-2, 1), (1, 1)], vec![(3, 2), (-1, 2)]])
        );
        assert_eq!(&m * &inv, Matrix::identity(2, Q));

        let singular = fm(vec![vec![(1, 1), (2, 1)], vec![(2, 1), (4, 1)]]);
        assert_eq!(singular.inv(), Err(MatrixError::Singular));
        assert!(!singular.is_invertible());
    }

    #[test]
    fn inverse_roundtrip() {
        let m3 = fm(vec![
            vec![(2, 1), (0, 1), (1, 1)],
            vec![(1, 1), (1, 1), (0, 1)],
            vec![(0, 1), (3, 1), (1, 1)],
        ]);
        assert_eq!(&m3 * &m3.inv().unwrap(), Matrix::identity(3, Q));

        let m4 = fm(vec![
            vec![(1, 2), (0, 1), (0, 1), (1, 1)],
            vec![(0, 1), (1, 3), (1, 1), (0, 1)],
            vec![(0, 1), (1, 1), (1, 1), (0, 1)],
            vec![(2, 1), (0, 1), (0, 1), (1, 1)],
        ]);
        assert_eq!(&m4 * &m4.inv().unwrap(), Matrix::identity(4, Q));
    }

    #[test]
    fn adjoint_identity() {
        // m * adj(m) == det(m) * id
        let m = fm(vec![
            vec![(1, 1), (2, 1), (3, 1)],
            vec![(0, 1), (4, 1), (5, 1)],
            vec![(1, 1), (0, 1), (6, 1)],
        ]);
        let d = m.det().unwrap();
        let prod = &m * &m.adjoint().unwrap();
        assert_eq!(prod, Matrix::identity(3, Q).mul_scalar(&d));
    }

    #[test]
    fn det_is_multiplicative() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let a = Matrix::from_linear(
                (0..9).map(|_| Z.sample(&mut rng, (-5, 5))).collect(),
                3,
                3,
                Z,
            )
            .unwrap();
            let b = Matrix::from_linear(
                (0..9).map(|_| Z.sample(&mut rng, (-5, 5))).collect(),
                3,
                3,
                Z,
            )
            .unwrap();

            let dab = (&a * &b).det().unwrap();
            assert_eq!(dab, &a.det().unwrap() * &b.det().unwrap());
        }
    }

    #[test]
    fn transpose() {
        let m = fm(vec![vec![(1, 1), (2, 1)], vec![(3, 1), (4, 1)]]);
        let t = m.transpose();
        assert_eq!(t, fm(vec![vec![(1, 1), (3, 1)], vec![(2, 1), (4, 1)]]));
        assert_eq!(t.transpose(), m);
        assert_eq!(m.clone().into_transposed(), t);

        let rect = fm(vec![vec![(1, 1), (2, 1), (3, 1)]]);
        assert_eq!(rect.transpose().nrows(), 3);
        assert_eq!(rect.clone().into_transposed(), rect.transpose());
    }

    #[test]
    fn powers() {
        let m = fm(vec![vec![(1, 1), (1, 1)], vec![(0, 1), (1, 1)]]);
        assert_eq!(m.pow(0).unwrap(), Matrix::identity(2, Q));
        assert_eq!(m.pow(1).unwrap(), m);

        let m3 = m.pow(3).unwrap();
        assert_eq!(m3[(0, 1)], (3, 1).into());

        let inv = m.pow(-1).unwrap();
        assert_eq!(&m * &inv, Matrix::identity(2, Q));

        let rect = fm(vec![vec![(1, 1), (2, 1), (3, 1)]]);
        assert_eq!(rect.pow(2), Err(MatrixError::NotSquare));
    }

    #[test]
    fn row_and_column_edits() {
        let mut m = fm(vec![vec![(1, 1), (2, 1)], vec![(3, 1), (4, 1)]]);
        let r = m.delete_row(0).unwrap();
        assert_eq!(r, vec![Fraction::from((1, 1)), Fraction::from((2, 1))]);
        assert_eq!(m.nrows(), 1);

        m.insert_row(0, r).unwrap();
        assert_eq!(m, fm(vec![vec![(1, 1), (2, 1)], vec![(3, 1), (4, 1)]]));

        let c = m.delete_col(1).unwrap();
        assert_eq!(c, vec![Fraction::from((2, 1)), Fraction::from((4, 1))]);
        assert_eq!(m.ncols(), 1);

        m.append_col(c).unwrap();
        assert_eq!(m, fm(vec![vec![(1, 1), (2, 1)], vec![(3, 1), (4, 1)]]));

        m.swap_rows(0, 1).unwrap();
        assert_eq!(
            m.row(0).unwrap(),
            vec![Fraction::from((3, 1)), Fraction::from((4, 1))]
        );

        assert_eq!(m.delete_row(5), Err(MatrixError::InvalidShape));
        assert_eq!(
            m.insert_col(0, vec![Fraction::one()]),
            Err(MatrixError::DimensionMismatch)
        );
    }

    #[test]
    fn arithmetic() {
        let a = fm(vec![vec![(1, 1), (2, 1)], vec![(3, 1), (4, 1)]]);
        let b = fm(vec![vec![(5, 1), (6, 1)], vec![(7, 1), (8, 1)]]);

        assert_eq!(
            a.try_add(&b).unwrap(),
            fm(vec![vec![(6, 1), (8, 1)], vec![(10, 1), (12, 1)]])
        );
        assert_eq!(
            a.try_mul(&b).unwrap(),
            fm(vec![vec![(19, 1), (22, 1)], vec![(43, 1), (50, 1)]])
        );
        assert_eq!(
            a.hadamard(&b).unwrap(),
            fm(vec![vec![(5, 1), (12, 1)], vec![(21, 1), (32, 1)]])
        );

        let rect = fm(vec![vec![(1, 1), (2, 1), (3, 1)]]);
        assert_eq!(a.try_add(&rect), Err(MatrixError::DimensionMismatch));
        assert_eq!(rect.try_mul(&rect), Err(MatrixError::DimensionMismatch));

        let id = Matrix::identity(3, Q);
        assert_eq!(&id * &id, id);
    }

    #[test]
    fn tower_normalization() {
        let m = Matrix::from_nested_vec(
            vec![
                vec![NumericValue::from(2.0000_f64), NumericValue::from(1.5_f64)],
                vec![
                    NumericValue::Rational((1, 2).into()),
                    NumericValue::from(3_i64),
                ],
            ],
            N,
        )
        .unwrap();

        let n = m.normalize_integers();
        assert_eq!(n[(0, 0)], NumericValue::Integer(Integer::new(2)));
        assert_eq!(n[(0, 1)], NumericValue::from(1.5_f64));
        // exact entries are untouched
        assert_eq!(n[(1, 0)], NumericValue::Rational((1, 2).into()));

        let i = m.to_integer_matrix();
        assert_eq!(i[(0, 1)], NumericValue::Integer(Integer::new(1)));
        assert_eq!(i[(1, 0)], NumericValue::Integer(Integer::zero()));
    }

    #[test]
    fn tower_division_normalizes() {
        let m = Matrix::from_nested_vec(
            vec![
                vec![NumericValue::from(2.0_f64), NumericValue::from(3.0_f64)],
                vec![NumericValue::from(4_i64), NumericValue::from(1_i64)],
            ],
            N,
        )
        .unwrap();

        // dividing by a real: integral results collapse back to integers
        let r = m.div_scalar_normalized(&NumericValue::from(2.0_f64));
        assert_eq!(r[(0, 0)], NumericValue::Integer(Integer::new(1)));
        assert_eq!(r[(0, 1)], NumericValue::from(1.5_f64));
        assert_eq!(r[(1, 0)], NumericValue::Integer(Integer::new(2)));
        assert_eq!(r[(1, 1)], NumericValue::from(0.5_f64));

        // dividing integers: exact quotients collapse, proper fractions stay
        let q = m.div_scalar_normalized(&NumericValue::from(2_i64));
        assert_eq!(q[(1, 0)], NumericValue::Integer(Integer::new(2)));
        assert_eq!(q[(1, 1)], NumericValue::Rational((1, 2).into()));
    }

    #[test]
    fn tower_elementwise_helpers() {
        let m = Matrix::from_nested_vec(
            vec![
                vec![NumericValue::from(7_i64), NumericValue::from(-7_i64)],
                vec![
                    NumericValue::Rational((7, 2).into()),
                    NumericValue::from(4_i64),
                ],
            ],
            N,
        )
        .unwrap();

        let r = m.rem_scalar(&NumericValue::from(3_i64));
        assert_eq!(r[(0, 0)], NumericValue::Integer(Integer::new(1)));
        // the remainder is never negative
        assert_eq!(r[(0, 1)], NumericValue::Integer(Integer::new(2)));
        assert_eq!(r[(1, 0)], NumericValue::Rational((1, 2).into()));
        assert_eq!(r[(1, 1)], NumericValue::Integer(Integer::new(1)));

        let a = Matrix::from_nested_vec(
            vec![vec![
                NumericValue::from(-3_i64),
                NumericValue::Rational((-1, 2).into()),
                NumericValue::Complex(Complex::new(F64::new(3.), F64::new(4.))),
            ]],
            N,
        )
        .unwrap();

        let abs = a.abs();
        assert_eq!(abs[(0, 0)], NumericValue::Integer(Integer::new(3)));
        assert_eq!(abs[(0, 1)], NumericValue::Rational((1, 2).into()));
        // a complex entry maps to its real magnitude
        assert_eq!(abs[(0, 2)], NumericValue::Real(F64::new(5.)));
    }

    #[test]
    fn tower_inverse() {
        // an integer matrix inverted over the tower gives exact fractions
        let m = Matrix::from_nested_vec(
            vec![
                vec![NumericValue::from(1_i64), NumericValue::from(2_i64)],
                vec![NumericValue::from(3_i64), NumericValue::from(4_i64)],
            ],
            N,
        )
        .unwrap();

        let inv = m.inv().unwrap();
        assert_eq!(
            inv[(1, 0)],
            NumericValue::Rational((3, 2).into())
        );
        let id = (&m * &inv).map(|e| e.clone().simplify(), N);
        assert_eq!(id, Matrix::identity(2, N));
    }
}
