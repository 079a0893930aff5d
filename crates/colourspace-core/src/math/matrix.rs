//! General matrix operations for colour space transforms
//!
//! Colour space matrices are 3x3, but the engine works on any rectangular
//! shape: RGB↔XYZ derivation multiplies 3x3 matrices by 3x1 column vectors,
//! and cofactor expansion recurses down through 2x2 and 1x1 minors.
//!
//! Index conventions:
//! - [`Matrix::entry`], [`Matrix::cofactor`] and [`Matrix::submatrix`] take
//!   **1-based** `(row, column)` pairs, matching textbook notation.
//! - [`Matrix::get`] and `matrix[(row, column)]` are **0-based**.
//!
//! All operations use f64 and return a new matrix; nothing mutates in place.

use std::fmt;
use std::ops::Index;

use tracing::trace;

use crate::error::{Error, Result};

/// A rectangular matrix of f64 values
///
/// Stored row-major in a flat buffer. Every row has the same length; this is
/// checked by [`Matrix::new`] so a ragged matrix can never be observed.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from rows of values
    ///
    /// Fails with [`Error::RaggedRows`] if any row differs in length from the
    /// first.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * columns);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::RaggedRows {
                    row: index + 1,
                    expected: columns,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(rows.len(), columns, data))
    }

    /// Create a matrix from fixed-width rows
    ///
    /// Array rows cannot be ragged, so this never fails.
    pub fn from_rows<const N: usize>(rows: &[[f64; N]]) -> Self {
        let data = rows.iter().flatten().copied().collect();
        Self::from_parts(rows.len(), N, data)
    }

    /// Create a matrix whose columns are the given vectors
    pub fn from_columns<const N: usize>(columns: &[[f64; N]]) -> Self {
        Self::from_rows(columns).transpose()
    }

    /// Create an n×1 column vector
    pub fn column(values: &[f64]) -> Self {
        Self::from_parts(values.len(), 1, values.to_vec())
    }

    /// Create an n×n identity matrix
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self::from_parts(n, n, data)
    }

    /// Create a matrix of zeros
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::from_parts(rows, columns, vec![0.0; rows * columns])
    }

    // An empty matrix reports zero columns, whatever width it was cut from.
    fn from_parts(rows: usize, columns: usize, data: Vec<f64>) -> Self {
        let columns = if rows == 0 { 0 } else { columns };
        debug_assert_eq!(data.len(), rows * columns);
        Self {
            rows,
            columns,
            data,
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (0 for an empty matrix)
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether the matrix has as many rows as columns
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Whether the matrix has no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// 0-based element access
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row < self.rows && column < self.columns {
            Some(self.data[row * self.columns + column])
        } else {
            None
        }
    }

    /// 1-based element access: `entry(1, 1)` is the top-left value
    pub fn entry(&self, row: usize, column: usize) -> Result<f64> {
        self.check_position(row, column)?;
        Ok(self.data[(row - 1) * self.columns + (column - 1)])
    }

    /// The top-left value, if any
    #[inline]
    pub fn top_left(&self) -> Option<f64> {
        self.get(0, 0)
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        let columns = self.columns;
        (0..self.rows).map(move |r| &self.data[r * columns..(r + 1) * columns])
    }

    /// All values in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Element-wise sum
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.columns != other.columns {
            return Err(self.mismatch(other));
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self::from_parts(self.rows, self.columns, data))
    }

    /// Matrix product `self × other`
    ///
    /// An m×n matrix times an n×p matrix gives an m×p matrix. Fails with
    /// [`Error::DimensionMismatch`] when the inner dimensions differ.
    pub fn product(&self, other: &Self) -> Result<Self> {
        if self.columns != other.rows {
            return Err(self.mismatch(other));
        }
        let mut data: Vec<f64> = Vec::with_capacity(self.rows * other.columns);
        for i in 0..self.rows {
            for j in 0..other.columns {
                let terms = (0..self.columns).map(|k| self[(i, k)] * other[(k, j)]);
                data.push(terms.sum());
            }
        }
        Ok(Self::from_parts(self.rows, other.columns, data))
    }

    /// Multiply every element by a scalar
    pub fn scale(&self, factor: f64) -> Self {
        let data = self.data.iter().map(|v| v * factor).collect();
        Self::from_parts(self.rows, self.columns, data)
    }

    /// Multiply column `j` by `factors[j]`
    ///
    /// Equivalent to right-multiplying by a diagonal matrix.
    pub fn scale_columns(&self, factors: &[f64]) -> Result<Self> {
        if factors.len() != self.columns {
            return Err(Error::DimensionMismatch {
                left_rows: self.rows,
                left_columns: self.columns,
                right_rows: factors.len(),
                right_columns: factors.len(),
            });
        }
        let data = self
            .iter_rows()
            .flat_map(|row| row.iter().zip(factors).map(|(v, s)| v * s))
            .collect();
        Ok(Self::from_parts(self.rows, self.columns, data))
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.columns {
            for i in 0..self.rows {
                data.push(self[(i, j)]);
            }
        }
        Self::from_parts(self.columns, self.rows, data)
    }

    /// Remove one row and one column (1-based)
    pub fn submatrix(&self, row: usize, column: usize) -> Result<Self> {
        self.check_position(row, column)?;
        let data = self
            .iter_rows()
            .enumerate()
            .filter(|(r, _)| *r != row - 1)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(|(c, _)| *c != column - 1)
                    .map(|(_, v)| *v)
            })
            .collect();
        Ok(Self::from_parts(self.rows - 1, self.columns - 1, data))
    }

    /// Signed minor at a 1-based position: `(-1)^(row+column) · det(submatrix)`
    pub fn cofactor(&self, row: usize, column: usize) -> Result<f64> {
        self.ensure_square()?;
        let minor = self.submatrix(row, column)?.determinant()?;
        let sign = if (row + column) % 2 == 0 { 1.0 } else { -1.0 };
        Ok(sign * minor)
    }

    /// Determinant by cofactor expansion along the first row
    ///
    /// A 1x1 matrix gives its single entry (sign preserved). The empty 0x0
    /// matrix gives 1, the empty product, which makes the 1x1 cofactor and
    /// inverse come out right.
    pub fn determinant(&self) -> Result<f64> {
        self.ensure_square()?;
        match self.rows {
            0 => Ok(1.0),
            1 => Ok(self.data[0]),
            n => {
                let mut det = 0.0;
                for i in 0..n {
                    det += self.data[i] * self.cofactor(1, i + 1)?;
                }
                Ok(det)
            }
        }
    }

    /// Inverse via the adjugate: `inverse[i][j] = cofactor(j, i) / det`
    ///
    /// Works for every square size. Fails with [`Error::NotSquare`] for
    /// rectangular input and [`Error::SingularMatrix`] when the determinant
    /// is zero or not finite.
    pub fn inverse(&self) -> Result<Self> {
        self.ensure_square()?;
        let determinant = self.determinant()?;
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(Error::SingularMatrix { determinant });
        }

        let n = self.rows;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(self.cofactor(j + 1, i + 1)? / determinant);
            }
        }
        trace!(size = n, determinant, "inverted matrix");
        Ok(Self::from_parts(n, n, data))
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.is_square() && self.approx_eq(&Self::identity(self.rows), epsilon)
    }

    fn ensure_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NotSquare {
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    fn check_position(&self, row: usize, column: usize) -> Result<()> {
        if (1..=self.rows).contains(&row) && (1..=self.columns).contains(&column) {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    fn mismatch(&self, other: &Self) -> Error {
        Error::DimensionMismatch {
            left_rows: self.rows,
            left_columns: self.columns,
            right_rows: other.rows,
            right_columns: other.columns,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// 0-based; panics when out of range
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of range for {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.data[row * self.columns + column]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
