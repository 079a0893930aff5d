//! Canonical CIE XYZ colour value
//!
//! Every colour space converts through this type. A colour carries no
//! memory of the space that produced it.

use std::ops::{Add, Mul, Sub};

use crate::error::{Error, Result};
use crate::math::Matrix;

/// CIE 1931 XYZ tristimulus values
///
/// Components are nominally in [0, 1] with Y = 1 for the reference white,
/// but nothing is clamped: negative and out-of-range values are kept as is.
/// Equality is exact component-wise float equality; use
/// [`Colour::approx_eq`] after any lossy conversion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    x: f64,
    y: f64,
    z: f64,
}

impl Colour {
    /// Create a colour from X, Y and Z
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a colour from an `[X, Y, Z]` array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to an `[X, Y, Z]` array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// X tristimulus value
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y tristimulus value (luminance)
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Z tristimulus value
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Create a colour from xyY chromaticity and luminance
    ///
    /// When `y` is zero the usual division is undefined, and these fallbacks
    /// apply instead:
    /// - `Y == 0`: X takes the value of `x`
    /// - `x == 0 && Y == 0`: Z is 1
    /// - otherwise X and Z are 0
    pub fn from_xyy(x: f64, y: f64, big_y: f64) -> Self {
        if y != 0.0 {
            return Self::new(big_y * x / y, big_y, big_y * (1.0 - x - y) / y);
        }

        let big_x = if big_y == 0.0 { x } else { 0.0 };
        let z = if x == 0.0 && big_y == 0.0 { 1.0 } else { 0.0 };
        Self::new(big_x, big_y, z)
    }

    /// Chromaticity `(x, y)`, or `None` for black (X + Y + Z = 0)
    #[inline]
    pub fn chromaticity(&self) -> Option<(f64, f64)> {
        let sum = self.x + self.y + self.z;
        if sum != 0.0 {
            Some((self.x / sum, self.y / sum))
        } else {
            None
        }
    }

    /// This colour as a 3x1 column vector
    pub fn as_column(&self) -> Matrix {
        Matrix::column(&self.to_array())
    }

    /// Read a colour back from a 3x1 column vector
    pub fn from_column(column: &Matrix) -> Result<Self> {
        if column.rows() != 3 || column.columns() != 1 {
            return Err(Error::DimensionMismatch {
                left_rows: column.rows(),
                left_columns: column.columns(),
                right_rows: 3,
                right_columns: 1,
            });
        }
        Ok(Self::new(
            column.entry(1, 1)?,
            column.entry(2, 1)?,
            column.entry(3, 1)?,
        ))
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Check if approximately equal to another colour
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl From<[f64; 3]> for Colour {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Colour> for [f64; 3] {
    fn from(colour: Colour) -> Self {
        colour.to_array()
    }
}

impl Add for Colour {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Colour {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Colour {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
