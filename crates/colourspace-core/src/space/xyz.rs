//! CIE XYZ as a colour space: the identity projection

use crate::colour::{Colour, Coordinates};
use crate::error::Result;
use crate::space::Space;

/// Coordinate names of XYZ
pub const XYZ_KEYS: [&str; 3] = ["X", "Y", "Z"];

/// The identity space
///
/// Primaries are the unit basis vectors and the white point is illuminant E.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XyzSpace;

impl Space for XyzSpace {
    fn name(&self) -> &'static str {
        "XYZ"
    }

    fn keys(&self) -> [&'static str; 3] {
        XYZ_KEYS
    }

    fn generate(&self, x: f64, y: f64, z: f64) -> Result<Colour> {
        Ok(Colour::new(x, y, z))
    }

    fn identify(&self, colour: &Colour) -> Result<Coordinates> {
        Ok(Coordinates::new(XYZ_KEYS, colour.to_array()))
    }
}
