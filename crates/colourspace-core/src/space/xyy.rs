//! CIE xyY: chromaticity plus luminance
//!
//! `x` and `y` are the XYZ components normalised by their sum, `Y` is the
//! luminance carried through unchanged. Black has no chromaticity, so it is
//! reported with the white point's `(x, y)` and `Y = 0`.

use crate::colour::{Colour, Coordinates, illuminant};
use crate::error::Result;
use crate::space::Space;

/// Coordinate names of xyY
pub const XYY_KEYS: [&str; 3] = ["x", "y", "Y"];

/// The xyY space, white point illuminant E
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XyYSpace;

impl XyYSpace {
    /// Project to `[x, y, Y]`
    pub fn to_xyy(&self, colour: &Colour) -> [f64; 3] {
        match colour.chromaticity() {
            Some((x, y)) => [x, y, colour.y()],
            None => {
                let (x, y) = illuminant::e()
                    .chromaticity()
                    .unwrap_or((1.0 / 3.0, 1.0 / 3.0));
                [x, y, 0.0]
            }
        }
    }
}

impl Space for XyYSpace {
    fn name(&self) -> &'static str {
        "xyY"
    }

    fn keys(&self) -> [&'static str; 3] {
        XYY_KEYS
    }

    fn generate(&self, x: f64, y: f64, big_y: f64) -> Result<Colour> {
        Ok(Colour::from_xyy(x, y, big_y))
    }

    fn identify(&self, colour: &Colour) -> Result<Coordinates> {
        Ok(Coordinates::new(XYY_KEYS, self.to_xyy(colour)))
    }

    fn white_point(&self) -> Result<Colour> {
        Ok(illuminant::e())
    }
}
