//! CIELAB (L*a*b*) Colour Space
//!
//! L*a*b* is a perceptually uniform space computed relative to a reference
//! white (D65 unless specified).
//!
//! - L*: Lightness (0 = black, 100 = reference white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! Uses the exact CIE constants ε = 216/24389 and κ = 24389/27 rather than
//! the rounded 0.008856 / 903.3.

use crate::colour::{Colour, Coordinates, illuminant};
use crate::error::Result;
use crate::space::Space;

/// Coordinate names of Lab
pub const LAB_KEYS: [&str; 3] = ["L", "a", "b"];

/// CIE ε: the cube-root / linear segment boundary
pub const EPSILON: f64 = 216.0 / 24389.0;

/// CIE κ: slope of the linear segment
pub const KAPPA: f64 = 24389.0 / 27.0;

/// CIELAB relative to a reference white
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabSpace {
    reference_white: Colour,
}

impl LabSpace {
    /// Lab relative to D65
    pub fn new() -> Self {
        Self::with_reference_white(illuminant::d_series(65.0))
    }

    /// Lab relative to a specific white
    pub const fn with_reference_white(reference_white: Colour) -> Self {
        Self { reference_white }
    }

    /// Reference white
    #[inline]
    pub fn reference_white(&self) -> Colour {
        self.reference_white
    }

    /// Convert XYZ to `[L, a, b]`
    pub fn to_lab(&self, colour: &Colour) -> [f64; 3] {
        let white = &self.reference_white;
        let fx = lab_f(colour.x() / white.x());
        let fy = lab_f(colour.y() / white.y());
        let fz = lab_f(colour.z() / white.z());

        [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
    }

    /// Convert `L, a, b` to XYZ
    pub fn to_xyz(&self, l: f64, a: f64, b: f64) -> Colour {
        let fy = (l + 16.0) / 116.0;
        let fx = a / 500.0 + fy;
        let fz = fy - b / 200.0;

        let yr = if l > KAPPA * EPSILON {
            fy.powi(3)
        } else {
            l / KAPPA
        };

        let white = &self.reference_white;
        Colour::new(
            lab_f_inv(fx) * white.x(),
            yr * white.y(),
            lab_f_inv(fz) * white.z(),
        )
    }
}

impl Default for LabSpace {
    fn default() -> Self {
        Self::new()
    }
}

/// Lab forward function: f(r) for XYZ → Lab conversion
#[inline]
fn lab_f(r: f64) -> f64 {
    if r > EPSILON {
        r.cbrt()
    } else {
        (KAPPA * r + 16.0) / 116.0
    }
}

/// Lab inverse function for the x and z channels
#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cubed = f.powi(3);
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

impl Space for LabSpace {
    fn name(&self) -> &'static str {
        "Lab"
    }

    fn keys(&self) -> [&'static str; 3] {
        LAB_KEYS
    }

    fn generate(&self, l: f64, a: f64, b: f64) -> Result<Colour> {
        Ok(self.to_xyz(l, a, b))
    }

    fn identify(&self, colour: &Colour) -> Result<Coordinates> {
        Ok(Coordinates::new(LAB_KEYS, self.to_lab(colour)))
    }

    fn white_point(&self) -> Result<Colour> {
        Ok(self.reference_white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_white_is_100() {
        let lab = LabSpace::new();
        let coordinates = lab.identify(&lab.reference_white()).unwrap();
        assert!(
            coordinates.approx_eq([100.0, 0.0, 0.0], TOLERANCE),
            "{coordinates:?}"
        );
    }

    #[test]
    fn test_published_d65_white_is_near_100() {
        let coordinates = LabSpace::new()
            .identify(&Colour::new(0.95047, 1.0, 1.08883))
            .unwrap();
        assert!((coordinates.get("L").unwrap() - 100.0).abs() < 1e-6);
        assert!(coordinates.get("a").unwrap().abs() < 0.1);
        assert!(coordinates.get("b").unwrap().abs() < 0.1);
    }

    #[test]
    fn test_black_is_0() {
        let coordinates = LabSpace::new().identify(&Colour::default()).unwrap();
        assert!(coordinates.approx_eq([0.0, 0.0, 0.0], TOLERANCE));
    }

    #[test]
    fn test_srgb_red() {
        // sRGB red primary; reference Lab (53.2408, 80.0925, 67.2032)
        let red = Colour::new(0.4124564, 0.2126729, 0.0193339);
        let coordinates = LabSpace::new().identify(&red).unwrap();
        assert!(
            coordinates.approx_eq([53.2408, 80.0925, 67.2032], 0.1),
            "{coordinates:?}"
        );
    }

    #[test]
    fn test_linear_segment_near_black() {
        // Y below ε uses L = κ·Y
        let lab = LabSpace::with_reference_white(illuminant::e());
        let y = 0.001;
        let coordinates = lab.identify(&Colour::new(y, y, y)).unwrap();
        assert!((coordinates[0] - KAPPA * y).abs() < 1e-9);
    }

    #[test]
    fn test_roundtrip() {
        let lab = LabSpace::new();
        let samples = [
            [50.0, 25.0, -30.0],
            [100.0, 0.0, 0.0],
            [5.0, 1.0, -1.0],
            [75.0, -60.0, 40.0],
            [0.0, 0.0, 0.0],
        ];
        for [l, a, b] in samples {
            let colour = lab.generate(l, a, b).unwrap();
            let coordinates = lab.identify(&colour).unwrap();
            assert!(
                coordinates.approx_eq([l, a, b], TOLERANCE),
                "{coordinates:?}"
            );
        }
    }

    #[test]
    fn test_white_point_is_reference_white() {
        let white = illuminant::d_series(50.0);
        let lab = LabSpace::with_reference_white(white);
        assert_eq!(lab.white_point().unwrap(), white);
    }
}
