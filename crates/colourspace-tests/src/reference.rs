//! Reference implementation wrappers
//!
//! Conversions computed with `palette`, using the same units as the
//! colourspace-core spaces: RGB and XYZ in 0-1, Lab in native units.
//! Nothing is clamped, so out-of-gamut inputs give out-of-range results.

use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{Lab, LinSrgb, Srgb, Xyz};

/// Tabulated D65 white palette normalises to
pub const D65_TABULATED: [f64; 3] = [0.95047, 1.0, 1.08883];

/// sRGB to XYZ using palette
pub fn srgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let linear: LinSrgb<f64> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_linear();
    let xyz = Xyz::<D65, f64>::from_color_unclamped(linear);
    [xyz.x, xyz.y, xyz.z]
}

/// XYZ to sRGB using palette
pub fn xyz_to_srgb(xyz: [f64; 3]) -> [f64; 3] {
    let xyz = Xyz::<D65, f64>::new(xyz[0], xyz[1], xyz[2]);
    let linear = LinSrgb::<f64>::from_color_unclamped(xyz);
    let encoded = Srgb::<f64>::from_linear(linear);
    [encoded.red, encoded.green, encoded.blue]
}

/// XYZ to Lab (D65) using palette
pub fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let xyz = Xyz::<D65, f64>::new(xyz[0], xyz[1], xyz[2]);
    let lab = Lab::<D65, f64>::from_color_unclamped(xyz);
    [lab.l, lab.a, lab.b]
}

/// Lab (D65) to XYZ using palette
pub fn lab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let lab = Lab::<D65, f64>::new(lab[0], lab[1], lab[2]);
    let xyz = Xyz::<D65, f64>::from_color_unclamped(lab);
    [xyz.x, xyz.y, xyz.z]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_white_is_d65() {
        let xyz = srgb_to_xyz([1.0, 1.0, 1.0]);
        for (a, b) in xyz.iter().zip(D65_TABULATED) {
            assert!((a - b).abs() < 1e-4, "{xyz:?}");
        }
    }

    #[test]
    fn test_lab_white() {
        let lab = xyz_to_lab(D65_TABULATED);
        assert!((lab[0] - 100.0).abs() < 1e-3, "{lab:?}");
        assert!(lab[1].abs() < 1e-3 && lab[2].abs() < 1e-3, "{lab:?}");
    }

    #[test]
    fn test_out_of_gamut_srgb_is_not_clipped() {
        // Saturated green well outside the sRGB gamut
        let rgb = xyz_to_srgb([0.1, 0.8, 0.05]);
        assert!(rgb[0] < 0.0, "{rgb:?}");
        assert!(rgb[1] > 1.0, "{rgb:?}");
    }

    #[test]
    fn test_lab_inverse_keeps_z_above_white() {
        // fz = 1.15, so Z = 1.15^3 * Zn
        let xyz = lab_to_xyz([100.0, 20.0, -30.0]);
        let expected = 1.15_f64.powi(3) * D65_TABULATED[2];
        assert!(xyz[2] > D65_TABULATED[2], "{xyz:?}");
        assert!((xyz[2] - expected).abs() < 1e-9, "{xyz:?}");
    }
}
