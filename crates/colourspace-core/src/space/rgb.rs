//! RGB colour spaces
//!
//! An RGB space is defined by the chromaticities of its three primaries, a
//! reference white and a companding curve. The RGB → XYZ matrix is derived
//! from those at construction:
//!
//! 1. Each primary becomes an XYZ column with luminance 1, giving matrix C.
//! 2. Per-primary scale factors solve `S = C⁻¹ · W` for reference white W.
//! 3. `M = C · diag(S)`, so RGB (1, 1, 1) maps exactly onto W.
//!
//! `generate` expands each component to linear light and multiplies by M;
//! `identify` multiplies by M⁻¹ and compands the result.

use tracing::debug;

use crate::colour::{Colour, Coordinates, illuminant};
use crate::error::Result;
use crate::math::{Companding, Matrix};
use crate::space::Space;

/// Coordinate names of RGB spaces
pub const RGB_KEYS: [&str; 3] = ["R", "G", "B"];

/// CIE xy chromaticities of red, green and blue primaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticities {
    pub red: (f64, f64),
    pub green: (f64, f64),
    pub blue: (f64, f64),
}

/// sRGB / Rec.709 primaries
pub const SRGB_PRIMARIES: Chromaticities = Chromaticities {
    red: (0.6400, 0.3300),
    green: (0.3000, 0.6000),
    blue: (0.1500, 0.0600),
};

/// Adobe RGB (1998) primaries
pub const ADOBE_RGB_PRIMARIES: Chromaticities = Chromaticities {
    red: (0.6400, 0.3300),
    green: (0.2100, 0.7100),
    blue: (0.1500, 0.0600),
};

/// A matrix/companding RGB space
#[derive(Debug, Clone, PartialEq)]
pub struct RgbSpace {
    name: &'static str,
    reference_white: Colour,
    red: Colour,
    green: Colour,
    blue: Colour,
    companding: Companding,
    to_xyz: Matrix,
    from_xyz: Matrix,
}

impl RgbSpace {
    /// Build an RGB space and derive its transformation matrices
    ///
    /// Fails with [`crate::Error::SingularMatrix`] if the primaries are
    /// collinear (or the white point makes the system degenerate).
    pub fn new(
        name: &'static str,
        primaries: Chromaticities,
        reference_white: Colour,
        companding: Companding,
    ) -> Result<Self> {
        let red = Colour::from_xyy(primaries.red.0, primaries.red.1, 1.0);
        let green = Colour::from_xyy(primaries.green.0, primaries.green.1, 1.0);
        let blue = Colour::from_xyy(primaries.blue.0, primaries.blue.1, 1.0);

        let to_xyz = transformation_matrix(reference_white, red, green, blue)?;
        let from_xyz = to_xyz.inverse()?;
        debug!(space = name, matrix = %to_xyz, "derived RGB to XYZ matrix");

        Ok(Self {
            name,
            reference_white,
            red,
            green,
            blue,
            companding,
            to_xyz,
            from_xyz,
        })
    }

    /// sRGB: Rec.709 primaries, D65 white, piecewise sRGB curve
    pub fn srgb() -> Result<Self> {
        Self::new(
            "sRGB",
            SRGB_PRIMARIES,
            illuminant::d_series(65.0),
            Companding::Srgb,
        )
    }

    /// Adobe RGB (1998): D65 white, gamma 563/256
    pub fn adobe_rgb() -> Result<Self> {
        Self::new(
            "AdobeRGB",
            ADOBE_RGB_PRIMARIES,
            illuminant::d_series(65.0),
            Companding::ADOBE_RGB,
        )
    }

    /// Linear RGB → XYZ matrix
    #[inline]
    pub fn transformation_matrix(&self) -> &Matrix {
        &self.to_xyz
    }

    /// XYZ → linear RGB matrix
    #[inline]
    pub fn inverse_transformation_matrix(&self) -> &Matrix {
        &self.from_xyz
    }

    /// Reference white the matrix was derived for
    #[inline]
    pub fn reference_white(&self) -> Colour {
        self.reference_white
    }

    /// Unscaled primaries (luminance 1) as used for matrix derivation
    #[inline]
    pub fn unscaled_primaries(&self) -> [Colour; 3] {
        [self.red, self.green, self.blue]
    }

    /// Companding curve
    #[inline]
    pub fn companding(&self) -> Companding {
        self.companding
    }
}

fn transformation_matrix(
    white: Colour,
    red: Colour,
    green: Colour,
    blue: Colour,
) -> Result<Matrix> {
    let colours = Matrix::from_columns(&[red.to_array(), green.to_array(), blue.to_array()]);
    let scales = colours.inverse()?.product(&white.as_column())?;
    colours.scale_columns(scales.as_slice())
}

impl Space for RgbSpace {
    fn name(&self) -> &'static str {
        self.name
    }

    fn keys(&self) -> [&'static str; 3] {
        RGB_KEYS
    }

    fn generate(&self, r: f64, g: f64, b: f64) -> Result<Colour> {
        let linear = [r, g, b].map(|c| self.companding.expand(c));
        let xyz = self.to_xyz.product(&Matrix::column(&linear))?;
        Colour::from_column(&xyz)
    }

    fn identify(&self, colour: &Colour) -> Result<Coordinates> {
        let linear = Colour::from_column(&self.from_xyz.product(&colour.as_column())?)?;
        let encoded = linear.to_array().map(|c| self.companding.compand(c));
        Ok(Coordinates::new(RGB_KEYS, encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // X, Y, Z, R, G, B
    const SRGB_DATA: [[f64; 6]; 3] = [
        [0.412456, 0.212673, 0.019334, 1.0, 0.0, 0.0],
        [0.357576, 0.715152, 0.119192, 0.0, 1.0, 0.0],
        [0.180437, 0.072175, 0.950304, 0.0, 0.0, 1.0],
    ];

    // X, Y, Z, R, G, B
    const ADOBE_DATA: [[f64; 6]; 3] = [
        [0.576700, 0.297361, 0.027032, 1.0, 0.0, 0.0],
        [0.185556, 0.627355, 0.070687, 0.0, 1.0, 0.0],
        [0.188212, 0.075285, 0.991248, 0.0, 0.0, 1.0],
    ];

    #[test]
    fn test_srgb_primaries_match_reference() {
        let srgb = RgbSpace::srgb().unwrap();
        let expected = [
            ("R", Colour::new(0.4124564, 0.2126729, 0.0193339)),
            ("G", Colour::new(0.3575761, 0.7151522, 0.1191920)),
            ("B", Colour::new(0.1804375, 0.0721750, 0.9503041)),
        ];
        let primaries = srgb.primaries().unwrap();
        for ((key, actual), (expected_key, expected)) in primaries.into_iter().zip(expected) {
            assert_eq!(key, expected_key);
            assert!(actual.approx_eq(&expected, 0.00065), "{key}: {actual:?}");
        }
    }

    #[test]
    fn test_srgb_white_point_is_d65() {
        let white = RgbSpace::srgb().unwrap().white_point().unwrap();
        let expected = Colour::new(0.95047, 1.00000, 1.08883);
        assert!(white.approx_eq(&expected, 0.00065));
    }

    #[test]
    fn test_white_maps_exactly_to_reference_white() {
        for space in [RgbSpace::srgb().unwrap(), RgbSpace::adobe_rgb().unwrap()] {
            let white = space.white_point().unwrap();
            assert!(
                white.approx_eq(&space.reference_white(), 1e-12),
                "{}",
                space.name()
            );
        }
    }

    #[test]
    fn test_srgb_identify_and_generate() {
        let srgb = RgbSpace::srgb().unwrap();
        for [x, y, z, r, g, b] in SRGB_DATA {
            let coordinates = srgb.identify(&Colour::new(x, y, z)).unwrap();
            assert!(coordinates.approx_eq([r, g, b], 0.001), "{coordinates:?}");

            let colour = srgb.generate(r, g, b).unwrap();
            let expected = Colour::new(x, y, z);
            assert!(colour.approx_eq(&expected, 0.00065), "{colour:?}");
        }
    }

    #[test]
    fn test_adobe_rgb_identify_and_generate() {
        let adobe = RgbSpace::adobe_rgb().unwrap();
        for [x, y, z, r, g, b] in ADOBE_DATA {
            let colour = adobe.generate(r, g, b).unwrap();
            let expected = Colour::new(x, y, z);
            assert!(colour.approx_eq(&expected, 0.001), "{colour:?}");
        }

        // The pure power law is steep near zero, so check a neutral instead
        let coordinates = adobe.identify(&adobe.reference_white()).unwrap();
        assert!(
            coordinates.approx_eq([1.0, 1.0, 1.0], 1e-9),
            "{coordinates:?}"
        );
    }

    #[test]
    fn test_roundtrip() {
        let samples = [
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.2, 0.4, 0.6],
            [0.9, 0.1, 0.5],
            [0.01, 0.02, 0.03],
        ];
        for space in [RgbSpace::srgb().unwrap(), RgbSpace::adobe_rgb().unwrap()] {
            for [r, g, b] in samples {
                let colour = space.generate(r, g, b).unwrap();
                let coordinates = space.identify(&colour).unwrap();
                assert!(
                    coordinates.approx_eq([r, g, b], 1e-3),
                    "{}: ({r}, {g}, {b}) -> {coordinates:?}",
                    space.name()
                );
            }
        }
    }

    #[test]
    fn test_matrices_are_inverse_of_each_other() {
        let srgb = RgbSpace::srgb().unwrap();
        let product = srgb
            .transformation_matrix()
            .product(srgb.inverse_transformation_matrix())
            .unwrap();
        assert!(product.is_identity(1e-12));
    }

    #[test]
    fn test_out_of_gamut_is_not_clamped() {
        let srgb = RgbSpace::srgb().unwrap();
        // Pure spectral-ish green lies outside sRGB
        let coordinates = srgb.identify(&Colour::new(0.1, 0.8, 0.05)).unwrap();
        assert!(coordinates.get("R").unwrap() < 0.0);
    }

    #[test]
    fn test_collinear_primaries_are_rejected() {
        let degenerate = Chromaticities {
            red: (0.2, 0.2),
            green: (0.3, 0.3),
            blue: (0.4, 0.4),
        };
        let white = illuminant::e();
        let result = RgbSpace::new("broken", degenerate, white, Companding::Srgb);
        assert!(result.is_err());
    }

    #[test]
    fn test_unscaled_primaries_have_unit_luminance() {
        let srgb = RgbSpace::srgb().unwrap();
        let Chromaticities { red, green, blue } = SRGB_PRIMARIES;
        let primaries = srgb.unscaled_primaries();
        for (primary, (x, y)) in primaries.into_iter().zip([red, green, blue]) {
            assert_eq!(primary.y(), 1.0);
            let (cx, cy) = primary.chromaticity().unwrap();
            assert!((cx - x).abs() < 1e-12, "{primary:?}");
            assert!((cy - y).abs() < 1e-12, "{primary:?}");
        }
    }

    #[test]
    fn test_companding_follows_space() {
        assert_eq!(RgbSpace::srgb().unwrap().companding(), Companding::Srgb);
        let adobe = RgbSpace::adobe_rgb().unwrap();
        assert_eq!(adobe.companding(), Companding::ADOBE_RGB);
    }
}
