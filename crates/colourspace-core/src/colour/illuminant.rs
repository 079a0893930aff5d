//! CIE Standard Illuminants
//!
//! Reference whites are computed rather than tabulated: the D-series comes
//! from the CIE daylight-locus polynomial, and E is the equal-energy point.
//! Both are returned as XYZ colours with Y = 1.

use std::fmt;
use std::str::FromStr;

use crate::colour::Colour;
use crate::error::Error;

/// CIE D-series illuminant for a nominal correlated colour temperature
///
/// `nominal` is given in hundreds of kelvin, as in the illuminant names:
/// `d_series(65.0)` is D65. The temperature is corrected for the revised
/// second radiation constant (c₂ = 14388 µm·K, previously 14380) before
/// the chromaticity polynomial is applied. Only the 4000 K to 7000 K
/// branch is used, D75 included.
pub fn d_series(nominal: f64) -> Colour {
    let t = nominal * 100.0 * 14388.0 / 14380.0;

    let x = 0.244063 + 0.099110e3 / t + 2.967800e6 / t.powi(2) - 4.607000e9 / t.powi(3);
    let y = 2.870 * x - 3.000 * x.powi(2) - 0.275;

    Colour::from_xyy(x, y, 1.0)
}

/// CIE illuminant E (equal energy)
pub fn e() -> Colour {
    Colour::from_xyy(1.0 / 3.0, 1.0 / 3.0, 1.0)
}

/// Named standard illuminants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardIlluminant {
    /// Horizon light, ~5003K
    D50,
    /// Mid-morning daylight, ~5503K
    D55,
    /// Noon daylight, ~6504K; white of sRGB and Adobe RGB
    D65,
    /// North sky daylight, ~7504K
    D75,
    /// Equal energy
    E,
}

impl StandardIlluminant {
    /// All named illuminants
    pub const ALL: [Self; 5] = [Self::D50, Self::D55, Self::D65, Self::D75, Self::E];

    /// The illuminant as an XYZ colour (Y = 1)
    pub fn colour(&self) -> Colour {
        match self {
            Self::D50 => d_series(50.0),
            Self::D55 => d_series(55.0),
            Self::D65 => d_series(65.0),
            Self::D75 => d_series(75.0),
            Self::E => e(),
        }
    }

    /// Canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::E => "E",
        }
    }

    /// Look up an illuminant by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|illuminant| illuminant.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for StandardIlluminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardIlluminant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 in 800
    const DELTA: f64 = 0.00125;

    fn assert_close(colour: Colour, expected: [f64; 3]) {
        for (actual, expected) in colour.to_array().into_iter().zip(expected) {
            assert!(
                (actual - expected).abs() < DELTA,
                "{colour:?} differs from {expected:?}"
            );
        }
    }

    #[test]
    fn test_d_series_matches_published_whites() {
        assert_close(d_series(50.0), [0.96422, 1.00000, 0.82521]);
        assert_close(d_series(55.0), [0.95682, 1.00000, 0.92149]);
        assert_close(d_series(65.0), [0.95047, 1.00000, 1.08883]);
        assert_close(d_series(75.0), [0.94972, 1.00000, 1.22638]);
    }

    #[test]
    fn test_d65_chromaticity() {
        let (x, y) = d_series(65.0).chromaticity().unwrap();
        assert!((x - 0.3127).abs() < 0.0001);
        assert!((y - 0.3291).abs() < 0.0001);
    }

    #[test]
    fn test_e_is_equal_energy() {
        assert_close(e(), [1.0, 1.0, 1.0]);
        assert_eq!(e().y(), 1.0);
    }

    #[test]
    fn test_named_illuminants() {
        assert_eq!(StandardIlluminant::D65.colour(), d_series(65.0));
        assert_eq!(StandardIlluminant::E.colour(), e());
        assert_eq!(
            StandardIlluminant::from_name("d50"),
            Some(StandardIlluminant::D50)
        );
        assert_eq!(
            "E".parse::<StandardIlluminant>().unwrap(),
            StandardIlluminant::E
        );
        assert!("F2".parse::<StandardIlluminant>().is_err());
        assert_eq!(StandardIlluminant::D75.to_string(), "D75");
    }
}
