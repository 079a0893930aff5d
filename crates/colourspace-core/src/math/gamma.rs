//! Companding (gamma) curves
//!
//! Companding maps linear light to the encoded values stored by an RGB
//! space; expanding is the inverse. No clamping is applied: values outside
//! [0, 1] pass through the same formulae.

/// Adobe RGB (1998) gamma, 2 + 51/256
pub const ADOBE_RGB_GAMMA: f64 = 563.0 / 256.0;

/// sRGB compand (linear → encoded)
///
/// IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_compand(linear: f64) -> f64 {
    if linear > 0.0031308 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}

/// sRGB expand (encoded → linear)
#[inline]
pub fn srgb_expand(encoded: f64) -> f64 {
    if encoded > 0.04045 {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// Simple power-law compand: y = x^(1/gamma), zero for non-positive input
#[inline]
pub fn gamma_compand(linear: f64, gamma: f64) -> f64 {
    if linear > 0.0 {
        linear.powf(1.0 / gamma)
    } else {
        0.0
    }
}

/// Simple power-law expand: y = x^gamma
///
/// Negative input yields NaN, like `powf`.
#[inline]
pub fn gamma_expand(encoded: f64, gamma: f64) -> f64 {
    encoded.powf(gamma)
}

/// Companding curve of an RGB space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Companding {
    /// Piecewise sRGB curve
    Srgb,
    /// Pure power law with the given gamma
    Gamma(f64),
}

impl Companding {
    /// Adobe RGB (1998) power law
    pub const ADOBE_RGB: Self = Self::Gamma(ADOBE_RGB_GAMMA);

    /// Linear → encoded
    #[inline]
    pub fn compand(&self, linear: f64) -> f64 {
        match *self {
            Self::Srgb => srgb_compand(linear),
            Self::Gamma(gamma) => gamma_compand(linear, gamma),
        }
    }

    /// Encoded → linear
    #[inline]
    pub fn expand(&self, encoded: f64) -> f64 {
        match *self {
            Self::Srgb => srgb_expand(encoded),
            Self::Gamma(gamma) => gamma_expand(encoded, gamma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_compand(0.0), 0.0);
        assert!((srgb_compand(1.0) - 1.0).abs() < EPSILON);
        assert_eq!(srgb_expand(0.0), 0.0);
        assert!((srgb_expand(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_linear_segment() {
        assert!((srgb_expand(0.04) - 0.04 / 12.92).abs() < EPSILON);
        assert!((srgb_compand(0.002) - 0.002 * 12.92).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let rt = srgb_compand(srgb_expand(v));
            assert!((rt - v).abs() < 1e-9, "{v} -> {rt}");
        }
    }

    #[test]
    fn test_srgb_mid_grey() {
        // sRGB 0.5 is about 21.4% linear light
        assert!((srgb_expand(0.5) - 0.214041).abs() < 1e-6);
    }

    #[test]
    fn test_negative_values_are_not_clamped() {
        assert!(srgb_compand(-0.1) < 0.0);
        assert!(srgb_expand(-0.1) < 0.0);
        assert_eq!(gamma_compand(-0.1, ADOBE_RGB_GAMMA), 0.0);
        assert!(gamma_expand(-0.1, ADOBE_RGB_GAMMA).is_nan());
    }

    #[test]
    fn test_adobe_gamma_roundtrip() {
        let c = Companding::ADOBE_RGB;
        for i in 0..=20 {
            let v = i as f64 / 20.0;
            assert!((c.compand(c.expand(v)) - v).abs() < 1e-9);
        }
        assert!((ADOBE_RGB_GAMMA - 2.19921875).abs() < EPSILON);
    }

    #[test]
    fn test_companding_dispatch() {
        assert_eq!(Companding::Srgb.expand(0.3), srgb_expand(0.3));
        assert!((Companding::Gamma(2.0).expand(0.5) - 0.25).abs() < EPSILON);
        assert!((Companding::Gamma(2.0).compand(0.25) - 0.5).abs() < EPSILON);
    }
}
