//! Conversion use cases
//!
//! A conversion composes two colour spaces: the source `generate`s a
//! canonical colour from keyed input, and the destination `identify`s it.
//! Both ends carry a unit scale so callers can work in their own ranges
//! (RGB 0-255, XYZ 0-100) while the spaces work in 0-1.

use tracing::trace;

use crate::colour::Components;
use crate::space::{ColourSpace, Space};
use crate::{Error, Result};

/// 8-bit RGB range
pub const RGB_SCALE: f64 = 255.0;

/// XYZ as percentages of the white luminance
pub const XYZ_SCALE: f64 = 100.0;

/// Lab is reported in its native units
pub const LAB_SCALE: f64 = 1.0;

/// A keyed-float conversion
pub trait Usecase {
    /// Convert keyed input components into keyed output components
    fn execute(&self, input: &Components) -> Result<Components>;
}

/// Conversion between any two colour spaces
///
/// Input values are divided by `source_scale` before `generate`, output
/// values are multiplied by `destination_scale` after `identify`. Nothing
/// is clamped: out-of-gamut colours come back out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    source: ColourSpace,
    source_scale: f64,
    destination: ColourSpace,
    destination_scale: f64,
}

impl Conversion {
    /// Create a conversion
    pub fn new(
        source: ColourSpace,
        source_scale: f64,
        destination: ColourSpace,
        destination_scale: f64,
    ) -> Self {
        Self {
            source,
            source_scale,
            destination,
            destination_scale,
        }
    }

    /// Space the input is read in
    pub fn source(&self) -> &ColourSpace {
        &self.source
    }

    /// Space the output is reported in
    pub fn destination(&self) -> &ColourSpace {
        &self.destination
    }

    /// Convert an ordered triple in source units to destination units
    pub fn convert(&self, values: [f64; 3]) -> Result<[f64; 3]> {
        let [p1, p2, p3] = values.map(|v| v / self.source_scale);
        let colour = self.source.generate(p1, p2, p3)?;
        let coordinates = self.destination.identify(&colour)?;
        Ok(coordinates.scale(self.destination_scale).values())
    }
}

impl Usecase for Conversion {
    fn execute(&self, input: &Components) -> Result<Components> {
        let mut values = [0.0; 3];
        for (value, key) in values.iter_mut().zip(self.source.keys()) {
            *value = *input
                .get(key)
                .ok_or_else(|| Error::MissingComponent(key.to_string()))?;
        }

        let output = self.convert(values)?;
        trace!(
            source = self.source.name(),
            destination = self.destination.name(),
            ?values,
            ?output,
            "converted"
        );

        Ok(self
            .destination
            .keys()
            .into_iter()
            .zip(output)
            .map(|(k, v)| (k.to_string(), v))
            .collect())
    }
}

/// sRGB (0-255) to XYZ (0-100)
pub fn srgb_to_xyz() -> Result<Conversion> {
    Ok(Conversion::new(
        ColourSpace::srgb()?,
        RGB_SCALE,
        ColourSpace::xyz(),
        XYZ_SCALE,
    ))
}

/// XYZ (0-100) to sRGB (0-255)
pub fn xyz_to_srgb() -> Result<Conversion> {
    Ok(Conversion::new(
        ColourSpace::xyz(),
        XYZ_SCALE,
        ColourSpace::srgb()?,
        RGB_SCALE,
    ))
}

/// XYZ (0-100) to Lab (D65)
pub fn xyz_to_lab() -> Conversion {
    Conversion::new(ColourSpace::xyz(), XYZ_SCALE, ColourSpace::lab(), LAB_SCALE)
}

/// Lab (D65) to XYZ (0-100)
pub fn lab_to_xyz() -> Conversion {
    Conversion::new(ColourSpace::lab(), LAB_SCALE, ColourSpace::xyz(), XYZ_SCALE)
}

/// XYZ (0-100) to Adobe RGB (0-255)
pub fn xyz_to_adobe_rgb() -> Result<Conversion> {
    Ok(Conversion::new(
        ColourSpace::xyz(),
        XYZ_SCALE,
        ColourSpace::adobe_rgb()?,
        RGB_SCALE,
    ))
}

/// Adobe RGB (0-255) to XYZ (0-100)
pub fn adobe_rgb_to_xyz() -> Result<Conversion> {
    Ok(Conversion::new(
        ColourSpace::adobe_rgb()?,
        RGB_SCALE,
        ColourSpace::xyz(),
        XYZ_SCALE,
    ))
}
