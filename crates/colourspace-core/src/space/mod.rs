//! Colour spaces
//!
//! Each space knows how to `generate` a canonical XYZ [`Colour`] from its
//! own three coordinates, and how to `identify` (project) any colour back
//! into those coordinates. Conversion between two spaces is always
//! `destination.identify(&source.generate(..)?)`.
//!
//! The set of spaces is fixed: XYZ, xyY, sRGB, Adobe RGB and Lab. They are
//! available individually and through the closed [`ColourSpace`] enum.

pub mod lab;
pub mod rgb;
pub mod xyy;
pub mod xyz;

use std::fmt;
use std::str::FromStr;

pub use lab::LabSpace;
pub use rgb::{ADOBE_RGB_PRIMARIES, Chromaticities, RgbSpace, SRGB_PRIMARIES};
pub use xyy::XyYSpace;
pub use xyz::XyzSpace;

use crate::colour::{Colour, Coordinates};
use crate::error::{Error, Result};

/// Primaries of a space, keyed by coordinate name
pub type Primaries = [(&'static str, Colour); 3];

/// Behaviour shared by every colour space
pub trait Space {
    /// Display name of the space
    fn name(&self) -> &'static str;

    /// Coordinate names, in `generate` argument order
    fn keys(&self) -> [&'static str; 3];

    /// Build a canonical colour from native coordinates
    fn generate(&self, p1: f64, p2: f64, p3: f64) -> Result<Colour>;

    /// Project a canonical colour into native coordinates
    fn identify(&self, colour: &Colour) -> Result<Coordinates>;

    /// The colours generated by each unit coordinate
    fn primaries(&self) -> Result<Primaries> {
        let [k1, k2, k3] = self.keys();
        Ok([
            (k1, self.generate(1.0, 0.0, 0.0)?),
            (k2, self.generate(0.0, 1.0, 0.0)?),
            (k3, self.generate(0.0, 0.0, 1.0)?),
        ])
    }

    /// The colour all-ones coordinates produce
    fn white_point(&self) -> Result<Colour> {
        self.generate(1.0, 1.0, 1.0)
    }
}

/// One of the supported colour spaces
#[derive(Debug, Clone, PartialEq)]
pub enum ColourSpace {
    Xyz(XyzSpace),
    XyY(XyYSpace),
    Srgb(RgbSpace),
    AdobeRgb(RgbSpace),
    Lab(LabSpace),
}

impl ColourSpace {
    /// CIE XYZ
    pub fn xyz() -> Self {
        Self::Xyz(XyzSpace)
    }

    /// CIE xyY
    pub fn xyy() -> Self {
        Self::XyY(XyYSpace)
    }

    /// sRGB (IEC 61966-2-1)
    pub fn srgb() -> Result<Self> {
        RgbSpace::srgb().map(Self::Srgb)
    }

    /// Adobe RGB (1998)
    pub fn adobe_rgb() -> Result<Self> {
        RgbSpace::adobe_rgb().map(Self::AdobeRgb)
    }

    /// CIELAB relative to D65
    pub fn lab() -> Self {
        Self::Lab(LabSpace::new())
    }

    /// Look up a space by name, ignoring case
    ///
    /// Accepts `XYZ`, `xyY`, `sRGB`, `AdobeRGB` (or `Adobe RGB`) and `Lab`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "xyz" => Ok(Self::xyz()),
            "xyy" => Ok(Self::xyy()),
            "srgb" => Self::srgb(),
            "adobergb" | "adobe rgb" | "adobe_rgb" => Self::adobe_rgb(),
            "lab" => Ok(Self::lab()),
            _ => Err(Error::UnknownName(name.to_string())),
        }
    }

    fn inner(&self) -> &dyn Space {
        match self {
            Self::Xyz(space) => space,
            Self::XyY(space) => space,
            Self::Srgb(space) | Self::AdobeRgb(space) => space,
            Self::Lab(space) => space,
        }
    }
}

impl Space for ColourSpace {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn keys(&self) -> [&'static str; 3] {
        self.inner().keys()
    }

    fn generate(&self, p1: f64, p2: f64, p3: f64) -> Result<Colour> {
        self.inner().generate(p1, p2, p3)
    }

    fn identify(&self, colour: &Colour) -> Result<Coordinates> {
        self.inner().identify(colour)
    }

    fn primaries(&self) -> Result<Primaries> {
        self.inner().primaries()
    }

    fn white_point(&self) -> Result<Colour> {
        self.inner().white_point()
    }
}

impl fmt::Display for ColourSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColourSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
