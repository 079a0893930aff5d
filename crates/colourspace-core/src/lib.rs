//! # colourspace-core
//!
//! Colour-space conversion through a canonical CIE XYZ colour.
//!
//! ## Overview
//!
//! - **Matrix engine**: general rectangular matrices with cofactor
//!   determinants and adjugate inversion
//! - **Colour**: the canonical XYZ value every conversion passes through
//! - **Spaces**: XYZ, xyY, sRGB, Adobe RGB (1998) and CIELAB, each able to
//!   `generate` a colour from its coordinates and `identify` a colour back
//! - **Illuminants**: CIE D-series daylight and the equal-energy white
//! - **Use cases**: keyed conversions in caller units (RGB 0-255, XYZ 0-100)
//!
//! RGB transformation matrices are derived from primaries and reference
//! white at construction, never hard-coded.
//!
//! ## Quick Start
//!
//! ```
//! use colourspace_core::{Components, Space, Usecase, convert, space::RgbSpace};
//!
//! // Project a colour into sRGB
//! let srgb = RgbSpace::srgb().unwrap();
//! let red = srgb.generate(1.0, 0.0, 0.0).unwrap();
//! let coordinates = srgb.identify(&red).unwrap();
//! assert!((coordinates.get("R").unwrap() - 1.0).abs() < 1e-9);
//!
//! // Keyed conversion in caller units
//! let input: Components = [("R", 255.0), ("G", 0.0), ("B", 0.0)]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v))
//!     .collect();
//! let xyz = convert::srgb_to_xyz().unwrap().execute(&input).unwrap();
//! assert!((xyz["Y"] - 21.2673).abs() < 0.065);
//! ```

pub mod colour;
pub mod convert;
pub mod error;
pub mod math;
pub mod space;

pub use colour::{Colour, Components, Coordinates, StandardIlluminant};
pub use convert::{Conversion, Usecase};
pub use error::{Error, Result};
pub use math::{Companding, Matrix};
pub use space::{ColourSpace, LabSpace, RgbSpace, Space, XyYSpace, XyzSpace};

/// Version of colourspace-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
