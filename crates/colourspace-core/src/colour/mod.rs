//! Colour value types
//!
//! This module provides:
//! - The canonical CIE XYZ colour value
//! - Named coordinate triples returned by colour spaces
//! - Standard illuminant (reference white) factory

pub mod coordinates;
pub mod illuminant;
pub mod xyz;

pub use coordinates::{Components, Coordinates};
pub use illuminant::{StandardIlluminant, d_series, e};
pub use xyz::Colour;
