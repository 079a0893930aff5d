//! # colourspace-tests
//!
//! Accuracy testing for colourspace-core.
//!
//! This crate provides:
//! - Parity checks against `palette`, an independent implementation
//! - Published reference values loaded from a JSON fixture
//! - Seeded sample patterns for sweeps
//! - Error statistics for comparing conversions
//!
//! ## Expected Differences
//!
//! colourspace-core derives D65 from the CIE daylight polynomial, giving
//! (0.950156, 1, 1.088201) rather than the tabulated (0.95047, 1, 1.08883)
//! palette uses. sRGB matrices therefore differ by up to about 6.5e-4.

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{ErrorStats, max_abs_diff};
pub use fixtures::{Fixture, FixtureError, ReferenceCase};
pub use patterns::{SamplePattern, generate_samples};
