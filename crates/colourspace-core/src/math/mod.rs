//! Mathematical operations for colour conversion
//!
//! This module provides:
//! - A general rectangular matrix engine (cofactor determinant, adjugate inverse)
//! - Companding curves for RGB spaces

pub mod gamma;
pub mod matrix;

pub use gamma::{
    ADOBE_RGB_GAMMA, Companding, gamma_compand, gamma_expand, srgb_compand, srgb_expand,
};
pub use matrix::Matrix;
