//! Raster access and intensity sampling
//!
//! This module contains the read side of a tiling pass:
//! - A borrowed RGBA view with bounds-checked pixel queries
//! - Cross-section and neighbourhood brightness samplers

/// Borrowed RGBA pixel view
pub mod accessor;
/// Brightness sampling footprints
pub mod sampling;

pub use accessor::Raster;
