//! Strip geometry and width modulation
//!
//! This module turns a raster and a set of layout parameters into a lazy stream of
//! line segments:
//! - Parameter validation and the two layout schemes
//! - Intensity to width modulation with optional smoothing
//! - Strip and segment records handed to the renderer

/// Radial-fan layout
pub mod fan;
/// Intensity to strip width mapping
pub mod modulation;
/// Layout parameters and validation
pub mod params;
/// Scheme dispatch for a single pass
pub mod pass;
/// Rectangular column layout
pub mod rectangular;
/// Strip and segment records
pub mod segment;

pub use params::{LayoutParams, Scheme};
pub use pass::{Tiling, tile};
pub use segment::Segment;
