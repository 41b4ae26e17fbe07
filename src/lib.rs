//! Fukuda-style image tiling: an image rendered as ink strips whose width follows local brightness
//!
//! A tiling pass walks anchor points over a borrowed RGBA raster in one of two
//! layouts, rectangular columns or a radial fan, and yields a lazy stream of line
//! segments. A triangle-wave parameter sweep evolves the layout between passes for
//! continuous animation.

#![forbid(unsafe_code)]

/// Per-frame parameter sweeps for animation
pub mod animation;
/// Input/output operations, rendering and error handling
pub mod io;
/// Raster access and intensity sampling
pub mod raster;
/// Strip geometry, width modulation and the two layout schemes
pub mod tiling;

pub use io::error::{Result, TilingError};
