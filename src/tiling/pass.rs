//! Entry point for one tiling pass over a raster

use crate::io::error::Result;
use crate::raster::Raster;
use crate::tiling::fan::FanTiling;
use crate::tiling::params::{LayoutParams, Scheme};
use crate::tiling::rectangular::RectangularTiling;
use crate::tiling::segment::Segment;

/// Segment stream of either layout scheme
///
/// A pass is deterministic given its raster and parameters and can be restarted by
/// calling [`tile`] again; nothing carries over between passes.
#[derive(Debug, Clone)]
pub enum Tiling<'a> {
    /// Column scan of horizontal segments
    Rectangular(RectangularTiling<'a>),
    /// Strips radiating from the bottom edge
    Fan(FanTiling<'a>),
}

impl Tiling<'_> {
    /// Strips cut short by an out-of-bounds footprint so far
    pub const fn truncated_strips(&self) -> usize {
        match self {
            Self::Rectangular(tiling) => tiling.truncated_strips(),
            Self::Fan(tiling) => tiling.truncated_strips(),
        }
    }
}

impl Iterator for Tiling<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        match self {
            Self::Rectangular(tiling) => tiling.next(),
            Self::Fan(tiling) => tiling.next(),
        }
    }
}

/// Start a pass of `scheme` over `raster`
///
/// # Errors
///
/// Returns [`crate::TilingError::InvalidParameter`] if `params` fail validation;
/// no segment is produced in that case
pub fn tile<'a>(raster: Raster<'a>, scheme: Scheme, params: &LayoutParams) -> Result<Tiling<'a>> {
    tracing::debug!(
        ?scheme,
        width = raster.width(),
        height = raster.height(),
        "starting tiling pass"
    );
    Ok(match scheme {
        Scheme::Rectangular => Tiling::Rectangular(RectangularTiling::new(raster, *params)?),
        Scheme::Fan => Tiling::Fan(FanTiling::new(raster, *params)?),
    })
}
