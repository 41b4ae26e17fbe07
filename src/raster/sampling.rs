//! Normalised brightness around an anchor point
//!
//! Two footprints are supported: a one-pixel-high cross-section spanning the pitch
//! of a rectangular strip, and the 3x3 neighbourhood used by the radial fan.
//! Neither footprint is clamped here; callers clip or bounds-check first and any
//! pixel still outside the raster surfaces as [`TilingError::OutOfBounds`].

use crate::io::error::{Result, TilingError};
use crate::raster::Raster;
use std::ops::Range;

/// Largest possible R+G+B sum of one pixel
pub const MAX_PIXEL_INTENSITY: f64 = 3.0 * 255.0;

/// Number of pixels in the fan's sampling neighbourhood
pub const NEIGHBORHOOD_SIZE: usize = 9;

/// Horizontal run of pixels across a vertical strip, centred on its anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossSection {
    row: i64,
    columns: Range<i64>,
}

impl CrossSection {
    /// Footprint of `strip_width` samples at offsets `-strip_width/2 .. strip_width/2`
    ///
    /// Each sample is the pixel under `anchor + offset`, so a strip whose anchor sits
    /// half a pitch into its band covers exactly that band, a unit pitch included.
    pub fn centered(anchor: [f64; 2], strip_width: u32) -> Self {
        let half = f64::from(strip_width) / 2.0;
        let first = (anchor[0] - half).floor() as i64;
        Self {
            row: anchor[1].floor() as i64,
            columns: first..first + i64::from(strip_width),
        }
    }

    /// Restrict the footprint to the columns that exist in `raster`
    ///
    /// Returns `None` when nothing of the footprint is left.
    pub fn clipped_to(&self, raster: &Raster<'_>) -> Option<Self> {
        let start = self.columns.start.max(0);
        let end = self.columns.end.min(raster.width() as i64);
        (start < end && raster.contains_pixel(start, self.row)).then(|| Self {
            row: self.row,
            columns: start..end,
        })
    }

    /// Number of pixels sampled
    pub fn len(&self) -> usize {
        usize::try_from(self.columns.end - self.columns.start).unwrap_or(0)
    }

    /// Whether the footprint samples no pixel at all
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns covered by the footprint
    pub fn columns(&self) -> Range<i64> {
        self.columns.clone()
    }

    /// Sum of pixel intensities over the footprint
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfBounds`] for the first pixel outside the raster
    pub fn sum(&self, raster: &Raster<'_>) -> Result<u64> {
        self.columns
            .clone()
            .map(|x| raster.intensity_at(x, self.row).map(u64::from))
            .sum()
    }

    /// Average intensity over the footprint, normalised into `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfBounds`] if the footprint is empty or leaves the raster
    pub fn normalized(&self, raster: &Raster<'_>) -> Result<f64> {
        if self.is_empty() {
            return Err(TilingError::OutOfBounds {
                x: self.columns.start,
                y: self.row,
                width: raster.width(),
                height: raster.height(),
            });
        }
        let total = self.sum(raster)? as f64;
        Ok(total / self.len() as f64 / MAX_PIXEL_INTENSITY)
    }
}

/// Average intensity of the 3x3 block centred on `center`, normalised into `[0, 1]`
///
/// # Errors
///
/// Returns [`TilingError::OutOfBounds`] if any of the nine pixels lies outside the raster
pub fn neighborhood_intensity(raster: &Raster<'_>, center: [i64; 2]) -> Result<f64> {
    let mut total = 0u64;
    for dy in -1..=1 {
        for dx in -1..=1 {
            total += u64::from(raster.intensity_at(center[0] + dx, center[1] + dy)?);
        }
    }
    Ok(total as f64 / NEIGHBORHOOD_SIZE as f64 / MAX_PIXEL_INTENSITY)
}
