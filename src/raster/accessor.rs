//! Read-only view over a packed RGBA pixel buffer
//!
//! The buffer is owned by whoever decoded the image; a [`Raster`] only borrows it
//! for the duration of a tiling pass and answers per-pixel queries by coordinate.

use crate::io::error::{Result, TilingError};
use ndarray::ArrayView3;

/// Bytes per pixel in the packed buffer (R, G, B, A)
pub const CHANNELS: usize = 4;

/// Borrowed RGBA raster indexed as `(row, col, channel)`
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    pixels: ArrayView3<'a, u8>,
}

impl<'a> Raster<'a> {
    /// Wrap a packed RGBA buffer with `stride = 4 * width`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the buffer length
    /// differs from `4 * width * height`
    pub fn new(width: usize, height: usize, pixels: &'a [u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TilingError::InvalidSourceData {
                reason: format!("raster dimensions must be positive, got {width}x{height}"),
            });
        }

        let expected = width
            .checked_mul(height)
            .and_then(|area| area.checked_mul(CHANNELS))
            .ok_or_else(|| TilingError::InvalidSourceData {
                reason: format!("raster dimensions {width}x{height} overflow"),
            })?;
        if pixels.len() != expected {
            return Err(TilingError::InvalidSourceData {
                reason: format!(
                    "pixel buffer holds {} bytes, {width}x{height} RGBA needs {expected}",
                    pixels.len()
                ),
            });
        }

        let pixels = ArrayView3::from_shape((height, width, CHANNELS), pixels).map_err(|e| {
            TilingError::InvalidSourceData {
                reason: e.to_string(),
            }
        })?;

        Ok(Self { pixels })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Check whether a continuous position lies inside `[0,width) x [0,height)`
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width() as f64 && y < self.height() as f64
    }

    /// Check whether a pixel coordinate lies inside the raster
    pub fn contains_pixel(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    /// Sum of the R, G and B channels at a pixel, in `[0, 3*255]`
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfBounds`] if the pixel lies outside the raster
    pub fn intensity_at(&self, x: i64, y: i64) -> Result<u32> {
        let [r, g, b] = self.rgb_at(x, y)?;
        Ok(u32::from(r) + u32::from(g) + u32::from(b))
    }

    /// Colour channels of a pixel, alpha dropped
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfBounds`] if the pixel lies outside the raster
    pub fn rgb_at(&self, x: i64, y: i64) -> Result<[u8; 3]> {
        let (row, col) = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        let channel = |c: usize| {
            self.pixels
                .get((row, col, c))
                .copied()
                .ok_or_else(|| self.out_of_bounds(x, y))
        };
        Ok([channel(0)?, channel(1)?, channel(2)?])
    }

    fn index(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (col < self.width() && row < self.height()).then_some((row, col))
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> TilingError {
        TilingError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }
}
