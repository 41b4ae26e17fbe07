//! Column-by-column scan producing horizontal segments

use crate::io::error::{Result, TilingError};
use crate::raster::Raster;
use crate::raster::sampling::CrossSection;
use crate::tiling::modulation::modulate;
use crate::tiling::params::LayoutParams;
use crate::tiling::segment::{Segment, Strip};

/// Lazy segment stream for the rectangular scheme
///
/// Strip columns sit at `x = strip_width/2 + k*strip_width`, anchors within a column
/// at `y = j*step_size`, both advancing until they leave the image. Every anchor
/// emits one horizontal segment whose length is the strip pitch scaled by the
/// modulated brightness of the pixels across the strip.
#[derive(Debug, Clone)]
pub struct RectangularTiling<'a> {
    raster: Raster<'a>,
    params: LayoutParams,
    columns: usize,
    rows: usize,
    column: usize,
    row: usize,
    truncated: usize,
}

impl<'a> RectangularTiling<'a> {
    /// Prepare a pass over `raster`
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fail validation
    pub fn new(raster: Raster<'a>, params: LayoutParams) -> Result<Self> {
        params.validate()?;
        let columns = (raster.width() as f64 / f64::from(params.strip_width)).ceil() as usize;
        let rows = (raster.height() as f64 / params.step_size).ceil() as usize;
        Ok(Self {
            raster,
            params,
            columns,
            rows,
            column: 0,
            row: 0,
            truncated: 0,
        })
    }

    /// Number of strip columns in the pass
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of anchors, and therefore segments, in a complete column
    pub const fn segments_per_column(&self) -> usize {
        self.rows
    }

    /// Columns whose traversal stopped at an out-of-bounds footprint so far
    pub const fn truncated_strips(&self) -> usize {
        self.truncated
    }

    /// Anchor position of the given column and row
    pub fn anchor(&self, column: usize, row: usize) -> [f64; 2] {
        let pitch = f64::from(self.params.strip_width);
        [
            (column as f64).mul_add(pitch, pitch / 2.0),
            row as f64 * self.params.step_size,
        ]
    }

    fn strip_at(&self, column: usize, row: usize) -> Result<Segment> {
        let anchor = self.anchor(column, row);
        let footprint = CrossSection::centered(anchor, self.params.strip_width)
            .clipped_to(&self.raster)
            .ok_or(TilingError::OutOfBounds {
                x: anchor[0].floor() as i64,
                y: anchor[1].floor() as i64,
                width: self.raster.width(),
                height: self.raster.height(),
            })?;

        let fraction = modulate(footprint.normalized(&self.raster)?, &self.params);
        let strip = Strip {
            anchor,
            direction: [0.0, 1.0],
            spread: [1.0, 0.0],
            half_width: f64::from(self.params.strip_width) * fraction / 2.0,
        };

        let color = if self.params.solid_color {
            None
        } else {
            let columns = footprint.columns();
            let x = (anchor[0].floor() as i64).clamp(columns.start, columns.end - 1);
            Some(self.raster.rgb_at(x, anchor[1].floor() as i64)?)
        };

        Ok(strip.segment(color))
    }
}

impl Iterator for RectangularTiling<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        while self.column < self.columns {
            if self.row >= self.rows {
                self.column += 1;
                self.row = 0;
                continue;
            }

            let (column, row) = (self.column, self.row);
            self.row += 1;
            match self.strip_at(column, row) {
                Ok(segment) => return Some(segment),
                Err(error) => {
                    tracing::trace!(column, row, %error, "strip column ended early");
                    self.truncated += 1;
                    self.row = self.rows;
                }
            }
        }
        None
    }
}
