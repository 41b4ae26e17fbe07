//! Radial fan of strips centred on the middle of the image's bottom edge
//!
//! Angles run from `angle_start` to `angle_end` in `num_strips` equal increments,
//! both ends included. The left half of the range (negative angles) sweeps the
//! centerline from straight up to the left edge, the right half from the right edge
//! back up, so `[-90, 90]` covers the whole upper half-plane. Each strip walks its
//! anchor outward until it leaves the image; the segment drawn at each anchor spans
//! the slice's width at that radius, scaled by a smoothed brightness.

use crate::io::error::Result;
use crate::raster::Raster;
use crate::raster::sampling::neighborhood_intensity;
use crate::tiling::modulation::SmoothingWindow;
use crate::tiling::params::LayoutParams;
use crate::tiling::segment::{Segment, Strip};
use std::f64::consts::FRAC_PI_4;

/// Angle range selecting the sign pattern of a strip's vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanQuadrant {
    /// `[-90°, -45°)`: centerline between up and up-left
    LeftSteep,
    /// `[-45°, 0°)`: centerline between up-left and left
    LeftShallow,
    /// `[0°, 90°]`: centerline between right and up
    Right,
}

impl FanQuadrant {
    /// Quadrant containing `angle` (radians)
    pub fn of(angle: f64) -> Self {
        if angle < -FRAC_PI_4 {
            Self::LeftSteep
        } else if angle < 0.0 {
            Self::LeftShallow
        } else {
            Self::Right
        }
    }

    /// `(direction, spread)` unit vectors for `angle` (radians)
    ///
    /// `LeftSteep` mirrors the spread of `LeftShallow`; segments are symmetric about
    /// their anchor so both draw the same line.
    pub fn vectors(self, angle: f64) -> ([f64; 2], [f64; 2]) {
        let (s, c) = angle.sin_cos();
        match self {
            Self::LeftSteep => ([-c, s], [s, c]),
            Self::LeftShallow => ([-c, s], [-s, -c]),
            Self::Right => ([c, -s], [-s, -c]),
        }
    }
}

/// `(direction, spread)` unit vectors of the strip at `angle` (radians)
pub fn fan_vectors(angle: f64) -> ([f64; 2], [f64; 2]) {
    FanQuadrant::of(angle).vectors(angle)
}

/// Width of a fan slice spanning `angle_increment` radians at `distance` from the origin
pub fn fan_strip_width(distance: f64, angle_increment: f64) -> f64 {
    2.0 * distance * (angle_increment / 2.0).tan()
}

/// Pixel on which the 3x3 sampling neighbourhood of `anchor` is centred
///
/// The neighbourhood sits one row above the anchor, which keeps the first anchor
/// (on the bottom row) fully inside the image.
pub fn neighborhood_center(anchor: [f64; 2]) -> [i64; 2] {
    [anchor[0].floor() as i64, anchor[1].floor() as i64 - 1]
}

#[derive(Debug, Clone)]
struct StripWalk {
    anchor: [f64; 2],
    direction: [f64; 2],
    spread: [f64; 2],
    window: SmoothingWindow,
}

/// Lazy segment stream for the radial-fan scheme
#[derive(Debug, Clone)]
pub struct FanTiling<'a> {
    raster: Raster<'a>,
    params: LayoutParams,
    origin: [f64; 2],
    angle_start: f64,
    angle_increment: f64,
    next_strip: u32,
    walk: Option<StripWalk>,
    truncated: usize,
}

impl<'a> FanTiling<'a> {
    /// Prepare a pass over `raster`
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fail validation
    pub fn new(raster: Raster<'a>, params: LayoutParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            raster,
            params,
            origin: [raster.width() as f64 / 2.0, (raster.height() - 1) as f64],
            angle_start: f64::from(params.angle_start).to_radians(),
            angle_increment: params.angle_increment_degrees().to_radians(),
            next_strip: 0,
            walk: None,
            truncated: 0,
        })
    }

    /// Point all strips radiate from
    pub const fn origin(&self) -> [f64; 2] {
        self.origin
    }

    /// Angular width of one slice in radians
    pub const fn angle_increment(&self) -> f64 {
        self.angle_increment
    }

    /// Number of strips in the pass, both end angles included
    pub const fn strip_count(&self) -> u32 {
        self.params.num_strips + 1
    }

    /// Angle of strip `index` in radians
    pub fn angle(&self, index: u32) -> f64 {
        f64::from(index).mul_add(self.angle_increment, self.angle_start)
    }

    /// Strips whose traversal stopped at an out-of-bounds neighbourhood so far
    pub const fn truncated_strips(&self) -> usize {
        self.truncated
    }

    fn start_next_strip(&mut self) -> Option<StripWalk> {
        if self.next_strip >= self.strip_count() {
            return None;
        }
        let (direction, spread) = fan_vectors(self.angle(self.next_strip));
        self.next_strip += 1;
        Some(StripWalk {
            anchor: self.origin,
            direction,
            spread,
            window: SmoothingWindow::new(),
        })
    }

    fn emit(&self, walk: &mut StripWalk) -> Result<Segment> {
        let center = neighborhood_center(walk.anchor);
        let intensity = neighborhood_intensity(&self.raster, center)?;
        let average = walk.window.push(intensity, &self.params);

        let distance = (walk.anchor[0] - self.origin[0]).hypot(walk.anchor[1] - self.origin[1]);
        let strip = Strip {
            anchor: walk.anchor,
            direction: walk.direction,
            spread: walk.spread,
            half_width: fan_strip_width(distance, self.angle_increment) / 2.0 * average,
        };

        let color = if self.params.solid_color {
            None
        } else {
            Some(self.raster.rgb_at(center[0], center[1])?)
        };
        Ok(strip.segment(color))
    }
}

impl Iterator for FanTiling<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            let mut walk = match self.walk.take() {
                Some(walk) => walk,
                None => self.start_next_strip()?,
            };

            if !self.raster.contains(walk.anchor[0], walk.anchor[1]) {
                continue;
            }

            match self.emit(&mut walk) {
                Ok(segment) => {
                    let step = self.params.step_size;
                    walk.anchor[0] = walk.direction[0].mul_add(step, walk.anchor[0]);
                    walk.anchor[1] = walk.direction[1].mul_add(step, walk.anchor[1]);
                    self.walk = Some(walk);
                    return Some(segment);
                }
                Err(error) => {
                    tracing::trace!(strip = self.next_strip - 1, %error, "fan strip ended early");
                    self.truncated += 1;
                }
            }
        }
    }
}
