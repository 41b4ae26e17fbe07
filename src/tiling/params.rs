//! Layout parameters shared by both tiling schemes

use crate::io::configuration::{
    DEFAULT_ANGLE_END, DEFAULT_ANGLE_START, DEFAULT_NUM_STRIPS, DEFAULT_PCT_MAX, DEFAULT_PCT_MIN,
    DEFAULT_STEP_SIZE, DEFAULT_STRIP_WIDTH, MAX_FAN_ANGLE, MAX_NUM_STRIPS, MAX_PERCENT,
    MIN_FAN_ANGLE,
};
use crate::io::error::{Result, invalid_parameter};

/// Geometric layout of the strips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Scheme {
    /// Vertical bands of horizontal segments, scanned column by column
    Rectangular,
    /// Slices radiating from the middle of the bottom edge
    #[default]
    Fan,
}

/// Animation-visible layout state read by the geometry generators
///
/// Only [`crate::animation::state::AnimationState`] mutates it between passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Pitch of a rectangular strip in pixels
    pub strip_width: u32,
    /// Number of angular slices in the fan
    pub num_strips: u32,
    /// Distance between consecutive anchors along a strip
    pub step_size: f64,
    /// Lower bound of the filled strip fraction, in percent
    pub pct_min: u32,
    /// Upper bound of the filled strip fraction, in percent
    pub pct_max: u32,
    /// First fan angle in degrees
    pub angle_start: i32,
    /// Last fan angle in degrees
    pub angle_end: i32,
    /// Draw every segment in the default stroke colour instead of the anchor's colour
    pub solid_color: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            strip_width: DEFAULT_STRIP_WIDTH,
            num_strips: DEFAULT_NUM_STRIPS,
            step_size: DEFAULT_STEP_SIZE,
            pct_min: DEFAULT_PCT_MIN,
            pct_max: DEFAULT_PCT_MAX,
            angle_start: DEFAULT_ANGLE_START,
            angle_end: DEFAULT_ANGLE_END,
            solid_color: true,
        }
    }
}

impl LayoutParams {
    /// Reject parameters no pass could render sensibly
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilingError::InvalidParameter`] naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.strip_width == 0 {
            return Err(invalid_parameter(
                "strip_width",
                &self.strip_width,
                &"must be positive",
            ));
        }
        if self.num_strips == 0 {
            return Err(invalid_parameter(
                "num_strips",
                &self.num_strips,
                &"must be positive",
            ));
        }
        if self.num_strips > MAX_NUM_STRIPS {
            return Err(invalid_parameter(
                "num_strips",
                &self.num_strips,
                &format!("must not exceed {MAX_NUM_STRIPS}"),
            ));
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(invalid_parameter(
                "step_size",
                &self.step_size,
                &"must be a positive finite number",
            ));
        }
        if self.pct_max > MAX_PERCENT {
            return Err(invalid_parameter(
                "pct_max",
                &self.pct_max,
                &format!("must not exceed {MAX_PERCENT}"),
            ));
        }
        if self.pct_max <= self.pct_min {
            return Err(invalid_parameter(
                "pct_max",
                &self.pct_max,
                &format!("must be greater than pct_min ({})", self.pct_min),
            ));
        }
        for (name, angle) in [
            ("angle_start", self.angle_start),
            ("angle_end", self.angle_end),
        ] {
            if !(MIN_FAN_ANGLE..=MAX_FAN_ANGLE).contains(&angle) {
                return Err(invalid_parameter(
                    name,
                    &angle,
                    &format!("must lie within [{MIN_FAN_ANGLE}, {MAX_FAN_ANGLE}] degrees"),
                ));
            }
        }
        if self.angle_end <= self.angle_start {
            return Err(invalid_parameter(
                "angle_end",
                &self.angle_end,
                &format!("must be greater than angle_start ({})", self.angle_start),
            ));
        }
        if self.angle_increment_degrees() >= 180.0 {
            return Err(invalid_parameter(
                "num_strips",
                &self.num_strips,
                &"each fan slice must span less than 180 degrees",
            ));
        }
        Ok(())
    }

    /// Lower bound of the filled fraction in `[0, 1]`
    pub fn min_fraction(&self) -> f64 {
        f64::from(self.pct_min) / 100.0
    }

    /// Upper bound of the filled fraction in `[0, 1]`
    pub fn max_fraction(&self) -> f64 {
        f64::from(self.pct_max) / 100.0
    }

    /// Angular width of one fan slice in degrees
    pub fn angle_increment_degrees(&self) -> f64 {
        f64::from(self.angle_end - self.angle_start) / f64::from(self.num_strips.max(1))
    }
}
