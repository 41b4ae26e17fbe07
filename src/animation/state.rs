//! Per-frame evolution of the layout parameters

use crate::animation::sweep::TriangleSweep;
use crate::io::configuration::{
    ANGLE_END_SWEEP, ANGLE_END_SWEEP_STEP, NUM_STRIPS_SWEEP, NUM_STRIPS_SWEEP_STEP,
    PCT_MAX_SWEEP_HIGH, PCT_MAX_SWEEP_STEP, STRIP_WIDTH_SWEEP, STRIP_WIDTH_SWEEP_STEP,
};
use crate::io::error::Result;
use crate::tiling::params::LayoutParams;

/// Which parameters oscillate from frame to frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
// Each animation is an independent on/off switch
#[allow(clippy::struct_excessive_bools)]
pub struct SweepToggles {
    /// Vary the rectangular strip pitch
    pub pulse: bool,
    /// Vary the number of fan strips
    pub evolve: bool,
    /// Vary the maximum width percentage
    pub breathe: bool,
    /// Vary the fan's end angle
    pub unfurl: bool,
}

/// Enabled sweeps, one per animated parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sweeps {
    /// Rectangular strip pitch
    pub strip_width: Option<TriangleSweep<u32>>,
    /// Fan strip count
    pub num_strips: Option<TriangleSweep<u32>>,
    /// Maximum width percentage
    pub pct_max: Option<TriangleSweep<u32>>,
    /// Fan end angle in degrees
    pub angle_end: Option<TriangleSweep<i32>>,
}

impl Sweeps {
    /// Build the enabled sweeps starting from the current parameter values
    ///
    /// The maximum width never falls to `pct_min` and the end angle never reaches
    /// `angle_start`: both lower limits sit one step above them.
    ///
    /// # Errors
    ///
    /// Returns an error if a sweep's limits collapse for the given parameters
    pub fn new(params: &LayoutParams, toggles: SweepToggles) -> Result<Self> {
        let strip_width = toggles
            .pulse
            .then(|| {
                TriangleSweep::new(
                    params.strip_width,
                    STRIP_WIDTH_SWEEP_STEP,
                    STRIP_WIDTH_SWEEP.0,
                    STRIP_WIDTH_SWEEP.1,
                )
            })
            .transpose()?;

        let num_strips = toggles
            .evolve
            .then(|| {
                TriangleSweep::new(
                    params.num_strips,
                    NUM_STRIPS_SWEEP_STEP,
                    NUM_STRIPS_SWEEP.0,
                    NUM_STRIPS_SWEEP.1,
                )
            })
            .transpose()?;

        let pct_max = toggles
            .breathe
            .then(|| {
                TriangleSweep::new(
                    params.pct_max,
                    PCT_MAX_SWEEP_STEP,
                    params.pct_min + PCT_MAX_SWEEP_STEP,
                    PCT_MAX_SWEEP_HIGH,
                )
            })
            .transpose()?;

        let angle_end = toggles
            .unfurl
            .then(|| {
                TriangleSweep::new(
                    params.angle_end,
                    ANGLE_END_SWEEP_STEP,
                    ANGLE_END_SWEEP
                        .0
                        .max(params.angle_start + ANGLE_END_SWEEP_STEP),
                    ANGLE_END_SWEEP.1,
                )
            })
            .transpose()?;

        Ok(Self {
            strip_width,
            num_strips,
            pct_max,
            angle_end,
        })
    }

    /// Whether any parameter is animated
    pub const fn any(&self) -> bool {
        self.strip_width.is_some()
            || self.num_strips.is_some()
            || self.pct_max.is_some()
            || self.angle_end.is_some()
    }

    /// Advance every enabled sweep by one tick
    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            strip_width: self.strip_width.map(TriangleSweep::advance),
            num_strips: self.num_strips.map(TriangleSweep::advance),
            pct_max: self.pct_max.map(TriangleSweep::advance),
            angle_end: self.angle_end.map(TriangleSweep::advance),
        }
    }

    /// Overwrite the swept fields of `params` with the current sweep values
    pub fn apply(&self, params: &mut LayoutParams) {
        if let Some(sweep) = self.strip_width {
            params.strip_width = sweep.value();
        }
        if let Some(sweep) = self.num_strips {
            params.num_strips = sweep.value();
        }
        if let Some(sweep) = self.pct_max {
            params.pct_max = sweep.value();
        }
        if let Some(sweep) = self.angle_end {
            params.angle_end = sweep.value();
        }
    }
}

/// Layout parameters together with the sweeps that evolve them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    params: LayoutParams,
    sweeps: Sweeps,
    frame: usize,
}

impl AnimationState {
    /// Start an animation from `params`
    ///
    /// Swept values outside their sweep limits are clamped into them before the
    /// first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` are invalid before or after clamping, or a
    /// sweep cannot be built for them
    pub fn new(params: LayoutParams, toggles: SweepToggles) -> Result<Self> {
        params.validate()?;
        let sweeps = Sweeps::new(&params, toggles)?;
        let mut params = params;
        sweeps.apply(&mut params);
        params.validate()?;
        Ok(Self {
            params,
            sweeps,
            frame: 0,
        })
    }

    /// Parameters for the current frame
    pub const fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Sweeps driving the animation
    pub const fn sweeps(&self) -> &Sweeps {
        &self.sweeps
    }

    /// Number of ticks applied so far
    pub const fn frame(&self) -> usize {
        self.frame
    }

    /// Apply one animation tick to every enabled sweep
    #[must_use]
    pub fn advance(self) -> Self {
        let sweeps = self.sweeps.advance();
        let mut params = self.params;
        sweeps.apply(&mut params);
        Self {
            params,
            sweeps,
            frame: self.frame + 1,
        }
    }
}
