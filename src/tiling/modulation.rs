//! Mapping from normalised intensity to the filled fraction of a strip

use crate::tiling::params::LayoutParams;

/// Number of samples in the fan's moving average
pub const SMOOTHING_WINDOW_LEN: usize = 5;

/// Clamp a fraction into `[min, max]`, upper bound taking precedence
pub fn clamp_to_range(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Filled fraction of a rectangular strip for a normalised intensity
///
/// Computes `intensity / (max - min) + min` and clamps the result into
/// `[pct_min/100, pct_max/100]`. Without the clamp a bright column would draw a
/// segment wider than its own pitch.
pub fn modulate(intensity: f64, params: &LayoutParams) -> f64 {
    let min = params.min_fraction();
    let max = params.max_fraction();
    clamp_to_range(intensity / (max - min) + min, min, max)
}

/// Moving average over the last [`SMOOTHING_WINDOW_LEN`] clamped samples of one fan strip
///
/// Starts zero-filled, so the first anchors of every strip see an attenuated
/// average and the strip fades in from its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingWindow {
    samples: [f64; SMOOTHING_WINDOW_LEN],
    next: usize,
}

impl Default for SmoothingWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl SmoothingWindow {
    /// Create a zero-filled window
    pub const fn new() -> Self {
        Self {
            samples: [0.0; SMOOTHING_WINDOW_LEN],
            next: 0,
        }
    }

    /// Clamp `intensity` into the layout's fraction range, record it and return the new average
    pub fn push(&mut self, intensity: f64, params: &LayoutParams) -> f64 {
        let clamped = clamp_to_range(intensity, params.min_fraction(), params.max_fraction());
        if let Some(slot) = self.samples.get_mut(self.next) {
            *slot = clamped;
        }
        self.next = (self.next + 1) % SMOOTHING_WINDOW_LEN;
        self.average()
    }

    /// Arithmetic mean of the window, zeros from the warm-up included
    pub fn average(&self) -> f64 {
        self.samples.iter().sum::<f64>() / SMOOTHING_WINDOW_LEN as f64
    }
}
