//! Frame-to-frame parameter animation

/// Animation state threaded through successive passes
pub mod state;
/// Bounce-at-limits scalar oscillator
pub mod sweep;

pub use state::{AnimationState, SweepToggles};
pub use sweep::TriangleSweep;
