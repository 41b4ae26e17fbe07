//! Input/output operations and error handling

/// Command-line interface and batch driver
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Progress display
pub mod progress;
/// Segment rasterisation
pub mod render;
/// Animated GIF export
pub mod visualization;
