//! Frame capture and GIF export for animated tiling runs

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, TilingError};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Rendered frames of one animation, in tick order
#[derive(Debug, Default)]
pub struct FrameCapture {
    frames: Vec<RgbaImage>,
}

impl FrameCapture {
    /// Create an empty capture sized for `expected_frames`
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
        }
    }

    /// Append a rendered frame
    pub fn push(&mut self, frame: RgbaImage) {
        self.frames.push(frame);
    }

    /// Number of captured frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been captured
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames kept for a given requested delay
    ///
    /// Delays shorter than viewers honour are stretched to the viewer minimum and
    /// intermediate frames dropped to preserve the apparent speed; a 5 ms request
    /// against a 20 ms minimum keeps every 4th frame.
    pub fn skip_factor(frame_delay_ms: u32) -> usize {
        if frame_delay_ms == 0 {
            return 1;
        }
        if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        }
    }

    /// Encode the captured frames as a looping GIF
    ///
    /// The last frame is held longer so the loop point is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(TilingError::InvalidSourceData {
                reason: "No frames captured for animation".to_string(),
            });
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip = Self::skip_factor(frame_delay_ms);
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);

        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .step_by(skip)
            .map(|img| Frame::from_parts(img.clone(), 0, 0, delay))
            .collect();

        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                last.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * FINAL_FRAME_HOLD, 1),
            ));
        }

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| TilingError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e: image::ImageError| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)
    }
}
