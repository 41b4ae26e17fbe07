//! Rasterisation of a segment stream onto a fresh canvas

use crate::io::configuration::{BACKGROUND_COLOR, STROKE_COLOR, STROKE_WIDTH};
use crate::io::error::{Result, render_error};
use crate::raster::Raster;
use crate::tiling::params::{LayoutParams, Scheme};
use crate::tiling::pass::tile;
use crate::tiling::segment::Segment;
use image::RgbaImage;
use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Draws segments as stroked lines over a solid background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRenderer {
    width: u32,
    height: u32,
    /// Canvas colour painted before the first segment
    pub background: [u8; 3],
    /// Colour of segments without an override
    pub stroke: [u8; 3],
    /// Line width in pixels
    pub stroke_width: f32,
}

impl FrameRenderer {
    /// Renderer for a `width` x `height` canvas with the default styling
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: BACKGROUND_COLOR,
            stroke: STROKE_COLOR,
            stroke_width: STROKE_WIDTH,
        }
    }

    /// Paint the background, then stroke every segment in order
    ///
    /// Zero-length segments (a fan strip's origin) leave no mark.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated
    #[tracing::instrument(level = "debug", skip(self, segments), fields(width = self.width, height = self.height))]
    pub fn render<I>(&self, segments: I) -> Result<RgbaImage>
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut pixmap = Pixmap::new(self.width, self.height).ok_or_else(|| {
            render_error(&format!(
                "cannot allocate a {}x{} canvas",
                self.width, self.height
            ))
        })?;
        let [r, g, b] = self.background;
        pixmap.fill(Color::from_rgba8(r, g, b, 255));

        let stroke = Stroke {
            width: self.stroke_width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        let mut paint = Paint {
            anti_alias: true,
            ..Paint::default()
        };

        let mut drawn = 0usize;
        for segment in segments {
            if segment.length() <= f64::EPSILON {
                continue;
            }
            let mut builder = PathBuilder::new();
            builder.move_to(segment.start[0] as f32, segment.start[1] as f32);
            builder.line_to(segment.end[0] as f32, segment.end[1] as f32);
            let Some(path) = builder.finish() else {
                continue;
            };

            let [r, g, b] = segment.color.unwrap_or(self.stroke);
            paint.set_color_rgba8(r, g, b, 255);
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            drawn += 1;
        }
        tracing::debug!(drawn, "frame rendered");

        // Opaque background means premultiplied and straight RGBA coincide
        RgbaImage::from_raw(self.width, self.height, pixmap.take())
            .ok_or_else(|| render_error(&"canvas size does not match its pixel buffer"))
    }

    /// Run one tiling pass over `raster` and render its segments
    ///
    /// # Errors
    ///
    /// Returns an error if `params` are invalid or the canvas cannot be allocated
    pub fn render_pass(
        &self,
        raster: Raster<'_>,
        scheme: Scheme,
        params: &LayoutParams,
    ) -> Result<RgbaImage> {
        let mut tiling = tile(raster, scheme, params)?;
        let frame = self.render(tiling.by_ref())?;
        if tiling.truncated_strips() > 0 {
            tracing::debug!(
                truncated = tiling.truncated_strips(),
                "strips stopped at the raster edge"
            );
        }
        Ok(frame)
    }
}
