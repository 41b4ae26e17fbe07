//! Tests for stroking segment streams onto a canvas

#[cfg(test)]
mod tests {
    use crate::uniform_pixels;
    use fukudatile::io::configuration::{BACKGROUND_COLOR, STROKE_COLOR};
    use fukudatile::io::render::FrameRenderer;
    use fukudatile::raster::Raster;
    use fukudatile::tiling::{LayoutParams, Scheme, Segment};

    fn rgb(frame: &::image::RgbaImage, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = frame.get_pixel(x, y).0;
        [r, g, b]
    }

    // Tests an empty stream leaves only the background
    // Verified by skipping the background fill
    #[test]
    fn test_empty_canvas_is_background() {
        let frame = FrameRenderer::new(8, 5).render(std::iter::empty()).expect("renders");

        assert_eq!(frame.dimensions(), (8, 5));
        assert!(frame.pixels().all(|p| p.0 == [255, 255, 220, 255]));
    }

    // Tests a segment is stroked in its override colour
    // Verified by ignoring the override
    #[test]
    fn test_segment_colour_override() {
        let segment = Segment {
            start: [1.0, 5.0],
            end: [9.0, 5.0],
            color: Some([255, 0, 0]),
        };
        let frame = FrameRenderer::new(10, 10)
            .render([segment])
            .expect("renders");

        let [r, g, b] = rgb(&frame, 5, 4);
        assert!(r > 200 && g < 60 && b < 60, "got {:?}", [r, g, b]);
        assert_eq!(rgb(&frame, 5, 0), BACKGROUND_COLOR);
    }

    // Tests segments without an override use the stroke colour
    // Verified by falling back to the background colour
    #[test]
    fn test_default_stroke_colour() {
        let segment = Segment {
            start: [5.0, 1.0],
            end: [5.0, 9.0],
            color: None,
        };
        let frame = FrameRenderer::new(10, 10)
            .render([segment])
            .expect("renders");

        let [r, g, b] = rgb(&frame, 4, 5);
        let [sr, sg, sb] = STROKE_COLOR;
        assert!(r.abs_diff(sr) < 40 && g.abs_diff(sg) < 40 && b.abs_diff(sb) < 40);
    }

    // Tests zero-length segments leave no mark
    // Verified by drawing round caps for degenerate segments
    #[test]
    fn test_zero_length_segment_ignored() {
        let segment = Segment {
            start: [5.0, 5.0],
            end: [5.0, 5.0],
            color: Some([0, 0, 0]),
        };
        let frame = FrameRenderer::new(10, 10)
            .render([segment])
            .expect("renders");

        assert!(frame.pixels().all(|p| p.0 == [255, 255, 220, 255]));
    }

    // Tests a full pass draws over the background
    // Verified by rendering before the pass is consumed
    #[test]
    fn test_render_pass_draws() {
        let pixels = uniform_pixels(24, 24, [255, 255, 255]);
        let raster = Raster::new(24, 24, &pixels).expect("valid raster");
        let renderer = FrameRenderer::new(24, 24);

        for scheme in [Scheme::Rectangular, Scheme::Fan] {
            let frame = renderer
                .render_pass(raster, scheme, &LayoutParams::default())
                .expect("renders");
            assert!(frame.pixels().any(|p| p.0 != [255, 255, 220, 255]));
        }
    }

    // Tests a pass with invalid parameters fails instead of rendering
    // Verified by rendering an empty frame on invalid parameters
    #[test]
    fn test_render_pass_invalid_params() {
        let pixels = uniform_pixels(8, 8, [0, 0, 0]);
        let raster = Raster::new(8, 8, &pixels).expect("valid raster");
        let params = LayoutParams {
            num_strips: 0,
            ..LayoutParams::default()
        };

        let result = FrameRenderer::new(8, 8).render_pass(raster, Scheme::Fan, &params);
        assert!(result.is_err());
    }

    // Tests custom styling replaces the defaults
    // Verified by always painting the default background
    #[test]
    fn test_custom_background() {
        let mut renderer = FrameRenderer::new(3, 3);
        renderer.background = [0, 0, 0];
        let frame = renderer.render(std::iter::empty()).expect("renders");
        assert!(frame.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }
}
