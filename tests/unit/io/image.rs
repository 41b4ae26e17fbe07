//! Tests for image decoding and PNG export

#[cfg(test)]
mod tests {
    use ::image::{Rgba, RgbaImage};
    use fukudatile::TilingError;
    use fukudatile::io::image::{export_png, load_rgba, raster_view};

    // Tests a decoded image is viewed with its own size and pixels
    // Verified by transposing width and height in the view
    #[test]
    fn test_load_and_view() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("source.png");
        let mut source = RgbaImage::from_pixel(6, 3, Rgba([0, 0, 0, 255]));
        source.put_pixel(5, 1, Rgba([200, 100, 50, 255]));
        source.save(&path).expect("write fixture");

        let image = load_rgba(&path).expect("decodes");
        let raster = raster_view(&image).expect("non-empty");

        assert_eq!((raster.width(), raster.height()), (6, 3));
        assert_eq!(raster.rgb_at(5, 1).expect("in bounds"), [200, 100, 50]);
        assert_eq!(raster.intensity_at(5, 1).expect("in bounds"), 350);
    }

    // Tests a missing file reports its path
    // Verified by converting through the pathless From impl
    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.png");

        match load_rgba(&path) {
            Err(TilingError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result {other:?}"),
        }
    }

    // Tests export creates missing directories and writes a PNG
    // Verified by saving without creating the parent
    #[test]
    fn test_export_creates_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("out.png");
        let frame = RgbaImage::from_pixel(4, 2, Rgba([255, 255, 220, 255]));

        export_png(&frame, &path).expect("export");

        let written = load_rgba(&path).expect("readable");
        assert_eq!(written, frame);
    }
}
