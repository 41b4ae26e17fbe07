//! Source image decoding and PNG export of rendered frames

use crate::io::error::{Result, TilingError};
use crate::raster::Raster;
use image::RgbaImage;
use std::path::Path;

/// Decode an image file into an owned RGBA buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a supported image format
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| TilingError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Borrow a decoded image as a [`Raster`]
///
/// # Errors
///
/// Returns an error if the image has a zero dimension
pub fn raster_view(image: &RgbaImage) -> Result<Raster<'_>> {
    Raster::new(
        image.width() as usize,
        image.height() as usize,
        image.as_raw(),
    )
}

/// Save a rendered frame as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(frame: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    frame
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
