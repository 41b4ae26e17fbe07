//! Unit tests mirroring the `src/` module tree

mod io;

/// Packed RGBA buffer filled with one opaque colour
pub fn uniform_pixels(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    let [r, g, b] = rgb;
    [r, g, b, 255].repeat(width * height)
}

/// Packed RGBA buffer whose red channel holds the column and green the row
pub fn coordinate_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[x as u8, y as u8, 0, 255]);
        }
    }
    pixels
}
