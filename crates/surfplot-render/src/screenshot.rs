//! In-memory image encoding for composed figures.

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::RenderResult;

/// Options for exporting a figure.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Whether background-colored pixels become fully transparent.
    pub transparent_background: bool,
}

/// Encodes an RGBA image as PNG.
///
/// # Returns
/// PNG-encoded image data as a byte vector.
pub fn encode_png(image: &RgbaImage) -> RenderResult<Vec<u8>> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Encodes an RGBA image as PNG, applying export options.
///
/// `background` is the RGBA value the canvas was cleared with.
pub fn encode_png_with_options(
    image: &RgbaImage,
    background: [u8; 4],
    options: &ExportOptions,
) -> RenderResult<Vec<u8>> {
    if !options.transparent_background {
        return encode_png(image);
    }
    let mut image = image.clone();
    clear_background(&mut image, background);
    encode_png(&image)
}

/// Makes every pixel equal to `background` fully transparent.
pub fn clear_background(image: &mut RgbaImage, background: [u8; 4]) {
    for pixel in image.pixels_mut() {
        if pixel.0 == background {
            *pixel = Rgba([background[0], background[1], background[2], 0]);
        }
    }
}
