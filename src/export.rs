use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use log::info;
use thiserror::Error;

use crate::surface::Surface;

/// Fixed output name, written to the working directory.
pub const EXPORT_FILE_NAME: &str = "new-sketch.jpg";

/// Errors surfaced by image export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("surface has no pixels to export")]
    EmptySurface,
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Flattens the surface onto opaque white and writes it as JPEG to `path`.
pub fn write_jpeg(surface: &Surface, path: &Path) -> Result<(), ExportError> {
    let [width, height] = surface.size();
    if width == 0 || height == 0 {
        return Err(ExportError::EmptySurface);
    }

    let mut flattened = RgbImage::new(width as u32, height as u32);
    for (x, y, out) in flattened.enumerate_pixels_mut() {
        let px = surface.pixel(x as usize, y as usize);
        // Color32 is premultiplied, so blending over opaque white reduces to
        // adding the remaining alpha headroom per channel.
        let headroom = 255 - px.a();
        *out = Rgb([
            px.r().saturating_add(headroom),
            px.g().saturating_add(headroom),
            px.b().saturating_add(headroom),
        ]);
    }

    flattened.save_with_format(path, ImageFormat::Jpeg)?;
    info!("exported sketch to {}", path.display());
    Ok(())
}

/// Writes the sketch under the fixed export name and returns the path.
pub fn export_sketch(surface: &Surface) -> Result<PathBuf, ExportError> {
    let path = PathBuf::from(EXPORT_FILE_NAME);
    write_jpeg(surface, &path)?;
    Ok(path)
}
