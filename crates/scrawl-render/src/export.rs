//! PNG export of a painted raster surface.

use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no drawing surface attached")]
    MissingSurface,
    #[error("surface dimensions do not match pixel data")]
    BadDimensions,
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// An RGBA8 raster surface, as painted by a rasterizing backend.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl RasterSurface {
    /// Create a white surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; width as usize * height as usize * 4],
        }
    }
}

/// Encode the surface to PNG bytes.
///
/// Export with no surface attached is not an application error: it is
/// logged and surfaced as [`ExportError::MissingSurface`] so callers can
/// treat it as a no-op.
pub fn export_png(surface: Option<&RasterSurface>) -> Result<Vec<u8>, ExportError> {
    let Some(surface) = surface else {
        log::warn!("export requested with no drawing surface attached");
        return Err(ExportError::MissingSurface);
    };
    if surface.pixels.len() as u128 != surface.width as u128 * surface.height as u128 * 4 {
        return Err(ExportError::BadDimensions);
    }

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, surface.width, surface.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&surface.pixels)?;
    writer.finish()?;
    Ok(out)
}
