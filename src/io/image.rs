//! Bitmap projection and PNG export of finished maps
//!
//! Generation never depends on this module. Anything able to show a map
//! implements [`Renderer`] and reads cells through the map's accessors.

use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::io::configuration::CHANNELS;
use crate::io::error::{RegionError, Result};
use crate::spatial::RegionMap;

/// Projects a region map onto a platform bitmap format
pub trait Renderer {
    /// Bitmap type produced
    type Output;

    /// Render every cell of `map`
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be represented in the output format
    fn render(&self, map: &RegionMap) -> Result<Self::Output>;
}

/// Renders into an `image::RgbImage`
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbRenderer;

impl Renderer for RgbRenderer {
    type Output = RgbImage;

    fn render(&self, map: &RegionMap) -> Result<RgbImage> {
        let (width, height) = image_dimensions(map)?;
        let mut img = RgbImage::new(width, height);
        for (x, y, color) in map.pixels() {
            img.put_pixel(x as u32, y as u32, Rgb(color.to_rgb()));
        }
        Ok(img)
    }
}

/// Renders into interleaved B, G, R bytes, row after row
///
/// This is the layout of an 8-bit 3-channel OpenCV matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct BgrRenderer;

impl Renderer for BgrRenderer {
    type Output = Vec<u8>;

    fn render(&self, map: &RegionMap) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(map.width() * map.height() * CHANNELS);
        for (_, _, color) in map.pixels() {
            bytes.extend_from_slice(&color.to_bgr());
        }
        Ok(bytes)
    }
}

/// Render a map as an opaque RGBA image, the form GIF frames need
///
/// # Errors
///
/// Returns an error if a dimension does not fit in `u32`
pub fn render_rgba(map: &RegionMap) -> Result<RgbaImage> {
    let (width, height) = image_dimensions(map)?;
    let mut img = RgbaImage::new(width, height);
    for (x, y, color) in map.pixels() {
        let [red, green, blue] = color.to_rgb();
        img.put_pixel(x as u32, y as u32, Rgba([red, green, blue, u8::MAX]));
    }
    Ok(img)
}

/// Export a map as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - A dimension does not fit in `u32`
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png(map: &RegionMap, output_path: &Path) -> Result<()> {
    let img = RgbRenderer.render(map)?;

    create_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| RegionError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Create the directory holding `path` if it does not exist yet
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created
pub fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RegionError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

fn image_dimensions(map: &RegionMap) -> Result<(u32, u32)> {
    let width = u32::try_from(map.width()).map_err(|e| {
        crate::io::error::invalid_argument("width", &map.width(), &e)
    })?;
    let height = u32::try_from(map.height()).map_err(|e| {
        crate::io::error::invalid_argument("height", &map.height(), &e)
    })?;
    Ok((width, height))
}
