//! Conversion between region maps and flat R, G, B byte buffers

use crate::io::configuration::CHANNELS;
use crate::io::error::{Result, invalid_argument};
use crate::spatial::{Color, RegionMap};

/// Flatten a map into R, G, B triples, row after row
pub fn to_flat_buffer(map: &RegionMap) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(map.width() * map.height() * CHANNELS);
    for (_, _, color) in map.pixels() {
        bytes.extend_from_slice(&color.to_rgb());
    }
    bytes
}

/// Rebuild a `width` x `height` map from R, G, B triples laid out row after row
///
/// # Errors
///
/// Returns `InvalidArgument` if:
/// - `bytes.len()` is not exactly `width * height * 3`
/// - Either dimension is zero
pub fn from_flat_buffer(bytes: &[u8], width: usize, height: usize) -> Result<RegionMap> {
    let expected = width
        .checked_mul(height)
        .and_then(|cells| cells.checked_mul(CHANNELS));
    if expected != Some(bytes.len()) {
        let needed = expected.map_or_else(|| "more than usize::MAX".to_string(), |n| n.to_string());
        return Err(invalid_argument(
            "bytes",
            &format!("{} bytes", bytes.len()),
            &format!("a {width}x{height} map with {CHANNELS} channels needs {needed} bytes"),
        ));
    }

    let mut map = RegionMap::new(width, height)?;
    for (index, chunk) in bytes.chunks_exact(CHANNELS).enumerate() {
        if let &[red, green, blue] = chunk {
            map.set(index % width, index / width, Color::new(red, green, blue))?;
        }
    }

    Ok(map)
}
