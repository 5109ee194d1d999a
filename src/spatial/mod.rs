//! Spatial data structures for region maps
//!
//! This module contains:
//! - The color value type
//! - The bounds-checked color grid
//! - Smoothing window validation and neighborhood spans

/// RGB color values
pub mod color;
/// Fixed-size color grid
pub mod grid;
/// Smoothing window geometry
pub mod window;

pub use color::Color;
pub use grid::RegionMap;
pub use window::Window;
