//! Random region map generation by windowed majority smoothing
//!
//! A map starts as per-cell noise drawn from a small palette. Repeated majority
//! votes over randomly sampled square neighborhoods then grow the noise into
//! contiguous blob-like regions, suitable for terrain or biome maps, textures
//! and test fixtures.

#![forbid(unsafe_code)]

/// Noise fill, majority smoothing and the generation driver
pub mod algorithm;
/// Fragmentation statistics of generated maps
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Colors, the map grid and smoothing window geometry
pub mod spatial;

pub use algorithm::generator::{
    GenerationConfig, PaletteSampling, RegionGenerator, generate, generate_with_rng,
};
pub use io::error::{RegionError, Result};
pub use io::flat::{from_flat_buffer, to_flat_buffer};
pub use spatial::{Color, RegionMap, Window};
