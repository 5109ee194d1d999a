//! Analysis of generated maps

/// Fragmentation statistics: transitions, regions and color counts
pub mod statistics;
