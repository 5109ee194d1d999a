/// Noise fill and iterative majority smoothing
pub mod generator;
/// Injectable random source
pub mod random;
/// Single windowed majority vote
pub mod smoothing;
