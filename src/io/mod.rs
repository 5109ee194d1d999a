//! Input/output: errors, configuration, marshalling, export and the CLI

/// Command-line interface and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Flat R, G, B byte buffer marshalling
pub mod flat;
/// Bitmap rendering and PNG export
pub mod image;
/// Terminal progress display
pub mod progress;
/// GIF capture of the smoothing process
pub mod visualization;
