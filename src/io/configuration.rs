//! Generation constants and runtime configuration defaults

use crate::spatial::Color;

// Default values for configurable parameters
/// Default number of majority-vote iterations
pub const DEFAULT_ITERATIONS: usize = 100_000;

/// Default window cell count (a 3x3 neighborhood)
pub const DEFAULT_WINDOW: usize = 9;

/// Default map width in cells
pub const DEFAULT_WIDTH: usize = 400;

/// Default map height in cells
pub const DEFAULT_HEIGHT: usize = 300;

/// Default palette used when none is supplied
pub const DEFAULT_PALETTE: [Color; 2] = [Color::YELLOW, Color::GREEN];

// Noise fill only ever draws from the leading palette entries
/// Number of palette entries reachable by the noise fill
pub const NOISE_PALETTE_SPAN: usize = 2;

/// Smallest allowed side of the smoothing neighborhood
pub const MIN_WINDOW_SIDE: usize = 3;

// Diagnostic rendering limits
/// Maximum columns shown by the textual preview
pub const PREVIEW_MAX_COLUMNS: usize = 10;
/// Maximum rows shown by the textual preview
pub const PREVIEW_MAX_ROWS: usize = 10;

/// Channels per cell in flat byte buffers
pub const CHANNELS: usize = 3;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Iterations between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 1_000;

// Output settings
/// Default PNG output path
pub const DEFAULT_OUTPUT: &str = "region_map.png";
/// Suffix added to visualization filenames
pub const VISUALIZATION_SUFFIX: &str = "_smoothing";
/// Number of frames captured for a visualization
pub const VISUALIZATION_FRAMES: usize = 100;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 50;
