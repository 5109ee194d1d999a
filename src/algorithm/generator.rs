//! Region map generation: palette noise followed by majority smoothing
//!
//! A [`RegionGenerator`] validates its parameters, fills a fresh map with noise
//! on construction, then applies one majority vote per iteration. Callers can
//! step it with [`RegionGenerator::execute_iteration`] or finish it in one go
//! with [`RegionGenerator::run`].

use log::debug;
use rand::{Rng, rngs::StdRng};

use crate::algorithm::random::RandomSelector;
use crate::algorithm::smoothing::{VoteOutcome, majority_vote};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_ITERATIONS, DEFAULT_WIDTH, DEFAULT_WINDOW, NOISE_PALETTE_SPAN,
};
use crate::io::error::{Result, invalid_argument};
use crate::io::visualization::VisualizationCapture;
use crate::spatial::{Color, RegionMap, Window};

/// Which palette entries the noise fill may draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteSampling {
    /// Only the first two entries, whatever the palette length
    ///
    /// Later entries are never placed by the noise fill, and smoothing only
    /// copies existing colors, so they never appear in the result.
    #[default]
    FirstTwo,
    /// Every palette entry with equal probability
    Full,
}

impl PaletteSampling {
    /// Number of leading palette entries the noise fill draws from
    pub fn span(self, palette_len: usize) -> usize {
        match self {
            Self::FirstTwo => palette_len.min(NOISE_PALETTE_SPAN),
            Self::Full => palette_len,
        }
    }
}

/// Parameters of one generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Map width in cells
    pub width: usize,
    /// Map height in cells
    pub height: usize,
    /// Number of majority votes; 0 leaves pure noise
    pub iterations: usize,
    /// Neighborhood cell count; its square root must be an odd integer >= 3
    pub window: usize,
    /// Noise fill palette policy
    pub sampling: PaletteSampling,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            iterations: DEFAULT_ITERATIONS,
            window: DEFAULT_WINDOW,
            sampling: PaletteSampling::FirstTwo,
        }
    }
}

/// Stepwise region generator
pub struct RegionGenerator<R = StdRng> {
    map: RegionMap,
    window: Window,
    iterations: usize,
    iteration: usize,
    votes_applied: usize,
    random_selector: RandomSelector<R>,
    /// Optional capture of intermediate maps
    pub visualization: Option<VisualizationCapture>,
}

impl RegionGenerator<StdRng> {
    /// Create a generator with a deterministic random source
    ///
    /// # Errors
    ///
    /// See [`RegionGenerator::with_selector`]
    pub fn seeded(palette: &[Color], config: GenerationConfig, seed: u64) -> Result<Self> {
        Self::with_selector(palette, config, RandomSelector::seeded(seed))
    }

    /// Create a generator seeded from operating system entropy
    ///
    /// # Errors
    ///
    /// See [`RegionGenerator::with_selector`]
    pub fn from_entropy(palette: &[Color], config: GenerationConfig) -> Result<Self> {
        Self::with_selector(palette, config, RandomSelector::from_entropy())
    }
}

impl<R: Rng> RegionGenerator<R> {
    /// Create a generator drawing from `rng`
    ///
    /// # Errors
    ///
    /// See [`RegionGenerator::with_selector`]
    pub fn with_rng(palette: &[Color], config: GenerationConfig, rng: R) -> Result<Self> {
        Self::with_selector(palette, config, RandomSelector::from_rng(rng))
    }

    /// Validate parameters, allocate the map and fill it with noise
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` before any work is done if:
    /// - The window's square root is not an odd integer of at least 3
    /// - The palette is empty
    /// - Width or height is zero
    pub fn with_selector(
        palette: &[Color],
        config: GenerationConfig,
        mut random_selector: RandomSelector<R>,
    ) -> Result<Self> {
        let window = Window::new(config.window)?;
        if palette.is_empty() {
            return Err(invalid_argument(
                "palette",
                &"[]",
                &"at least one color is required",
            ));
        }
        let mut map = RegionMap::new(config.width, config.height)?;

        debug!(
            "Generating {}x{} map: window {} (offset {}), {} iterations, {} palette colors",
            config.width,
            config.height,
            window.cells(),
            window.offset(),
            config.iterations,
            palette.len()
        );

        fill_noise(
            &mut map,
            palette,
            config.sampling.span(palette.len()),
            &mut random_selector,
        )?;

        Ok(Self {
            map,
            window,
            iterations: config.iterations,
            iteration: 0,
            votes_applied: 0,
            random_selector,
            visualization: None,
        })
    }

    /// Current map state
    pub const fn map(&self) -> &RegionMap {
        &self.map
    }

    /// Validated smoothing window
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Iterations executed so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Total iterations this generator will run
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Votes that passed and overwrote their neighborhood
    pub const fn votes_applied(&self) -> usize {
        self.votes_applied
    }

    /// Whether every requested iteration has run
    pub const fn is_complete(&self) -> bool {
        self.iteration >= self.iterations
    }

    /// Record intermediate maps for a GIF, spread over the remaining iterations
    pub fn enable_visualization(&mut self, frame_count: usize) {
        let mut capture = VisualizationCapture::new(self.iterations, frame_count);
        capture.record(0, &self.map);
        self.visualization = Some(capture);
    }

    /// Execute one majority vote at a random center
    ///
    /// Returns `false` without doing anything once all iterations have run.
    ///
    /// # Errors
    ///
    /// Returns an error if the vote addresses a cell outside the map
    pub fn execute_iteration(&mut self) -> Result<bool> {
        if self.is_complete() {
            return Ok(false);
        }

        let center = self
            .random_selector
            .cell(self.map.width(), self.map.height());
        let VoteOutcome { applied, .. } = majority_vote(&mut self.map, center, self.window)?;

        self.iteration += 1;
        if applied {
            self.votes_applied += 1;
        }

        if let Some(capture) = self.visualization.as_mut() {
            capture.observe(self.iteration, &self.map);
        }

        Ok(true)
    }

    /// Run every remaining iteration and return the finished map
    ///
    /// # Errors
    ///
    /// Returns an error if any vote fails
    pub fn run(mut self) -> Result<RegionMap> {
        while self.execute_iteration()? {}

        debug!(
            "Finished after {} iterations, {} votes applied",
            self.iteration, self.votes_applied
        );

        Ok(self.map)
    }

    /// Take the map in its current state
    pub fn into_map(self) -> RegionMap {
        self.map
    }
}

/// Set every cell to a uniformly drawn color among the first `span` palette entries
fn fill_noise<R: Rng>(
    map: &mut RegionMap,
    palette: &[Color],
    span: usize,
    random_selector: &mut RandomSelector<R>,
) -> Result<()> {
    for y in 0..map.height() {
        for x in 0..map.width() {
            let index = random_selector.index_below(span);
            let color = palette.get(index).copied().ok_or_else(|| {
                invalid_argument("palette", &palette.len(), &"noise index past palette end")
            })?;
            map.set(x, y, color)?;
        }
    }
    Ok(())
}

/// Generate a region map with a freshly entropy-seeded random source
///
/// Every cell starts as one of the first two palette colors drawn uniformly,
/// then `iterations` majority votes over a `window`-cell neighborhood smooth the
/// noise into regions.
///
/// # Errors
///
/// Returns `InvalidArgument` if the window, palette or dimensions are invalid
pub fn generate(
    palette: &[Color],
    width: usize,
    height: usize,
    iterations: usize,
    window: usize,
) -> Result<RegionMap> {
    let config = GenerationConfig {
        width,
        height,
        iterations,
        window,
        sampling: PaletteSampling::FirstTwo,
    };
    RegionGenerator::from_entropy(palette, config)?.run()
}

/// Generate a region map drawing all randomness from `rng`
///
/// # Errors
///
/// Returns `InvalidArgument` if the window, palette or dimensions are invalid
pub fn generate_with_rng<R: Rng>(
    palette: &[Color],
    config: GenerationConfig,
    rng: R,
) -> Result<RegionMap> {
    RegionGenerator::with_rng(palette, config, rng)?.run()
}
