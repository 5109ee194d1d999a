//! Command-line interface for generating region maps to PNG files

use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use crate::algorithm::generator::{GenerationConfig, PaletteSampling, RegionGenerator};
use crate::analysis::statistics::MapStatistics;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_ITERATIONS, DEFAULT_OUTPUT, DEFAULT_PALETTE, DEFAULT_WIDTH,
    DEFAULT_WINDOW, GIF_FRAME_DELAY_MS, VISUALIZATION_FRAMES, VISUALIZATION_SUFFIX,
};
use crate::io::error::{RegionError, Result};
use crate::io::flat::to_flat_buffer;
use crate::io::image::{create_parent_dir, export_map_as_png};
use crate::io::progress::ProgressManager;
use crate::spatial::{Color, RegionMap};

#[derive(Parser, Debug)]
#[command(name = "regionmap")]
#[command(
    author,
    version,
    about = "Generate random region maps by majority smoothing of palette noise"
)]
/// Command-line arguments for the region map generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG path (runs after the first get a numeric suffix)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Map width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Map height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of majority votes (0 keeps pure noise)
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Neighborhood cell count: 9, 25, 49, 81, ...
    #[arg(short = 'W', long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// Random seed for reproducible maps (entropy seeded when absent)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Palette color as #rrggbb or r,g,b (repeat for more colors)
    #[arg(short, long = "palette", value_name = "COLOR")]
    pub palette: Vec<Color>,

    /// Let the noise fill draw from every palette color instead of the first two
    #[arg(long)]
    pub full_palette: bool,

    /// Number of maps to generate
    #[arg(short, long, default_value_t = 1)]
    pub runs: usize,

    /// Print a textual preview of each map
    #[arg(long)]
    pub preview: bool,

    /// Log fragmentation statistics of each map
    #[arg(long)]
    pub stats: bool,

    /// Also write raw R, G, B bytes next to each PNG
    #[arg(long)]
    pub raw: bool,

    /// Write an animated GIF of the smoothing process
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Palette given on the command line, or the default yellow and green
    pub fn palette(&self) -> Vec<Color> {
        if self.palette.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            self.palette.clone()
        }
    }

    /// Generation parameters shared by every run
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            iterations: self.iterations,
            window: self.window,
            sampling: if self.full_palette {
                PaletteSampling::Full
            } else {
                PaletteSampling::FirstTwo
            },
        }
    }

    /// PNG path for run `index`
    pub fn output_path(&self, index: usize) -> PathBuf {
        if index == 0 {
            return self.output.clone();
        }
        with_stem_suffix(&self.output, &format!("_{}", index + 1), None)
    }
}

/// Orchestrates generation runs with progress tracking and export
pub struct RunProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RunProcessor {
    /// Create a new run processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export every requested map
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, generation or export fails
    pub fn process(&mut self) -> Result<()> {
        let palette = self.cli.palette();
        let config = self.cli.generation_config();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.runs);
        }

        for index in 0..self.cli.runs {
            self.process_run(index, &palette, config)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_run(&mut self, index: usize, palette: &[Color], config: GenerationConfig) -> Result<()> {
        let output_path = self.cli.output_path(index);

        let mut generator = match self.cli.seed {
            Some(seed) => RegionGenerator::seeded(palette, config, seed.wrapping_add(index as u64))?,
            None => RegionGenerator::from_entropy(palette, config)?,
        };

        if self.cli.visualize {
            generator.enable_visualization(VISUALIZATION_FRAMES);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_run(index, &output_path.display().to_string(), config.iterations);
        }

        while generator.execute_iteration()? {
            if let Some(ref pm) = self.progress_manager {
                pm.update_iteration(index, generator.iteration());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_run(index, generator.votes_applied());
        }

        export_map_as_png(generator.map(), &output_path)?;
        info!(
            "Wrote {} ({} of {} votes applied)",
            output_path.display(),
            generator.votes_applied(),
            generator.iterations()
        );

        if self.cli.visualize {
            if let Some(capture) = &generator.visualization {
                let gif_path = with_stem_suffix(&output_path, VISUALIZATION_SUFFIX, Some("gif"));
                capture.export_gif(&gif_path, GIF_FRAME_DELAY_MS)?;
                info!(
                    "Wrote {} ({} frames)",
                    gif_path.display(),
                    capture.frame_count()
                );
            }
        }

        let map = generator.into_map();

        if self.cli.raw {
            let raw_path = with_stem_suffix(&output_path, "", Some("rgb"));
            write_raw(&map, &raw_path)?;
            info!("Wrote {}", raw_path.display());
        }

        if self.cli.stats {
            info!(
                "{}: {}",
                output_path.display(),
                MapStatistics::from_map(&map)
            );
        }

        if self.cli.preview {
            print_preview(&output_path, &map);
        }

        Ok(())
    }
}

// Allow print for the user-requested preview
#[allow(clippy::print_stdout)]
fn print_preview(output_path: &Path, map: &RegionMap) {
    println!("{}:", output_path.display());
    println!("{map}");
}

fn write_raw(map: &RegionMap, path: &Path) -> Result<()> {
    create_parent_dir(path)?;
    std::fs::write(path, to_flat_buffer(map)).map_err(|e| RegionError::FileSystem {
        path: path.to_path_buf(),
        operation: "write raw buffer",
        source: e,
    })
}

/// Derive a sibling path: `<stem><suffix>.<extension>`
///
/// The original extension is kept when `extension` is `None`.
pub fn with_stem_suffix(path: &Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let extension = extension.map_or_else(
        || path.extension().unwrap_or_default().to_string_lossy(),
        std::borrow::Cow::Borrowed,
    );

    let name = if extension.is_empty() {
        format!("{stem}{suffix}")
    } else {
        format!("{stem}{suffix}.{extension}")
    };

    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
