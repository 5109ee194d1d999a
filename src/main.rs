//! CLI entry point for the region map generator

use clap::Parser;
use regionmap::io::cli::{Cli, RunProcessor};

fn main() -> regionmap::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut processor = RunProcessor::new(cli);
    processor.process()
}
