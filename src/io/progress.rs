//! Progress display for one or more generation runs

use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_UPDATE_INTERVAL};

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.green/white}] {pos}/{len} votes {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Shows iteration progress per run, plus an overall bar for large batches
///
/// Only the most recent runs keep a visible bar; older bars are removed once
/// more than `MAX_INDIVIDUAL_PROGRESS_BARS` runs have started.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    run_bars: Vec<(usize, ProgressBar)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            run_bars: Vec::new(),
        }
    }

    /// Prepare the overall bar when many runs are planned
    pub fn initialize(&mut self, run_count: usize) {
        if run_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(run_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Add a bar for run `index` labelled `label`
    pub fn start_run(&mut self, index: usize, label: &str, iterations: usize) {
        if self.run_bars.len() >= MAX_INDIVIDUAL_PROGRESS_BARS {
            let (_, oldest) = self.run_bars.remove(0);
            self.multi_progress.remove(&oldest);
        }

        let bar = ProgressBar::new(iterations as u64);
        bar.set_style(RUN_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.run_bars.push((index, self.multi_progress.add(bar)));
    }

    /// Report iterations completed by run `index`
    ///
    /// The terminal is only redrawn every `PROGRESS_UPDATE_INTERVAL` iterations.
    pub fn update_iteration(&self, index: usize, iteration: usize) {
        if iteration % PROGRESS_UPDATE_INTERVAL != 0 {
            return;
        }
        if let Some(bar) = self.bar(index) {
            bar.set_position(iteration as u64);
        }
    }

    /// Mark run `index` as finished
    pub fn complete_run(&self, index: usize, votes_applied: usize) {
        if let Some(bar) = self.bar(index) {
            if let Some(length) = bar.length() {
                bar.set_position(length);
            }
            bar.finish_with_message(format!("✓ {votes_applied} applied"));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All maps generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of run bars currently shown
    pub fn visible_runs(&self) -> usize {
        self.run_bars.len()
    }

    fn bar(&self, index: usize) -> Option<&ProgressBar> {
        self.run_bars
            .iter()
            .find(|(run, _)| *run == index)
            .map(|(_, bar)| bar)
    }
}
