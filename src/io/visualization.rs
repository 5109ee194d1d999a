//! Frame capture and GIF generation for watching regions form

use std::path::Path;

use image::{Delay, Frame, RgbaImage};
use log::debug;

use crate::io::error::{RegionError, Result};
use crate::io::image::{create_parent_dir, render_rgba};
use crate::spatial::RegionMap;

/// Snapshot of the map after a given iteration
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    /// Iterations completed when the frame was taken
    pub iteration: usize,
    /// Rendered map
    pub image: RgbaImage,
}

/// Captures evenly spaced snapshots of a generation run
///
/// Frames are taken every `interval` iterations plus the final iteration,
/// so a run of any length yields about `frame_count` frames.
pub struct VisualizationCapture {
    frames: Vec<CapturedFrame>,
    interval: usize,
    total_iterations: usize,
}

impl VisualizationCapture {
    /// Plan roughly `frame_count` snapshots over `total_iterations`
    pub fn new(total_iterations: usize, frame_count: usize) -> Self {
        let interval = total_iterations.div_ceil(frame_count.max(1)).max(1);
        Self {
            frames: Vec::with_capacity(frame_count.saturating_add(2)),
            interval,
            total_iterations,
        }
    }

    /// Iterations between snapshots
    pub const fn interval(&self) -> usize {
        self.interval
    }

    /// Snapshot `map` unconditionally
    pub fn record(&mut self, iteration: usize, map: &RegionMap) {
        // Maps too large for u32 dimensions cannot be encoded anyway
        match render_rgba(map) {
            Ok(image) => self.frames.push(CapturedFrame { iteration, image }),
            Err(e) => debug!("Skipping frame at iteration {iteration}: {e}"),
        }
    }

    /// Snapshot `map` if `iteration` falls on the capture schedule
    pub fn observe(&mut self, iteration: usize, map: &RegionMap) {
        if iteration % self.interval == 0 || iteration == self.total_iterations {
            self.record(iteration, map);
        }
    }

    /// Returns all captured frames
    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// Returns the number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// The last frame is held longer so the finished map stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(crate::io::error::invalid_argument(
                "visualization",
                &output_path.display(),
                &"no frames captured",
            ));
        }

        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .map(|captured| {
                Frame::from_parts(
                    captured.image.clone(),
                    0,
                    0,
                    Delay::from_numer_denom_ms(frame_delay_ms, 1),
                )
            })
            .collect();

        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                last.image.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(frame_delay_ms.saturating_mul(25), 1),
            ));
        }

        create_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| RegionError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| RegionError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
