//! Homogeneity measurements of a region map
//!
//! Smoothing should lower the number of color transitions between neighboring
//! cells and merge cells into fewer, larger regions. These counts make that
//! visible for logging, benchmarking and statistical tests.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use bitvec::prelude::*;

use crate::spatial::{Color, RegionMap};

// Each unordered 8-connected pair is visited once from its upper-left member
const FORWARD_NEIGHBORS: [(isize, isize); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

const ORTHOGONAL_NEIGHBORS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Summary of how fragmented a map is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStatistics {
    /// Cells per color, ordered by color
    pub color_counts: BTreeMap<Color, usize>,
    /// Unordered pairs of 8-connected neighbors with different colors
    pub transitions: usize,
    /// 4-connected components of equal color
    pub regions: usize,
    /// Cell count of the largest region
    pub largest_region: usize,
}

impl MapStatistics {
    /// Measure a map
    pub fn from_map(map: &RegionMap) -> Self {
        let mut color_counts = BTreeMap::new();
        for (_, _, color) in map.pixels() {
            *color_counts.entry(color).or_insert(0) += 1;
        }

        let (regions, largest_region) = count_regions(map);

        Self {
            color_counts,
            transitions: count_transitions(map),
            regions,
            largest_region,
        }
    }

    /// Number of distinct colors present
    pub fn distinct_colors(&self) -> usize {
        self.color_counts.len()
    }

    /// Fraction of cells holding the most common color
    pub fn dominant_share(&self) -> f64 {
        let total: usize = self.color_counts.values().sum();
        if total == 0 {
            return 0.0;
        }
        let dominant = self.color_counts.values().copied().max().unwrap_or(0);
        dominant as f64 / total as f64
    }
}

impl fmt::Display for MapStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} colors, {} transitions, {} regions (largest {} cells)",
            self.distinct_colors(),
            self.transitions,
            self.regions,
            self.largest_region
        )
    }
}

/// Count unordered 8-connected neighbor pairs whose colors differ
pub fn count_transitions(map: &RegionMap) -> usize {
    map.pixels()
        .map(|(x, y, color)| {
            FORWARD_NEIGHBORS
                .iter()
                .filter_map(|&(dx, dy)| neighbor(map, x, y, dx, dy))
                .filter_map(|(nx, ny)| map.get(nx, ny).ok())
                .filter(|&other| other != color)
                .count()
        })
        .sum()
}

/// Count 4-connected equal-color regions and the size of the largest one
pub fn count_regions(map: &RegionMap) -> (usize, usize) {
    let width = map.width();
    let mut visited = bitvec![0; width * map.height()];
    let mut queue = VecDeque::new();
    let mut regions = 0;
    let mut largest = 0;

    for (x, y, color) in map.pixels() {
        if visited.get(y * width + x).as_deref() == Some(&true) {
            continue;
        }

        regions += 1;
        let mut size = 0;
        visited.set(y * width + x, true);
        queue.push_back((x, y));

        while let Some((cx, cy)) = queue.pop_front() {
            size += 1;
            for &(dx, dy) in &ORTHOGONAL_NEIGHBORS {
                let Some((nx, ny)) = neighbor(map, cx, cy, dx, dy) else {
                    continue;
                };
                let index = ny * width + nx;
                if visited.get(index).as_deref() == Some(&false)
                    && map.get(nx, ny).is_ok_and(|other| other == color)
                {
                    visited.set(index, true);
                    queue.push_back((nx, ny));
                }
            }
        }

        largest = largest.max(size);
    }

    (regions, largest)
}

fn neighbor(map: &RegionMap, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    map.contains(nx, ny).then_some((nx, ny))
}
