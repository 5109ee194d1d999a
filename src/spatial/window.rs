//! Square smoothing neighborhood derived from a window cell count

use std::ops::RangeInclusive;

use crate::io::configuration::MIN_WINDOW_SIDE;
use crate::io::error::{Result, invalid_argument};

/// Validated smoothing window
///
/// `cells` is the full neighborhood size, always the square of an odd side
/// of at least 3 (9, 25, 49, 81, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    cells: usize,
    side: usize,
}

impl Window {
    /// Validate a window cell count
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless the square root of `cells` is an odd
    /// integer no smaller than 3
    pub fn new(cells: usize) -> Result<Self> {
        let side = cells.isqrt();

        if side * side != cells {
            return Err(invalid_argument(
                "window",
                &cells,
                &"square root is not an integer",
            ));
        }
        if side < MIN_WINDOW_SIDE {
            return Err(invalid_argument(
                "window",
                &cells,
                &format!("square root must be at least {MIN_WINDOW_SIDE}"),
            ));
        }
        if side % 2 == 0 {
            return Err(invalid_argument("window", &cells, &"square root must be odd"));
        }

        Ok(Self { cells, side })
    }

    /// Total cell count of the neighborhood
    pub const fn cells(&self) -> usize {
        self.cells
    }

    /// Side length of the square neighborhood
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Distance from the center to each edge of the neighborhood
    pub const fn offset(&self) -> usize {
        self.side / 2
    }

    /// Matching-cell count that must be exceeded for a vote to pass
    ///
    /// Derived from the full window even when the neighborhood is clipped by
    /// the map border, so border votes are harder to win.
    pub const fn threshold(&self) -> usize {
        self.cells / 2
    }

    /// Column and row spans of the neighborhood around `center`, clipped to the map
    pub fn spans(
        &self,
        center: [usize; 2],
        width: usize,
        height: usize,
    ) -> (RangeInclusive<usize>, RangeInclusive<usize>) {
        clipped_spans(center, self.offset(), width, height)
    }
}

/// Inclusive spans of `center ± offset` on each axis, clamped to `[0, width) × [0, height)`
///
/// Cells beyond the border are dropped, never wrapped. `center` must lie inside the map.
pub fn clipped_spans(
    center: [usize; 2],
    offset: usize,
    width: usize,
    height: usize,
) -> (RangeInclusive<usize>, RangeInclusive<usize>) {
    let [x, y] = center;

    let x_start = x.saturating_sub(offset);
    let y_start = y.saturating_sub(offset);
    let x_end = x.saturating_add(offset).min(width.saturating_sub(1));
    let y_end = y.saturating_add(offset).min(height.saturating_sub(1));

    (x_start..=x_end, y_start..=y_end)
}
