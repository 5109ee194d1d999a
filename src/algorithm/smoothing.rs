//! Windowed majority vote applied at one sampled center

use crate::io::error::Result;
use crate::spatial::{RegionMap, Window};

/// Result of one vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteOutcome {
    /// In-bounds neighborhood cells (center included) matching the center color
    pub matching: usize,
    /// Whether the neighborhood was overwritten with the center color
    pub applied: bool,
}

/// Run one read-then-write majority vote around `center`
///
/// The count is taken over the neighborhood as it stands before any write.
/// Only when it exceeds `window.threshold()` is every in-bounds neighbor
/// overwritten with the center's color. Nothing outside the clipped
/// neighborhood is touched.
///
/// # Errors
///
/// Returns `OutOfBounds` if `center` lies outside the map; the map is left untouched
pub fn majority_vote(
    map: &mut RegionMap,
    center: [usize; 2],
    window: Window,
) -> Result<VoteOutcome> {
    let [center_x, center_y] = center;
    let color = map.get(center_x, center_y)?;
    let (columns, rows) = window.spans(center, map.width(), map.height());

    let matching = map.count_in_rect(columns.clone(), rows.clone(), color)?;
    let applied = matching > window.threshold();
    if applied {
        map.fill_rect(columns, rows, color)?;
    }

    Ok(VoteOutcome { matching, applied })
}

/// Count in-bounds cells around `center` that share its color, without voting
///
/// # Errors
///
/// Returns `OutOfBounds` if `center` lies outside the map
pub fn matching_neighbors(map: &RegionMap, center: [usize; 2], window: Window) -> Result<usize> {
    let [center_x, center_y] = center;
    let color = map.get(center_x, center_y)?;
    let (columns, rows) = window.spans(center, map.width(), map.height());
    map.count_in_rect(columns, rows, color)
}
