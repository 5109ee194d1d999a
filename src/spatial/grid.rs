//! Fixed-size color grid used as the working buffer of region generation
//!
//! Cells are stored row-major in an `Array2` indexed `[y, x]`. Every access is
//! bounds checked and reports `OutOfBounds` instead of panicking.

use std::fmt;
use std::ops::RangeInclusive;

use ndarray::{Array2, Axis, Slice};

use crate::io::configuration::{PREVIEW_MAX_COLUMNS, PREVIEW_MAX_ROWS};
use crate::io::error::{Result, invalid_argument, out_of_bounds};
use crate::spatial::Color;

/// Two-dimensional grid of colors with fixed dimensions
///
/// Dimensions never change after construction. Cloning produces an
/// independent deep copy of the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    cells: Array2<Color>,
}

impl RegionMap {
    /// Create a map with every cell set to [`Color::BLACK`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            return Err(invalid_argument("width", &width, &"must be positive"));
        }
        if height == 0 {
            return Err(invalid_argument("height", &height, &"must be positive"));
        }

        Ok(Self {
            cells: Array2::from_elem((height, width), Color::BLACK),
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Check whether a coordinate lies inside the map
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Read the color at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `x >= width` or `y >= height`
    pub fn get(&self, x: usize, y: usize) -> Result<Color> {
        self.cells
            .get([y, x])
            .copied()
            .ok_or_else(|| out_of_bounds(x, y, self.width(), self.height()))
    }

    /// Replace the color at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `x >= width` or `y >= height`; the map is left untouched
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        let cell = self
            .cells
            .get_mut([y, x])
            .ok_or_else(|| out_of_bounds(x, y, width, height))?;
        *cell = color;
        Ok(())
    }

    /// Overwrite every cell in the rectangle `columns` x `rows`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the rectangle reaches past the map; the map is left untouched
    pub fn fill_rect(
        &mut self,
        columns: RangeInclusive<usize>,
        rows: RangeInclusive<usize>,
        color: Color,
    ) -> Result<()> {
        if columns.is_empty() || rows.is_empty() {
            return Ok(());
        }
        let (x_end, y_end) = (*columns.end(), *rows.end());
        if !self.contains(x_end, y_end) {
            return Err(out_of_bounds(x_end, y_end, self.width(), self.height()));
        }

        let mut block = self.cells.slice_axis_mut(Axis(0), Slice::from(rows));
        block.slice_axis_inplace(Axis(1), Slice::from(columns));
        block.fill(color);
        Ok(())
    }

    /// Count cells in the rectangle `columns` x `rows` equal to `color`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the rectangle reaches past the map
    pub fn count_in_rect(
        &self,
        columns: RangeInclusive<usize>,
        rows: RangeInclusive<usize>,
        color: Color,
    ) -> Result<usize> {
        if columns.is_empty() || rows.is_empty() {
            return Ok(0);
        }
        let (x_end, y_end) = (*columns.end(), *rows.end());
        if !self.contains(x_end, y_end) {
            return Err(out_of_bounds(x_end, y_end, self.width(), self.height()));
        }

        let mut block = self.cells.slice_axis(Axis(0), Slice::from(rows));
        block.slice_axis_inplace(Axis(1), Slice::from(columns));
        Ok(block.iter().filter(|&&cell| cell == color).count())
    }

    /// Iterate over `(x, y, color)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &color)| (x, y, color))
    }

    /// Row-major view of the underlying cells
    pub const fn cells(&self) -> &Array2<Color> {
        &self.cells
    }
}

impl fmt::Display for RegionMap {
    /// Diagnostic preview of at most the first 10 rows and 10 columns
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.width().min(PREVIEW_MAX_COLUMNS);
        let rows = self.height().min(PREVIEW_MAX_ROWS);

        writeln!(f, "Width: {} Height: {}", self.width(), self.height())?;
        writeln!(f, "Pixels:")?;

        for row in self.cells.rows().into_iter().take(rows) {
            write!(f, "[")?;
            for (x, color) in row.iter().take(columns).enumerate() {
                write!(f, "{color}")?;
                if x + 1 < self.width() {
                    write!(f, ",")?;
                }
            }
            if columns < self.width() {
                write!(f, " +{} more columns...", self.width() - columns)?;
            }
            writeln!(f, "]")?;
        }

        if rows < self.height() {
            writeln!(f, "+{} more rows...", self.height() - rows)?;
        }

        Ok(())
    }
}
