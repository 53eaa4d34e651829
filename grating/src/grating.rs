//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Sheet gratings

use crate::alphabet;
use crate::cell_iterator::CellIterator;
use crate::error::GratingError;

/// Geographic extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    /// Extent from two corners in any order
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Extent {
        Extent {
            minx: x1.min(x2),
            miny: y1.min(y2),
            maxx: x1.max(x2),
            maxy: y1.max(y2),
        }
    }
    /// Copy with min and max swapped where they are reversed
    pub fn normalized(&self) -> Extent {
        Extent::new(self.minx, self.miny, self.maxx, self.maxy)
    }
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
    /// Zero width or height, or non-finite bounds or size
    pub fn is_degenerate(&self) -> bool {
        let finite = [
            self.minx,
            self.miny,
            self.maxx,
            self.maxy,
            self.width(),
            self.height(),
        ]
        .iter()
        .all(|v| v.is_finite());
        !finite || !(self.width() > 0.0) || !(self.height() > 0.0)
    }
}

/// Rendering of column labels
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ColumnLabels {
    /// 1, 2, 3, ...
    Numeric,
    /// A, B, C, ... like row labels
    Alpha,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        ColumnLabels::Numeric
    }
}

/// Rows and columns dividing a sheet extent
///
/// Row 0 is the bottom row of the extent and column 0 the left column. Label
/// orientation is independent of this geometric numbering: without `flip_y_label`
/// the top row is labeled "A" and labels grow downwards, as on a printed page.
#[derive(PartialEq, Clone, Debug)]
pub struct Grating {
    extent: Extent,
    rows: u32,
    cols: u32,
    flip_y_label: bool,
    flip_x_label: bool,
    col_labels: ColumnLabels,
}

impl Grating {
    pub fn new(
        extent: Extent,
        rows: u32,
        cols: u32,
        flip_y_label: bool,
    ) -> Result<Grating, GratingError> {
        if rows == 0 || cols == 0 {
            return Err(GratingError::InvalidDimension(format!(
                "{} rows x {} cols",
                rows, cols
            )));
        }
        let extent = extent.normalized();
        if extent.is_degenerate() {
            return Err(GratingError::InvalidDimension(format!(
                "degenerate extent {:?}",
                extent
            )));
        }
        Ok(Grating {
            extent,
            rows,
            cols,
            flip_y_label,
            flip_x_label: false,
            col_labels: ColumnLabels::default(),
        })
    }

    /// Grating with cells of about `cell_width` x `cell_height` ground units.
    /// Cells are stretched to divide the extent evenly.
    pub fn with_cell_size(
        extent: Extent,
        cell_width: f64,
        cell_height: f64,
        flip_y_label: bool,
    ) -> Result<Grating, GratingError> {
        let extent = extent.normalized();
        let cols = cell_count(extent.width(), cell_width)?;
        let rows = cell_count(extent.height(), cell_height)?;
        Grating::new(extent, rows, cols, flip_y_label)
    }

    pub fn with_flip_x_label(mut self, flip_x_label: bool) -> Grating {
        self.flip_x_label = flip_x_label;
        self
    }

    pub fn with_col_labels(mut self, col_labels: ColumnLabels) -> Grating {
        self.col_labels = col_labels;
        self
    }

    pub fn extent(&self) -> &Extent {
        &self.extent
    }
    pub fn rows(&self) -> u32 {
        self.rows
    }
    pub fn cols(&self) -> u32 {
        self.cols
    }
    pub fn flip_y_label(&self) -> bool {
        self.flip_y_label
    }
    pub fn flip_x_label(&self) -> bool {
        self.flip_x_label
    }
    pub fn col_labels(&self) -> ColumnLabels {
        self.col_labels
    }

    /// Label of a row, empty if `row` is outside of the grating
    pub fn label_for_row(&self, row: i64) -> String {
        match label_position(row, self.rows, !self.flip_y_label) {
            Some(position) => alphabet::encode(position),
            None => String::new(),
        }
    }

    /// Label of a column, empty if `col` is outside of the grating
    pub fn label_for_col(&self, col: i64) -> String {
        match label_position(col, self.cols, self.flip_x_label) {
            Some(position) => match self.col_labels {
                ColumnLabels::Numeric => position.to_string(),
                ColumnLabels::Alpha => alphabet::encode(position),
            },
            None => String::new(),
        }
    }

    /// Row and column label of a cell (e.g. "C7"), empty if the cell is outside of the grating.
    /// Alphabetic column labels are separated by a hyphen ("AA-B"), as "AAB" would be ambiguous.
    pub fn grid_reference(&self, row: i64, col: i64) -> String {
        let row_label = self.label_for_row(row);
        let col_label = self.label_for_col(col);
        if row_label.is_empty() || col_label.is_empty() {
            return String::new();
        }
        match self.col_labels {
            ColumnLabels::Numeric => row_label + &col_label,
            ColumnLabels::Alpha => format!("{}-{}", row_label, col_label),
        }
    }

    pub fn cell_width(&self) -> f64 {
        self.extent.width() / self.cols as f64
    }
    pub fn cell_height(&self) -> f64 {
        self.extent.height() / self.rows as f64
    }

    /// Y coordinate of the boundary below `row`. `row_boundary(rows)` is the top of the extent.
    pub fn row_boundary(&self, row: u32) -> f64 {
        if row >= self.rows {
            self.extent.maxy
        } else {
            self.extent.miny + row as f64 * self.cell_height()
        }
    }

    /// X coordinate of the boundary left of `col`. `col_boundary(cols)` is the right edge.
    pub fn col_boundary(&self, col: u32) -> f64 {
        if col >= self.cols {
            self.extent.maxx
        } else {
            self.extent.minx + col as f64 * self.cell_width()
        }
    }

    /// Extent of a given cell
    pub fn cell_extent(&self, row: u32, col: u32) -> Option<Extent> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(Extent {
            minx: self.col_boundary(col),
            miny: self.row_boundary(row),
            maxx: self.col_boundary(col + 1),
            maxy: self.row_boundary(row + 1),
        })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> CellIterator {
        CellIterator::new(self.rows, self.cols)
    }
}

/// 1-based label position of `index` in `0..count`
fn label_position(index: i64, count: u32, descending: bool) -> Option<u64> {
    if index < 0 || index >= count as i64 {
        return None;
    }
    let index = index as u64;
    if descending {
        Some(count as u64 - index)
    } else {
        Some(index + 1)
    }
}

/// Number of cells of about `cell_size` covering `length`
pub fn cell_count(length: f64, cell_size: f64) -> Result<u32, GratingError> {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(GratingError::InvalidDimension(format!(
            "cell size {}",
            cell_size
        )));
    }
    // Tolerate rounding errors when the length is a multiple of the cell size
    let count = ((length - 0.01 * cell_size) / cell_size).ceil();
    if !(count < u32::MAX as f64) {
        return Err(GratingError::InvalidDimension(format!(
            "{} cells of size {}",
            count, cell_size
        )));
    }
    Ok(count.max(1.0) as u32)
}
