//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid overlay features of a grating
//!
//! Rectangle mode emits one polygon per cell, row by row starting at the bottom row.
//! Line mode emits the horizontal boundaries from bottom to top followed by the
//! vertical boundaries from left to right.

use crate::core::feature::{FeatureAttr, FeatureAttrValType, FeatureCollection, GridFeature};
use crate::core::geom::{line, rectangle, GeometryType, LineString, Point};
use grating::{Extent, Grating, GratingError};
use std::str::FromStr;

/// Overlay geometry type
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum GridMode {
    /// Cell polygons
    Rectangle,
    /// Row and column boundary lines
    Lines,
}

impl FromStr for GridMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase() as &str {
            "rectangle" => Ok(GridMode::Rectangle),
            "lines" | "grating" => Ok(GridMode::Lines),
            _ => Err(format!("Unexpected enum value '{}'", s)),
        }
    }
}

/// Cell whose label is given to a boundary between two cells
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BoundaryLabel {
    /// Lower-indexed cell (below or left of the line)
    Lower,
    /// Higher-indexed cell (above or right of the line)
    Upper,
}

impl BoundaryLabel {
    /// Cell index labeling boundary `boundary` of `count` cells
    pub fn cell_index(&self, boundary: u32, count: u32) -> u32 {
        match self {
            BoundaryLabel::Lower => boundary.saturating_sub(1),
            BoundaryLabel::Upper => boundary.min(count - 1),
        }
    }
}

impl Default for BoundaryLabel {
    fn default() -> Self {
        BoundaryLabel::Lower
    }
}

impl FromStr for BoundaryLabel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase() as &str {
            "lower" => Ok(BoundaryLabel::Lower),
            "upper" => Ok(BoundaryLabel::Upper),
            _ => Err(format!("Unexpected enum value '{}'", s)),
        }
    }
}

/// Grid overlay of `rows` x `cols` cells covering `extent`
pub fn generate_grid(
    extent: &Extent,
    rows: u32,
    cols: u32,
    flipped: bool,
    rectangle: bool,
) -> Result<FeatureCollection, GratingError> {
    let grating = Grating::new(extent.clone(), rows, cols, flipped)?;
    let mode = if rectangle {
        GridMode::Rectangle
    } else {
        GridMode::Lines
    };
    Ok(grid_features(&grating, mode, BoundaryLabel::default()))
}

/// Grid overlay features of a grating
pub fn grid_features(
    grating: &Grating,
    mode: GridMode,
    boundary_label: BoundaryLabel,
) -> FeatureCollection {
    let features = match mode {
        GridMode::Rectangle => cell_features(grating),
        GridMode::Lines => line_features(grating, boundary_label),
    };
    debug!(
        "{:?} overlay with {} features for {} rows x {} cols",
        mode,
        features.len(),
        grating.rows(),
        grating.cols()
    );
    FeatureCollection { features }
}

fn cell_features(grating: &Grating) -> Vec<GridFeature> {
    grating
        .cells()
        .enumerate()
        .filter_map(|(fid, (row, col))| {
            let extent = grating.cell_extent(row, col)?;
            Some(GridFeature {
                fid: Some(fid as u64),
                attributes: vec![
                    FeatureAttr::new("row", FeatureAttrValType::UInt(row as u64)),
                    FeatureAttr::new("col", FeatureAttrValType::UInt(col as u64)),
                    FeatureAttr::new(
                        "row_label",
                        FeatureAttrValType::String(grating.label_for_row(row as i64)),
                    ),
                    FeatureAttr::new(
                        "col_label",
                        FeatureAttrValType::String(grating.label_for_col(col as i64)),
                    ),
                ],
                geometry: GeometryType::Polygon(rectangle(&extent)),
            })
        })
        .collect()
}

fn line_features(grating: &Grating, boundary_label: BoundaryLabel) -> Vec<GridFeature> {
    let ext = grating.extent();
    let rows = grating.rows();
    let cols = grating.cols();
    let mut features = Vec::with_capacity(rows as usize + cols as usize + 2);

    for boundary in 0..=rows {
        let y = grating.row_boundary(boundary);
        let row = boundary_label.cell_index(boundary, rows);
        let boundary_line = line(vec![
            Point::new(ext.minx, y, None),
            Point::new(ext.maxx, y, None),
        ]);
        features.push(line_feature(
            features.len(),
            boundary_line,
            "row",
            boundary,
            row,
            grating.label_for_row(row as i64),
        ));
    }
    for boundary in 0..=cols {
        let x = grating.col_boundary(boundary);
        let col = boundary_label.cell_index(boundary, cols);
        let boundary_line = line(vec![
            Point::new(x, ext.miny, None),
            Point::new(x, ext.maxy, None),
        ]);
        features.push(line_feature(
            features.len(),
            boundary_line,
            "col",
            boundary,
            col,
            grating.label_for_col(col as i64),
        ));
    }
    features
}

fn line_feature(
    fid: usize,
    geom: LineString,
    axis: &str,
    boundary: u32,
    index: u32,
    label: String,
) -> GridFeature {
    GridFeature {
        fid: Some(fid as u64),
        attributes: vec![
            FeatureAttr::new("axis", FeatureAttrValType::String(axis.to_string())),
            FeatureAttr::new("boundary", FeatureAttrValType::UInt(boundary as u64)),
            FeatureAttr::new(axis, FeatureAttrValType::UInt(index as u64)),
            FeatureAttr::new(
                &format!("{}_label", axis),
                FeatureAttrValType::String(label),
            ),
        ],
        geometry: GeometryType::LineString(geom),
    }
}
