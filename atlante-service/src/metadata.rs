//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::sheet_service::SheetService;
use atlante_core::service::Sheet;

#[derive(Serialize, Debug)]
pub struct LabelInfo {
    pub index: u32,
    pub label: String,
}

#[derive(Serialize, Debug)]
pub struct CellInfo {
    pub row: u32,
    pub col: u32,
    pub reference: String,
}

/// Label index printed next to a sheet
#[derive(Serialize, Debug)]
pub struct SheetIndex {
    pub name: String,
    pub description: String,
    pub bounds: [f64; 4],
    pub rows: u32,
    pub cols: u32,
    pub row_labels: Vec<LabelInfo>,
    pub col_labels: Vec<LabelInfo>,
    pub cells: Vec<CellInfo>,
}

pub fn sheet_index(sheet: &Sheet) -> SheetIndex {
    let grating = &sheet.grating;
    let ext = grating.extent();
    let row_labels = (0..grating.rows())
        .map(|index| LabelInfo {
            index,
            label: grating.label_for_row(index as i64),
        })
        .collect();
    let col_labels = (0..grating.cols())
        .map(|index| LabelInfo {
            index,
            label: grating.label_for_col(index as i64),
        })
        .collect();
    let cells = grating
        .cells()
        .map(|(row, col)| CellInfo {
            row,
            col,
            reference: grating.grid_reference(row as i64, col as i64),
        })
        .collect();
    SheetIndex {
        name: sheet.name.clone(),
        description: sheet.description(),
        bounds: [ext.minx, ext.miny, ext.maxx, ext.maxy],
        rows: grating.rows(),
        cols: grating.cols(),
        row_labels,
        col_labels,
        cells,
    }
}

impl SheetService {
    /// Label index of a sheet as JSON
    pub fn label_index(&self, name: &str) -> Result<serde_json::Value, String> {
        let sheet = self
            .sheet(name)
            .ok_or(format!("Sheet '{}' not found", name))?;
        serde_json::to_value(sheet_index(sheet)).map_err(|e| e.to_string())
    }
}
