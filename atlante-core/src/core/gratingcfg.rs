//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::SheetCfg;
use crate::core::Config;
use grating::{cell_count, ColumnLabels, Extent, Grating};

#[derive(Deserialize, Clone, Debug)]
pub struct ExtentCfg {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl From<&ExtentCfg> for Extent {
    fn from(cfg: &ExtentCfg) -> Extent {
        Extent::new(cfg.minx, cfg.miny, cfg.maxx, cfg.maxy)
    }
}

pub fn col_labels_from_cfg(col_labels: &str) -> Result<ColumnLabels, String> {
    match &col_labels.to_lowercase() as &str {
        "numeric" => Ok(ColumnLabels::Numeric),
        "alpha" => Ok(ColumnLabels::Alpha),
        _ => Err(format!("Unexpected enum value '{}'", col_labels)),
    }
}

/// Cell count from an explicit count or an approximate cell size
fn axis_count(
    sheet: &str,
    count: Option<u32>,
    cell_size: Option<f64>,
    length: f64,
    names: (&str, &str),
) -> Result<u32, String> {
    match (count, cell_size) {
        (Some(count), _) => Ok(count),
        (None, Some(size)) => {
            cell_count(length, size).map_err(|e| format!("Sheet '{}': {}", sheet, e))
        }
        (None, None) => Err(format!(
            "Sheet '{}': either '{}' or '{}' is required",
            sheet, names.0, names.1
        )),
    }
}

impl<'a> Config<'a, SheetCfg> for Grating {
    fn from_config(sheet_cfg: &SheetCfg) -> Result<Self, String> {
        let extent = Extent::from(&sheet_cfg.extent);
        let rows = axis_count(
            &sheet_cfg.name,
            sheet_cfg.rows,
            sheet_cfg.cell_height,
            extent.height(),
            ("rows", "cell_height"),
        )?;
        let cols = axis_count(
            &sheet_cfg.name,
            sheet_cfg.cols,
            sheet_cfg.cell_width,
            extent.width(),
            ("cols", "cell_width"),
        )?;
        let col_labels = col_labels_from_cfg(&sheet_cfg.col_labels)?;
        let grating = Grating::new(extent, rows, cols, sheet_cfg.flip_y_label)
            .map_err(|e| format!("Sheet '{}': {}", sheet_cfg.name, e))?;
        Ok(grating
            .with_flip_x_label(sheet_cfg.flip_x_label)
            .with_col_labels(col_labels))
    }
    fn gen_config() -> String {
        let toml = r#"
[[sheet]]
name = "sheet"
#description = ""
# Extent in the rendering SRS
extent = { minx = -180.0, miny = -90.0, maxx = 180.0, maxy = 90.0 }
# Number of rows and columns
rows = 9
cols = 18
# Alternatively: approximate cell size in ground units
#cell_height = 20.0
#cell_width = 20.0
# Label rows from the bottom ("A") upwards
#flip_y_label = false
# Label columns from right to left
#flip_x_label = false
# numeric | alpha
#col_labels = "numeric"
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        let ext = self.extent();
        format!(
            r#"extent = {{ minx = {:?}, miny = {:?}, maxx = {:?}, maxy = {:?} }}
rows = {}
cols = {}
flip_y_label = {}
flip_x_label = {}
col_labels = "{}"
"#,
            ext.minx,
            ext.miny,
            ext.maxx,
            ext.maxy,
            self.rows(),
            self.cols(),
            self.flip_y_label(),
            self.flip_x_label(),
            match self.col_labels() {
                ColumnLabels::Numeric => "numeric",
                ColumnLabels::Alpha => "alpha",
            }
        )
    }
}
