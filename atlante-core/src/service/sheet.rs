//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{Config, SheetCfg};
use crate::core::feature::FeatureCollection;
use crate::overlay::{grid_features, BoundaryLabel, GridMode};
use grating::{Extent, Grating};

/// Named grating with its overlay settings
#[derive(Clone, Debug)]
pub struct Sheet {
    /// Lower-case sheet name
    pub name: String,
    pub description: Option<String>,
    pub grating: Grating,
    pub mode: GridMode,
    pub boundary_label: BoundaryLabel,
    /// Names of the file stores receiving generated files
    pub filestores: Vec<String>,
}

impl Sheet {
    pub fn new(name: &str, grating: Grating) -> Sheet {
        Sheet {
            name: name.to_lowercase(),
            description: None,
            grating,
            mode: GridMode::Rectangle,
            boundary_label: BoundaryLabel::default(),
            filestores: Vec::new(),
        }
    }
    pub fn description(&self) -> String {
        self.description.clone().unwrap_or("".to_string())
    }
    pub fn extent(&self) -> &Extent {
        self.grating.extent()
    }
    /// Grid overlay features
    pub fn overlay(&self) -> FeatureCollection {
        grid_features(&self.grating, self.mode, self.boundary_label)
    }
}

impl<'a> Config<'a, SheetCfg> for Sheet {
    fn from_config(sheet_cfg: &SheetCfg) -> Result<Self, String> {
        let grating = Grating::from_config(sheet_cfg)?;
        let mode = sheet_cfg
            .mode
            .parse::<GridMode>()
            .map_err(|e| format!("Sheet '{}': {}", sheet_cfg.name, e))?;
        let boundary_label = sheet_cfg
            .boundary_label
            .parse::<BoundaryLabel>()
            .map_err(|e| format!("Sheet '{}': {}", sheet_cfg.name, e))?;
        Ok(Sheet {
            name: sheet_cfg.name.to_lowercase(),
            description: sheet_cfg.description.clone(),
            grating,
            mode,
            boundary_label,
            filestores: sheet_cfg.filestores.clone(),
        })
    }
    fn gen_config() -> String {
        let mut config = Grating::gen_config();
        config.push_str(
            r#"# Overlay geometry: rectangle | lines
#mode = "rectangle"
# Cell labeling a line between two cells: lower | upper
#boundary_label = "lower"
# File stores receiving generated files
#filestores = ["local"]
"#,
        );
        config
    }
    fn gen_runtime_config(&self) -> String {
        let mut config = format!("\n[[sheet]]\nname = \"{}\"\n", self.name);
        if let Some(ref description) = self.description {
            config.push_str(&format!("description = {:?}\n", description));
        }
        config.push_str(&self.grating.gen_runtime_config());
        config.push_str(&format!(
            "mode = \"{}\"\nboundary_label = \"{}\"\n",
            match self.mode {
                GridMode::Rectangle => "rectangle",
                GridMode::Lines => "lines",
            },
            match self.boundary_label {
                BoundaryLabel::Lower => "lower",
                BoundaryLabel::Upper => "upper",
            }
        ));
        if !self.filestores.is_empty() {
            let names: Vec<String> = self.filestores.iter().map(|s| format!("{:?}", s)).collect();
            config.push_str(&format!("filestores = [{}]\n", names.join(", ")));
        }
        config
    }
}
