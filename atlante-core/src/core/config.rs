//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::gratingcfg::ExtentCfg;
use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    #[serde(rename = "filestore", default)]
    pub filestores: Vec<FilestoreCfg>,
    #[serde(rename = "sheet", default)]
    pub sheets: Vec<SheetCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FilestoreCfg {
    pub name: String,
    /// Store type (file)
    #[serde(rename = "type")]
    pub store_type: String,
    /// Base directory of file stores
    pub base: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SheetCfg {
    pub name: String,
    pub description: Option<String>,
    /// The extent divided into rows and columns, in the rendering SRS.
    /// Must be specified as 4 floating point numbers ordered as minx, miny, maxx, maxy.
    pub extent: ExtentCfg,
    /// Number of rows (has precedence over cell_height)
    pub rows: Option<u32>,
    /// Number of columns (has precedence over cell_width)
    pub cols: Option<u32>,
    /// Approximate cell height in ground units
    pub cell_height: Option<f64>,
    /// Approximate cell width in ground units
    pub cell_width: Option<f64>,
    /// Label rows from bottom ("A") to top
    #[serde(default)]
    pub flip_y_label: bool,
    /// Label columns from right to left
    #[serde(default)]
    pub flip_x_label: bool,
    /// Column labels (numeric, alpha)
    #[serde(default = "default_col_labels")]
    pub col_labels: String,
    /// Overlay geometry (rectangle, lines)
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Label of lines between two cells (lower, upper)
    #[serde(default = "default_boundary_label")]
    pub boundary_label: String,
    #[serde(default)]
    pub filestores: Vec<String>,
}

pub fn default_col_labels() -> String {
    "numeric".to_string()
}

pub fn default_mode() -> String {
    "rectangle".to_string()
}

pub fn default_boundary_label() -> String {
    "lower".to_string()
}

pub const DEFAULT_CONFIG: &'static str = r#"
[[sheet]]
name = "sheet"
extent = { minx = -180.0, miny = -90.0, maxx = 180.0, maxy = 90.0 }
rows = 9
cols = 18
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
