//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::sheet_service::SheetService;
use atlante_core::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use atlante_core::core::gratingcfg::col_labels_from_cfg;
use atlante_core::core::{parse_config, read_config, Config};
use atlante_core::overlay::{BoundaryLabel, GridMode};
use atlante_core::service::Sheet;
use clap::ArgMatches;
use grating::{Extent, Grating};
use std::process;
use std::str::FromStr;

pub fn config_from_args(args: &ArgMatches) -> ApplicationCfg {
    if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        for argname in vec!["rows", "cols", "extent"] {
            if args.value_of(argname).is_some() {
                warn!("Ignoring argument `{}`", argname);
            }
        }
        read_config(cfgpath).unwrap_or_else(|err| {
            println!("Error reading configuration - {} ", err);
            process::exit(1)
        })
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "").unwrap_or_else(|err| {
            println!("Error reading configuration - {} ", err);
            process::exit(1)
        })
    }
}

pub fn service_from_args(config: &ApplicationCfg, _args: &ArgMatches) -> SheetService {
    SheetService::from_config(config).unwrap_or_else(|err| {
        println!("Error reading configuration - {} ", err);
        process::exit(1)
    })
}

fn parse_arg<T: FromStr>(args: &ArgMatches, name: &str) -> Result<Option<T>, String> {
    args.value_of(name)
        .map(|s| {
            s.parse::<T>()
                .map_err(|_| format!("Error parsing '{}' value '{}'", name, s))
        })
        .transpose()
}

fn parse_extent(numlist: &str) -> Result<Extent, String> {
    let arr = numlist
        .split(",")
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| "Error parsing 'extent' as list of float values".to_string())?;
    match arr.as_slice() {
        &[minx, miny, maxx, maxy] => Ok(Extent::new(minx, miny, maxx, maxy)),
        _ => Err("'extent' requires 4 values: minx,miny,maxx,maxy".to_string()),
    }
}

/// Sheet from a configuration file or from command line parameters
pub fn sheet_from_args(args: &ArgMatches) -> Result<Sheet, String> {
    if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        let config: ApplicationCfg = read_config(cfgpath)?;
        let service = SheetService::from_config(&config)?;
        let sheet = match args.value_of("sheet") {
            Some(name) => service.sheet(name),
            None if service.sheets.len() == 1 => service.sheets.first(),
            None => return Err("Argument 'sheet' is required".to_string()),
        };
        return sheet
            .cloned()
            .ok_or(format!("Sheet '{}' not found", args.value_of("sheet").unwrap_or("")));
    }
    let rows: u32 = parse_arg(args, "rows")?
        .ok_or("Either 'config' or 'rows' is required".to_string())?;
    let cols: u32 = parse_arg(args, "cols")?.unwrap_or(1);
    let extent = match args.value_of("extent") {
        Some(numlist) => parse_extent(numlist)?,
        None => Extent::new(0.0, 0.0, cols as f64, rows as f64),
    };
    let flip_y = parse_arg(args, "flip-y")?.unwrap_or(false);
    let flip_x = parse_arg(args, "flip-x")?.unwrap_or(false);
    let col_labels = col_labels_from_cfg(args.value_of("col-labels").unwrap_or("numeric"))?;
    let lines = parse_arg(args, "lines")?.unwrap_or(false);
    let grating = Grating::new(extent, rows, cols, flip_y)
        .map_err(|e| e.to_string())?
        .with_flip_x_label(flip_x)
        .with_col_labels(col_labels);
    let mut sheet = Sheet::new("grid", grating);
    if lines {
        sheet.mode = GridMode::Lines;
    }
    sheet.boundary_label = parse_arg::<BoundaryLabel>(args, "boundary-label")?.unwrap_or_default();
    Ok(sheet)
}

pub fn gen_config(args: &ArgMatches) -> String {
    if args.value_of("config").is_some() {
        let service = service_from_args(&config_from_args(args), args);
        service.gen_runtime_config()
    } else {
        SheetService::gen_config()
    }
}

#[cfg(test)]
fn sheet_args(argv: &[&str]) -> Result<Sheet, String> {
    use clap::{App, SubCommand};

    let app = App::new("test").subcommand(SubCommand::with_name("grid").args_from_usage(
        "-c, --config=[FILE] 'Config file'
         --sheet=[NAME] 'Sheet name'
         --extent=[minx,miny,maxx,maxy] 'Extent'
         --rows=[NUM] 'Rows'
         --cols=[NUM] 'Columns'
         --flip-y=[true|false] 'Flip row labels'
         --flip-x=[true|false] 'Flip column labels'
         --col-labels=[numeric|alpha] 'Column labels'
         --lines=[true|false] 'Lines'
         --boundary-label=[lower|upper] 'Boundary label'",
    ));
    let mut cmd = vec!["test", "grid"];
    cmd.extend_from_slice(argv);
    let matches = app.get_matches_from(cmd);
    let sub_m = matches.subcommand_matches("grid").unwrap();
    sheet_from_args(sub_m)
}

#[test]
fn test_gen_config() {
    let args = ArgMatches::new();
    let toml = gen_config(&args);
    println!("{}", toml);
    assert_eq!(Some("# atlante grating configuration"), toml.lines().next());

    let config = parse_config(toml, "").unwrap();
    let service = SheetService::from_config(&config).unwrap();
    assert_eq!(service.sheets.len(), 1);
    assert!(service.filestores.is_empty());
}

#[test]
fn test_sheet_from_args() {
    let sheet = sheet_args(&["--rows=3", "--cols=4", "--extent=0,0,9,3", "--lines=true"]).unwrap();
    assert_eq!(sheet.grating.rows(), 3);
    assert_eq!(sheet.grating.cols(), 4);
    assert_eq!(sheet.extent(), &Extent::new(0.0, 0.0, 9.0, 3.0));
    assert_eq!(sheet.mode, GridMode::Lines);
    assert_eq!(sheet.boundary_label, BoundaryLabel::Lower);
    assert_eq!(sheet.grating.label_for_row(0), "C");

    let sheet = sheet_args(&[
        "--rows=10",
        "--flip-y=true",
        "--col-labels=alpha",
        "--boundary-label=upper",
    ])
    .unwrap();
    assert_eq!(sheet.grating.label_for_row(9), "K");
    assert_eq!(sheet.grating.cols(), 1);
    assert_eq!(sheet.grating.label_for_col(0), "A");
    assert_eq!(sheet.mode, GridMode::Rectangle);
    assert_eq!(sheet.boundary_label, BoundaryLabel::Upper);
}

#[test]
fn test_sheet_args_errors() {
    assert_eq!(
        sheet_args(&[]).err(),
        Some("Either 'config' or 'rows' is required".to_string())
    );
    assert_eq!(
        sheet_args(&["--rows=x"]).err(),
        Some("Error parsing 'rows' value 'x'".to_string())
    );
    assert!(sheet_args(&["--rows=3", "--extent=0,0,9"]).is_err());
    assert!(sheet_args(&["--rows=0"]).is_err());
}

#[test]
fn test_sheet_from_config_file() {
    let sheet = sheet_args(&["-c", "src/test/example.toml", "--sheet=Bellingham"]).unwrap();
    assert_eq!(sheet.name, "bellingham");
    assert_eq!(sheet.grating.rows(), 3);

    assert_eq!(
        sheet_args(&["-c", "src/test/example.toml"]).err(),
        Some("Argument 'sheet' is required".to_string())
    );
    assert_eq!(
        sheet_args(&["-c", "src/test/example.toml", "--sheet=nowhere"]).err(),
        Some("Sheet 'nowhere' not found".to_string())
    );
    assert_eq!(
        sheet_args(&["-c", "src/test/missing.toml", "--sheet=bellingham"]).err(),
        Some("Could not find config file!".to_string())
    );
}
