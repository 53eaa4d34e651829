//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;

use atlante_core::service::Sheet;
use atlante_service as service;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::{info, Record};
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => match loglevel.unwrap_or("info") {
            "debug" => "debug,tokio=info",
            loglevel => loglevel,
        },
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn bool_arg(args: &ArgMatches<'_>, name: &str, default: bool) -> bool {
    args.value_of(name).map_or(default, |s| {
        s.parse::<bool>().unwrap_or_else(|_| {
            println!("Error parsing '{}' as boolean value", name);
            process::exit(1)
        })
    })
}

fn sheet_or_exit(args: &ArgMatches<'_>) -> Sheet {
    service::sheet_from_args(args).unwrap_or_else(|err| {
        println!("{}", err);
        process::exit(1)
    })
}

fn labels(args: &ArgMatches<'_>) {
    let sheet = sheet_or_exit(args);
    let grating = &sheet.grating;
    for row in 0..grating.rows() {
        println!("row {} {}", row, grating.label_for_row(row as i64));
    }
    for col in 0..grating.cols() {
        println!("col {} {}", col, grating.label_for_col(col as i64));
    }
}

fn grid(args: &ArgMatches<'_>) {
    if args.value_of("config").is_none() && args.value_of("extent").is_none() {
        println!("Either 'config' or 'extent' is required");
        process::exit(1)
    }
    let sheet = sheet_or_exit(args);
    let overlay = sheet.overlay();
    match serde_json::to_string_pretty(&overlay.to_geojson()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            println!("Error encoding GeoJSON: {}", e);
            process::exit(1)
        }
    }
}

fn generate(args: &ArgMatches<'_>) {
    let config = service::config_from_args(&args);
    let service = service::service_from_args(&config, &args);
    let sheet = args.value_of("sheet");
    let progress = bool_arg(args, "progress", true);
    let overwrite = bool_arg(args, "overwrite", false);
    match service.generate(sheet, progress, overwrite) {
        Ok(count) => info!("{} sheet(s) generated", count),
        Err(err) => {
            println!("{}", err);
            process::exit(1)
        }
    }
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("atlante_grating")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("grid reference labels and overlay grids for printed map sheets")
        .subcommand(SubCommand::with_name("labels")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --sheet=[NAME] 'Sheet name'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --rows=[NUM] 'Number of rows'
                                              --cols=[NUM] 'Number of columns'
                                              --flip-y=[true|false] 'Label rows from the bottom upwards'
                                              --flip-x=[true|false] 'Label columns from right to left'
                                              --col-labels=[numeric|alpha] 'Column label style'")
                        .about("Print row and column labels"))
        .subcommand(SubCommand::with_name("grid")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --sheet=[NAME] 'Sheet name'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --extent=[minx,miny,maxx,maxy] 'Extent of the grid'
                                              --rows=[NUM] 'Number of rows'
                                              --cols=[NUM] 'Number of columns'
                                              --flip-y=[true|false] 'Label rows from the bottom upwards'
                                              --flip-x=[true|false] 'Label columns from right to left'
                                              --col-labels=[numeric|alpha] 'Column label style'
                                              --lines=[true|false] 'Boundary lines instead of cell polygons'
                                              --boundary-label=[lower|upper] 'Cell labeling a shared boundary line'")
                        .about("Print grid overlay as GeoJSON"))
        .subcommand(SubCommand::with_name("generate")
                        .args_from_usage("-c, --config=<FILE> 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --sheet=[NAME] 'Sheet name'
                                              --progress=[true|false] 'Show progress bar'
                                              --overwrite=[false|true] 'Overwrite previously generated files'")
                        .about("Generate overlay and label index files of configured sheets"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("labels", Some(sub_m)) => {
                init_logger(sub_m);
                labels(sub_m);
            }
            ("grid", Some(sub_m)) => {
                init_logger(sub_m);
                grid(sub_m);
            }
            ("generate", Some(sub_m)) => {
                init_logger(sub_m);
                generate(sub_m);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", service::gen_config(sub_m));
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
