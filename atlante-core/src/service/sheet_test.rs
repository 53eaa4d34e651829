//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::SheetCfg;
use crate::core::{parse_config, Config};
use crate::overlay::{BoundaryLabel, GridMode};
use crate::service::Sheet;
use grating::{Extent, Grating};

fn sheet_from_config(toml: &str) -> Result<Sheet, String> {
    let config: SheetCfg = parse_config(toml.to_string(), "")?;
    Sheet::from_config(&config)
}

#[test]
fn test_sheet_from_config() {
    let toml = r#"
        name = "Bellingham"
        description = "Downtown Bellingham"
        extent = { minx = -122.48015, miny = 48.753224, maxx = -122.38391, maxy = 48.781091 }
        rows = 3
        cols = 3
        filestores = ["local"]
        "#;
    let sheet = sheet_from_config(toml).unwrap();
    assert_eq!(sheet.name, "bellingham");
    assert_eq!(sheet.description(), "Downtown Bellingham");
    assert_eq!(sheet.mode, GridMode::Rectangle);
    assert_eq!(sheet.boundary_label, BoundaryLabel::Lower);
    assert_eq!(sheet.filestores, vec!["local".to_string()]);
    assert_eq!(sheet.extent().minx, -122.48015);

    let overlay = sheet.overlay();
    assert_eq!(overlay.len(), 9);
    assert_eq!(overlay.features[0].str_attribute("row_label"), Some("C"));
}

#[test]
fn test_line_sheet() {
    let toml = r#"
        name = "lines"
        extent = { minx = 0.0, miny = 0.0, maxx = 9.0, maxy = 3.0 }
        rows = 3
        cols = 4
        mode = "lines"
        boundary_label = "upper"
        "#;
    let sheet = sheet_from_config(toml).unwrap();
    assert_eq!(sheet.mode, GridMode::Lines);
    assert_eq!(sheet.boundary_label, BoundaryLabel::Upper);
    assert_eq!(sheet.overlay().len(), 4 + 5);

    let toml = r#"
        name = "dots"
        extent = { minx = 0.0, miny = 0.0, maxx = 9.0, maxy = 3.0 }
        rows = 3
        cols = 4
        mode = "dots"
        "#;
    assert_eq!(
        sheet_from_config(toml).err(),
        Some("Sheet 'dots': Unexpected enum value 'dots'".to_string())
    );
}

#[test]
fn test_sheet_runtime_config() {
    let grating = Grating::new(Extent::new(0.0, 0.0, 9.0, 3.0), 3, 4, true).unwrap();
    let mut sheet = Sheet::new("Grid", grating);
    sheet.mode = GridMode::Lines;
    sheet.description = Some("9 by 3".to_string());
    sheet.filestores = vec!["a".to_string(), "b".to_string()];
    let config = sheet.gen_runtime_config();
    assert!(config.contains("[[sheet]]"));

    let toml = config.replace("[[sheet]]", "");
    let roundtrip = sheet_from_config(&toml).unwrap();
    assert_eq!(roundtrip.name, "grid");
    assert_eq!(roundtrip.description(), "9 by 3");
    assert_eq!(roundtrip.grating, sheet.grating);
    assert_eq!(roundtrip.mode, GridMode::Lines);
    assert_eq!(roundtrip.filestores, sheet.filestores);

    assert!(Sheet::gen_config().contains("boundary_label"));
}
