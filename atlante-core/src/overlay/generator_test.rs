//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::feature::GridFeature;
use crate::core::geom::{is_closed, GeometryType};
use crate::core::geom_test::signed_area;
use crate::overlay::{generate_grid, grid_features, BoundaryLabel, GridMode};
use grating::{Extent, Grating, GratingError};

fn labels(features: &[GridFeature], key: &str) -> Vec<String> {
    features
        .iter()
        .map(|f| f.str_attribute(key).unwrap_or("").to_string())
        .collect()
}

#[test]
fn test_rectangle_tessellation() {
    let extent = Extent::new(0.0, 0.0, 9.0, 3.0);
    let fc = generate_grid(&extent, 3, 3, false, true).unwrap();
    assert_eq!(fc.len(), 9);
    assert_eq!(fc.bbox(), Some(extent));

    let cells: Vec<Extent> = fc.iter().map(|f| f.geometry.bbox().unwrap()).collect();
    let area: f64 = cells.iter().map(|c| c.width() * c.height()).sum();
    assert_eq!(area, 27.0);
    for (i, a) in cells.iter().enumerate() {
        for b in cells.iter().skip(i + 1) {
            let overlap_x = a.minx < b.maxx && b.minx < a.maxx;
            let overlap_y = a.miny < b.maxy && b.miny < a.maxy;
            assert!(!(overlap_x && overlap_y), "{:?} overlaps {:?}", a, b);
        }
    }

    for feature in fc.iter() {
        match &feature.geometry {
            GeometryType::Polygon(poly) => {
                assert_eq!(poly.rings.len(), 1);
                assert_eq!(poly.rings[0].points.len(), 5);
                assert!(is_closed(&poly.rings[0]));
                assert!(signed_area(&poly.rings[0]) > 0.0);
            }
            geom => panic!("unexpected geometry {:?}", geom),
        }
    }
}

#[test]
fn test_rectangle_properties() {
    let extent = Extent::new(0.0, 0.0, 9.0, 3.0);
    let fc = generate_grid(&extent, 3, 3, false, true).unwrap();
    let first = &fc.features[0];
    assert_eq!(first.fid, Some(0));
    assert_eq!(first.uint_attribute("row"), Some(0));
    assert_eq!(first.uint_attribute("col"), Some(0));
    assert_eq!(first.str_attribute("row_label"), Some("C"));
    assert_eq!(first.str_attribute("col_label"), Some("1"));
    assert_eq!(
        first.geometry.bbox(),
        Some(Extent {
            minx: 0.0,
            miny: 0.0,
            maxx: 3.0,
            maxy: 1.0
        })
    );
    assert_eq!(
        labels(&fc.features, "row_label").join(""),
        "CCCBBBAAA"
    );
    assert_eq!(labels(&fc.features, "col_label").join(""), "123123123");

    let fc = generate_grid(&extent, 3, 3, true, true).unwrap();
    assert_eq!(
        labels(&fc.features, "row_label").join(""),
        "AAABBBCCC"
    );
}

#[test]
fn test_geographic_extent() {
    let extent = Extent::new(-122.48015, 48.753224, -122.38391, 48.781091);
    let fc = generate_grid(&extent, 3, 3, false, true).unwrap();
    assert_eq!(fc.len(), 9);
    assert_eq!(fc.bbox(), Some(extent.clone()));

    let fc = generate_grid(&extent, 7, 11, false, true).unwrap();
    assert_eq!(fc.len(), 77);
    assert_eq!(fc.bbox(), Some(extent));
}

#[test]
fn test_lines() {
    let extent = Extent::new(0.0, 0.0, 9.0, 3.0);
    let fc = generate_grid(&extent, 3, 4, false, false).unwrap();
    assert_eq!(fc.len(), 4 + 5);
    assert_eq!(fc.bbox(), Some(extent.clone()));

    let (hlines, vlines) = fc.features.split_at(4);
    assert!(hlines
        .iter()
        .all(|f| f.str_attribute("axis") == Some("row") && f.attribute("col").is_none()));
    assert!(vlines
        .iter()
        .all(|f| f.str_attribute("axis") == Some("col") && f.attribute("row").is_none()));

    // shared boundaries carry the label of the lower cell
    assert_eq!(labels(hlines, "row_label"), vec!["C", "C", "B", "A"]);
    assert_eq!(labels(vlines, "col_label"), vec!["1", "1", "2", "3", "4"]);
    let rows: Vec<Option<u64>> = hlines.iter().map(|f| f.uint_attribute("row")).collect();
    assert_eq!(rows, vec![Some(0), Some(0), Some(1), Some(2)]);

    let ys: Vec<f64> = hlines
        .iter()
        .map(|f| f.geometry.bbox().unwrap().miny)
        .collect();
    assert_eq!(ys, vec![0.0, 1.0, 2.0, 3.0]);
    for line in hlines {
        let bbox = line.geometry.bbox().unwrap();
        assert_eq!((bbox.minx, bbox.maxx), (0.0, 9.0));
    }
    let xs: Vec<f64> = vlines
        .iter()
        .map(|f| f.geometry.bbox().unwrap().minx)
        .collect();
    assert_eq!(xs, vec![0.0, 2.25, 4.5, 6.75, 9.0]);
}

#[test]
fn test_lines_upper_label() {
    let grating = Grating::new(Extent::new(0.0, 0.0, 9.0, 3.0), 3, 4, true).unwrap();
    let fc = grid_features(&grating, GridMode::Lines, BoundaryLabel::Upper);
    let (hlines, vlines) = fc.features.split_at(4);
    assert_eq!(labels(hlines, "row_label"), vec!["A", "B", "C", "C"]);
    assert_eq!(labels(vlines, "col_label"), vec!["1", "2", "3", "4", "4"]);
    let boundaries: Vec<Option<u64>> = vlines
        .iter()
        .map(|f| f.uint_attribute("boundary"))
        .collect();
    assert_eq!(boundaries, vec![Some(0), Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn test_boundary_label() {
    assert_eq!(BoundaryLabel::Lower.cell_index(0, 3), 0);
    assert_eq!(BoundaryLabel::Lower.cell_index(1, 3), 0);
    assert_eq!(BoundaryLabel::Lower.cell_index(3, 3), 2);
    assert_eq!(BoundaryLabel::Upper.cell_index(0, 3), 0);
    assert_eq!(BoundaryLabel::Upper.cell_index(1, 3), 1);
    assert_eq!(BoundaryLabel::Upper.cell_index(3, 3), 2);
    assert_eq!(BoundaryLabel::Upper.cell_index(1, 1), 0);

    assert_eq!("upper".parse::<BoundaryLabel>(), Ok(BoundaryLabel::Upper));
    assert_eq!("Lower".parse::<BoundaryLabel>(), Ok(BoundaryLabel::Lower));
    assert!("middle".parse::<BoundaryLabel>().is_err());
    assert_eq!("rectangle".parse::<GridMode>(), Ok(GridMode::Rectangle));
    assert_eq!("grating".parse::<GridMode>(), Ok(GridMode::Lines));
    assert_eq!("lines".parse::<GridMode>(), Ok(GridMode::Lines));
    assert!("dots".parse::<GridMode>().is_err());
}

#[test]
fn test_invalid_dimension() {
    let extent = Extent::new(0.0, 0.0, 9.0, 3.0);
    match generate_grid(&extent, 0, 3, false, true) {
        Err(GratingError::InvalidDimension(_)) => {}
        other => panic!("expected InvalidDimension, got {:?}", other),
    }
    assert!(generate_grid(&extent, 3, 0, false, false).is_err());
    let flat = Extent::new(0.0, 1.0, 9.0, 1.0);
    assert!(generate_grid(&flat, 3, 3, false, true).is_err());
}

#[test]
fn test_single_cell() {
    let extent = Extent::new(5.0, 5.0, 6.0, 7.0);
    let fc = generate_grid(&extent, 1, 1, false, true).unwrap();
    assert_eq!(fc.len(), 1);
    assert_eq!(fc.features[0].str_attribute("row_label"), Some("A"));

    let fc = generate_grid(&extent, 1, 1, false, false).unwrap();
    assert_eq!(fc.len(), 4);
    assert!(fc
        .iter()
        .all(|f| f.str_attribute("row_label").or(f.str_attribute("col_label")).is_some()));
}
