//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use grating::Extent;
use postgis::ewkb;

// Aliases for rust-postgis geometry types
pub type Point = ewkb::Point;
pub type LineString = ewkb::LineString;
pub type Polygon = ewkb::Polygon;

/// Straight line through `points`
pub fn line(points: Vec<Point>) -> LineString {
    LineString { points, srid: None }
}

pub fn is_closed(line: &LineString) -> bool {
    line.points.len() > 3 && line.points.first() == line.points.last()
}

/// Rectangle with a closed counter-clockwise exterior ring
pub fn rectangle(extent: &Extent) -> Polygon {
    let ring = line(vec![
        Point::new(extent.minx, extent.miny, None),
        Point::new(extent.maxx, extent.miny, None),
        Point::new(extent.maxx, extent.maxy, None),
        Point::new(extent.minx, extent.maxy, None),
        Point::new(extent.minx, extent.miny, None),
    ]);
    Polygon {
        rings: vec![ring],
        srid: None,
    }
}

/// Generic Geometry Data Type
#[derive(PartialEq, Clone, Debug)]
pub enum GeometryType {
    LineString(LineString),
    Polygon(Polygon),
}

impl GeometryType {
    pub fn is_empty(&self) -> bool {
        match self {
            &GeometryType::LineString(ref p) => p.points.len() == 0,
            &GeometryType::Polygon(ref p) => p.rings.len() == 0,
        }
    }
    /// Bounding box, `None` for empty geometries
    pub fn bbox(&self) -> Option<Extent> {
        let points: Vec<&Point> = match self {
            &GeometryType::LineString(ref l) => l.points.iter().collect(),
            &GeometryType::Polygon(ref p) => p.rings.iter().flat_map(|r| &r.points).collect(),
        };
        let first = points.first()?;
        let init = Extent {
            minx: first.x,
            miny: first.y,
            maxx: first.x,
            maxy: first.y,
        };
        Some(points.iter().fold(init, |ext, p| Extent {
            minx: ext.minx.min(p.x),
            miny: ext.miny.min(p.y),
            maxx: ext.maxx.max(p.x),
            maxy: ext.maxy.max(p.y),
        }))
    }
}
