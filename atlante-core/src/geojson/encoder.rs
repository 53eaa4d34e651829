//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Encode features as GeoJSON
//! https://tools.ietf.org/html/rfc7946

use crate::core::feature::{Feature, FeatureAttrValType, FeatureCollection};
use crate::core::geom::{GeometryType, LineString, Point};
use serde_json::{Map, Value};

fn position(p: &Point) -> Value {
    json!([p.x, p.y])
}

fn positions(line: &LineString) -> Value {
    Value::Array(line.points.iter().map(position).collect())
}

pub fn geometry_to_json(geom: &GeometryType) -> Value {
    match geom {
        &GeometryType::LineString(ref l) => json!({
            "type": "LineString",
            "coordinates": positions(l)
        }),
        &GeometryType::Polygon(ref p) => json!({
            "type": "Polygon",
            "coordinates": p.rings.iter().map(positions).collect::<Vec<_>>()
        }),
    }
}

fn attr_value_to_json(value: &FeatureAttrValType) -> Value {
    match value {
        FeatureAttrValType::String(v) => json!(v),
        FeatureAttrValType::UInt(v) => json!(v),
    }
}

pub fn feature_to_json(feature: &dyn Feature) -> Value {
    let mut properties = Map::new();
    for attr in feature.attributes() {
        properties.insert(attr.key, attr_value_to_json(&attr.value));
    }
    let mut json = json!({
        "type": "Feature",
        "geometry": geometry_to_json(&feature.geometry()),
        "properties": properties
    });
    if let Some(fid) = feature.fid() {
        json["id"] = json!(fid);
    }
    json
}

impl FeatureCollection {
    /// GeoJSON FeatureCollection
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .features
            .iter()
            .map(|f| feature_to_json(f))
            .collect();
        let mut json = json!({
            "type": "FeatureCollection",
            "features": features
        });
        if let Some(ext) = self.bbox() {
            json["bbox"] = json!([ext.minx, ext.miny, ext.maxx, ext.maxy]);
        }
        json
    }

    pub fn to_geojson_vec(&self) -> Result<Vec<u8>, serde_json::error::Error> {
        serde_json::to_vec(&self.to_geojson())
    }
}
