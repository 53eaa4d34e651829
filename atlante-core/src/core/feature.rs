//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::geom::GeometryType;
use grating::Extent;

/// Supported feature attribute value types
#[derive(Clone, PartialEq, Debug)]
pub enum FeatureAttrValType {
    String(String),
    UInt(u64),
}

pub trait Feature {
    fn fid(&self) -> Option<u64>;
    fn attributes(&self) -> Vec<FeatureAttr>;
    fn geometry(&self) -> GeometryType;
}

#[derive(Clone, PartialEq, Debug)]
pub struct FeatureAttr {
    pub key: String,
    pub value: FeatureAttrValType,
}

impl FeatureAttr {
    pub fn new(key: &str, value: FeatureAttrValType) -> FeatureAttr {
        FeatureAttr {
            key: key.to_string(),
            value,
        }
    }
}

/// Feature of a grid overlay
#[derive(Clone, PartialEq, Debug)]
pub struct GridFeature {
    pub fid: Option<u64>,
    pub attributes: Vec<FeatureAttr>,
    pub geometry: GeometryType,
}

impl GridFeature {
    pub fn attribute(&self, key: &str) -> Option<&FeatureAttrValType> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| &attr.value)
    }
    pub fn str_attribute(&self, key: &str) -> Option<&str> {
        match self.attribute(key) {
            Some(FeatureAttrValType::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }
    pub fn uint_attribute(&self, key: &str) -> Option<u64> {
        match self.attribute(key) {
            Some(FeatureAttrValType::UInt(v)) => Some(*v),
            _ => None,
        }
    }
}

impl Feature for GridFeature {
    fn fid(&self) -> Option<u64> {
        self.fid
    }
    fn attributes(&self) -> Vec<FeatureAttr> {
        self.attributes.clone()
    }
    fn geometry(&self) -> GeometryType {
        self.geometry.clone()
    }
}

/// Ordered grid features
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FeatureCollection {
    pub features: Vec<GridFeature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, GridFeature> {
        self.features.iter()
    }
    /// Union of all feature bounding boxes
    pub fn bbox(&self) -> Option<Extent> {
        self.features
            .iter()
            .filter_map(|f| f.geometry.bbox())
            .fold(None, |acc: Option<Extent>, ext| match acc {
                None => Some(ext),
                Some(acc) => Some(Extent {
                    minx: acc.minx.min(ext.minx),
                    miny: acc.miny.min(ext.miny),
                    maxx: acc.maxx.max(ext.maxx),
                    maxy: acc.maxy.max(ext.maxy),
                }),
            })
    }
}
