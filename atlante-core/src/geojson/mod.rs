//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod encoder;


pub use self::encoder::{feature_to_json, geometry_to_json};
