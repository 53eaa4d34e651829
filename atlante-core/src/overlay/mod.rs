//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod generator;

#[cfg(test)]
mod generator_test;

pub use self::generator::{generate_grid, grid_features, BoundaryLabel, GridMode};
