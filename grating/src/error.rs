//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GratingError {
    /// Row/column counts or extent which cannot be divided into cells
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
}
