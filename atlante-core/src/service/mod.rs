//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod sheet;

#[cfg(test)]
mod sheet_test;

pub use self::sheet::Sheet;
