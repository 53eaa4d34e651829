//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod metadata;
mod runtime_config;
pub mod sheet_service;

pub use runtime_config::{config_from_args, gen_config, service_from_args, sheet_from_args};
pub use sheet_service::SheetService;
