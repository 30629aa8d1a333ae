/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

//! histogram equalization of binary portable graymaps (P5)

mod errors;
pub use errors::{Result, HistEqError};

pub mod equalize;
pub use equalize::{equalize, equalize_samples, Equalization, Histogram, Cdf, MappingTable};

pub mod pgm;
pub use pgm::{PgmImage, load_pgm, load_pgm_path, parse_pgm, write_pgm, write_pgm_path, pgm_to_bytes};

pub mod config;
pub use config::EqualizeConfig;

pub mod pipeline;
pub use pipeline::{equalize_pgm_file, equalize_pgm_bytes, EqualizeReport};

pub mod report;
pub use report::HistogramReport;
