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

use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use histeq_common::config::load_config_path;

use crate::errors::Result;

pub const DEFAULT_INPUT: &str = "input.pgm";
pub const DEFAULT_OUTPUT: &str = "output.pgm";

/// configuration for equalizing a PGM file. All fields are optional in RON config files, e.g.
/// ```text
/// EqualizeConfig(
///     input: "scans/frame_042.pgm",
///     output: "scans/frame_042_eq.pgm",
///     overwrite: true,
/// )
/// ```
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct EqualizeConfig {
    pub input: PathBuf,
    pub output: PathBuf,

    /// replace existing output files
    pub overwrite: bool,

    /// treat single-intensity images as error instead of passing them through unchanged
    pub fail_on_degenerate: bool,
}

impl Default for EqualizeConfig {
    fn default()->Self {
        EqualizeConfig {
            input: PathBuf::from( DEFAULT_INPUT),
            output: PathBuf::from( DEFAULT_OUTPUT),
            overwrite: false,
            fail_on_degenerate: false,
        }
    }
}

impl EqualizeConfig {
    pub fn new (input: impl Into<PathBuf>, output: impl Into<PathBuf>)->Self {
        EqualizeConfig { input: input.into(), output: output.into(), ..Default::default() }
    }

    pub fn load<P: AsRef<Path>> (path: P)->Result<Self> {
        Ok( load_config_path( path)? )
    }
}
