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

//! common infrastructure for the histeq crates: error/cli definition macros, RON configuration,
//! tracing setup and file system helpers

pub mod macros;
pub mod config;
pub mod logging;
pub mod fs;

/// the max intensity value of 8 bit graymaps
pub const MAX_VAL: u8 = 255;

/// number of distinct 8 bit intensities
pub const N_INTENSITIES: usize = MAX_VAL as usize + 1;
