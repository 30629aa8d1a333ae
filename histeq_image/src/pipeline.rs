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

use std::path::PathBuf;
use serde::Serialize;
use tracing::{info, warn};
use histeq_common::fs::filename;

use crate::errors::{Result, HistEqError};
use crate::config::EqualizeConfig;
use crate::equalize::Equalization;
use crate::pgm::{PgmImage, load_pgm_path, parse_pgm, write_pgm_path};

/// summary of an equalized file
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct EqualizeReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub equalization: Equalization,
}

/// load the configured input graymap, equalize it and write the result.
/// Nothing is written if loading or equalization fails
pub fn equalize_pgm_file (config: &EqualizeConfig)->Result<EqualizeReport> {
    let mut img = load_pgm_path( &config.input)?;
    if !config.overwrite && config.output.exists() {
        return Err( HistEqError::OutputExists( config.output.to_string_lossy().to_string()))
    }
    info!("input image: {} ({}x{})", filename( &config.input).unwrap_or("?"), img.width, img.height);

    let equalization = equalize_image( &mut img, config.fail_on_degenerate)?;

    write_pgm_path( &config.output, &img, config.overwrite)?;
    info!("histogram equalization done -> {}", config.output.display());

    Ok( EqualizeReport {
        input: config.input.clone(),
        output: config.output.clone(),
        width: img.width,
        height: img.height,
        equalization
    })
}

/// equalize a complete in-memory P5 graymap, returning the serialized result
pub fn equalize_pgm_bytes (data: &[u8])->Result<(Vec<u8>,Equalization)> {
    let mut img = parse_pgm( data)?;
    let equalization = equalize_image( &mut img, false)?;
    Ok( (img.to_bytes()?, equalization) )
}

pub fn equalize_image (img: &mut PgmImage, fail_on_degenerate: bool)->Result<Equalization> {
    let equalization = img.equalize()?;

    if let Equalization::Degenerate { intensity, count } = equalization {
        if fail_on_degenerate {
            return Err( HistEqError::DivisionDegenerate( format!("all {count} pixels have intensity {intensity}")))
        }
        warn!("all {count} pixels have intensity {intensity}, image left unchanged");
    }

    Ok( equalization )
}
