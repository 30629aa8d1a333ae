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
use anyhow::Result;
use histeq_common::{define_cli, check_cli, config::load_config_or_default, logging};
use histeq_image::{equalize_pgm_file, EqualizeConfig};

define_cli! { ARGS [about="histogram equalize binary PGM (P5) image"] =
    config: Option<String> [help="optional RON config file (EqualizeConfig)", long, short],
    force: bool [help="overwrite existing output file", long, short],
    strict: bool [help="fail on single-intensity images instead of copying them", long],
    verbose: bool [help="debug level logging", long, short],
    input: Option<String> [help="filename of P5 image to equalize (default: input.pgm)"],
    output: Option<String> [help="filename of equalized output image (default: output.pgm)"]
}

fn main()->Result<()> {
    check_cli!(ARGS);

    if ARGS.verbose { logging::init_tracing_with("debug") } else { logging::init_tracing() }

    let mut config: EqualizeConfig = load_config_or_default( ARGS.config.as_ref())?;
    if let Some(input) = &ARGS.input { config.input = PathBuf::from(input) }
    if let Some(output) = &ARGS.output { config.output = PathBuf::from(output) }
    if ARGS.force { config.overwrite = true }
    if ARGS.strict { config.fail_on_degenerate = true }

    let report = equalize_pgm_file( &config)?;
    if report.equalization.is_degenerate() {
        println!("{} copied unchanged to {} (single intensity)", report.input.display(), report.output.display());
    } else {
        println!("equalized {} ({}x{}) -> {}", report.input.display(), report.width, report.height, report.output.display());
    }

    Ok(())
}
