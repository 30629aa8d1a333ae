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

use anyhow::Result;
use histeq_common::{define_cli, check_cli, logging};
use histeq_image::{load_pgm_path, pipeline::equalize_image, HistogramReport};

define_cli! { ARGS [about="print intensity histogram of binary PGM (P5) image as JSON"] =
    equalized: bool [help="report histogram of equalized image", long, short],
    compact: bool [help="single line JSON output", long],
    src_file: String [help="filename of P5 image to analyze"]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    logging::init_tracing();

    let mut img = load_pgm_path( &ARGS.src_file)?;
    if ARGS.equalized {
        equalize_image( &mut img, false)?;
    }

    let report = HistogramReport::from_image( &img);
    println!("{}", report.to_json( !ARGS.compact)?);

    Ok(())
}
