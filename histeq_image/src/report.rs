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

use serde::Serialize;

use crate::equalize::{Cdf, Histogram};
use crate::pgm::PgmImage;

/// intensity distribution summary of a graymap
#[derive(Serialize,Debug,Clone)]
pub struct HistogramReport {
    pub width: usize,
    pub height: usize,
    pub count: u64,
    pub min: Option<u8>,
    pub max: Option<u8>,
    pub distinct: usize,
    pub mean: Option<f64>,
    pub cdf_min: Option<u64>,
    pub histogram: Histogram,
}

impl HistogramReport {
    pub fn from_image (img: &PgmImage)->Self {
        let histogram = Histogram::from_samples( &img.pixels);
        let cdf_min = Cdf::from_histogram( &histogram).cdf_min();

        HistogramReport {
            width: img.width,
            height: img.height,
            count: histogram.total(),
            min: histogram.min_intensity(),
            max: histogram.max_intensity(),
            distinct: histogram.distinct(),
            mean: histogram.mean(),
            cdf_min,
            histogram
        }
    }

    pub fn to_json (&self, pretty: bool)->serde_json::Result<String> {
        if pretty { serde_json::to_string_pretty( self) } else { serde_json::to_string( self) }
    }
}
