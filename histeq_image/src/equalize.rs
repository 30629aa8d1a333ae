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

//! histogram equalization of 8 bit intensity samples
//!
//! The remapping is the classic CDF stretch
//! ```text
//!   map[i] = ((cdf[i] - cdf_min) * 255) / (count - cdf_min)
//! ```
//! with truncating integer division, where `cdf_min` is the first non-zero CDF value. All tables are
//! fixed 256 element arrays that only live for the duration of one `equalize` call.

use serde::{Serialize, Serializer};
use tracing::debug;
use histeq_common::{MAX_VAL, N_INTENSITIES};

use crate::errors::{Result, HistEqError};

/* #region histogram ************************************************************************************************/

/// per-intensity occurrence counts. All 256 buckets are always present
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Histogram {
    counts: [u64; N_INTENSITIES]
}

impl Histogram {
    pub fn from_samples (samples: &[u8])->Self {
        let mut counts = [0u64; N_INTENSITIES];
        for &v in samples { counts[v as usize] += 1; }
        Histogram { counts }
    }

    pub fn counts (&self)->&[u64; N_INTENSITIES] { &self.counts }

    pub fn count (&self, v: u8)->u64 { self.counts[v as usize] }

    /// the number of samples this histogram was computed from
    pub fn total (&self)->u64 { self.counts.iter().sum() }

    pub fn min_intensity (&self)->Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    pub fn max_intensity (&self)->Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|i| i as u8)
    }

    /// number of different intensities that occur in the samples
    pub fn distinct (&self)->usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn mean (&self)->Option<f64> {
        let n = self.total();
        if n == 0 {
            None
        } else {
            let sum: f64 = self.counts.iter().enumerate().map(|(i,&c)| i as f64 * c as f64).sum();
            Some( sum / n as f64)
        }
    }
}

// serde only derives arrays up to 32 elements
impl Serialize for Histogram {
    fn serialize<S> (&self, serializer: S)->std::result::Result<S::Ok,S::Error> where S: Serializer {
        serializer.collect_seq( self.counts.iter())
    }
}

/* #endregion histogram */

/* #region cumulative distribution *********************************************************************************/

/// running sums of histogram counts, i.e. `values[i]` is the number of samples with intensity <= i
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Cdf {
    values: [u64; N_INTENSITIES]
}

impl Cdf {
    pub fn from_histogram (hist: &Histogram)->Self {
        let mut values = [0u64; N_INTENSITIES];
        let mut acc = 0u64;
        for (i, &c) in hist.counts.iter().enumerate() {
            acc += c;
            values[i] = acc;
        }
        Cdf { values }
    }

    pub fn values (&self)->&[u64; N_INTENSITIES] { &self.values }

    pub fn value (&self, v: u8)->u64 { self.values[v as usize] }

    /// this is always the total sample count
    pub fn total (&self)->u64 { self.values[N_INTENSITIES-1] }

    /// the first non-zero value, scanning from intensity 0 upwards. None if there were no samples
    pub fn cdf_min (&self)->Option<u64> {
        self.values.iter().copied().find(|&c| c > 0)
    }
}

/* #endregion cumulative distribution */

/* #region mapping table *******************************************************************************************/

/// lookup table from input to equalized intensity
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct MappingTable {
    map: [u8; N_INTENSITIES]
}

impl MappingTable {
    pub fn identity ()->Self {
        let mut map = [0u8; N_INTENSITIES];
        for (i, v) in map.iter_mut().enumerate() { *v = i as u8; }
        MappingTable { map }
    }

    /// the equalization stretch for a given CDF.
    /// Fails with `InvalidInput` if the CDF is empty and with `DivisionDegenerate` if all samples
    /// have the same intensity (cdf_min == count), which would be a zero divisor
    pub fn stretch (cdf: &Cdf)->Result<Self> {
        let count = cdf.total();
        let cdf_min = cdf.cdf_min().ok_or_else(|| HistEqError::InvalidInput("empty distribution".into()))?;

        let divisor = count - cdf_min;
        if divisor == 0 {
            return Err( HistEqError::DivisionDegenerate( format!("all {count} samples have the same intensity")))
        }

        let mut map = [0u8; N_INTENSITIES];
        for (i, &c) in cdf.values.iter().enumerate() {
            // intensities below the darkest present one have c < cdf_min but are never looked up
            let v = c.saturating_sub(cdf_min) * MAX_VAL as u64 / divisor;
            map[i] = v as u8; // c <= count hence v <= 255
        }

        Ok( MappingTable { map } )
    }

    pub fn map (&self, v: u8)->u8 { self.map[v as usize] }

    pub fn as_array (&self)->&[u8; N_INTENSITIES] { &self.map }

    pub fn apply (&self, samples: &mut [u8]) {
        for s in samples.iter_mut() {
            *s = self.map[*s as usize];
        }
    }
}

/* #endregion mapping table */

/* #region equalize ************************************************************************************************/

/// what an equalization did to its samples
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize)]
pub enum Equalization {
    /// samples were remapped with the CDF stretch
    Stretched { cdf_min: u64, count: u64 },

    /// all samples have the same intensity - they were left unchanged
    Degenerate { intensity: u8, count: u64 },
}

impl Equalization {
    pub fn is_degenerate (&self)->bool {
        matches!( self, Equalization::Degenerate{..})
    }

    pub fn count (&self)->u64 {
        match self {
            Equalization::Stretched{count,..} => *count,
            Equalization::Degenerate{count,..} => *count,
        }
    }
}

/// histogram equalize all samples in place.
/// An empty buffer is an `InvalidInput` error. A buffer with a single intensity is not stretched
/// (identity mapping) and reported as `Equalization::Degenerate`
pub fn equalize (samples: &mut [u8])->Result<Equalization> {
    let count = samples.len();
    equalize_samples( samples, count)
}

/// histogram equalize the first `count` samples of `buffer` in place.
/// `count` has to be in `1..=buffer.len()`. The buffer is not modified if this returns an error
pub fn equalize_samples (buffer: &mut [u8], count: usize)->Result<Equalization> {
    if count == 0 {
        return Err( HistEqError::InvalidInput("zero sample count".into()))
    }
    if count > buffer.len() {
        return Err( HistEqError::InvalidInput( format!("sample count {count} exceeds buffer length {}", buffer.len())))
    }

    let samples = &mut buffer[..count];
    let hist = Histogram::from_samples( samples);
    let cdf = Cdf::from_histogram( &hist);
    let count = cdf.total();

    match MappingTable::stretch( &cdf) {
        Ok(map) => {
            let cdf_min = cdf.cdf_min().unwrap_or(0);
            debug!("equalizing {count} samples with cdf_min={cdf_min}, divisor={}", count - cdf_min);
            map.apply( samples);
            Ok( Equalization::Stretched { cdf_min, count } )
        }
        Err(HistEqError::DivisionDegenerate(msg)) => {
            debug!("identity mapping: {msg}");
            Ok( Equalization::Degenerate { intensity: samples[0], count } )
        }
        Err(e) => Err(e)
    }
}

/* #endregion equalize */
