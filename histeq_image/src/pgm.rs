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

//! binary portable graymap (P5) reader and writer
//!
//! We only support 8 bit P5 data: the magic bytes "P5", whitespace separated width, height and maxval
//! fields (with optional '#' comments up to the end of the line) followed by a single whitespace byte
//! and exactly width*height raw sample bytes. Output is always written with maxval 255.

use std::io::{Read, Write, ErrorKind};
use std::path::Path;
use tracing::debug;
use histeq_common::{MAX_VAL, fs::{filepath_contents, set_filepath_contents, path_to_lossy_string}};

use crate::errors::{Result, HistEqError};
use crate::equalize::{equalize, Equalization};

pub const PGM_MAGIC: &[u8; 2] = b"P5";

/// an in-memory 8 bit graymap with row-major pixel storage
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct PgmImage {
    pub width: usize,
    pub height: usize,
    pub maxval: u8, // as read from the input header, output is always MAX_VAL
    pub pixels: Vec<u8>,
}

impl PgmImage {
    pub fn new (width: usize, height: usize, pixels: Vec<u8>)->Result<Self> {
        check_dimensions( width, height, pixels.len())?;
        Ok( PgmImage { width, height, maxval: MAX_VAL, pixels } )
    }

    pub fn n_pixels (&self)->usize { self.pixels.len() }

    /// histogram equalize all pixels in place
    pub fn equalize (&mut self)->Result<Equalization> {
        equalize( &mut self.pixels)
    }

    pub fn to_bytes (&self)->Result<Vec<u8>> {
        pgm_to_bytes( self.width, self.height, &self.pixels)
    }
}

fn check_dimensions (width: usize, height: usize, len: usize)->Result<()> {
    match width.checked_mul( height) {
        Some(n) if n == len => Ok(()),
        Some(n) => Err( HistEqError::InvalidInput( format!("{width}x{height} image requires {n} pixels, got {len}"))),
        None => Err( HistEqError::InvalidInput( format!("{width}x{height} image size overflow")))
    }
}

/* #region reader ***************************************************************************************************/

/// read a P5 graymap from a byte stream
pub fn load_pgm<R: Read> (reader: &mut R)->Result<PgmImage> {
    let mut data = Vec::new();
    reader.read_to_end( &mut data)?;
    parse_pgm( &data)
}

/// read a P5 graymap from a file
pub fn load_pgm_path<P: AsRef<Path>> (path: P)->Result<PgmImage> {
    let path = path.as_ref();
    let data = filepath_contents( &path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            HistEqError::FileNotFound( path_to_lossy_string( path))
        } else {
            HistEqError::IOError(e)
        }
    })?;
    parse_pgm( &data)
}

/// parse a complete P5 graymap. Trailing bytes after the raster are ignored
pub fn parse_pgm (data: &[u8])->Result<PgmImage> {
    if data.len() < PGM_MAGIC.len() || &data[..2] != PGM_MAGIC {
        let magic = String::from_utf8_lossy( &data[..data.len().min(2)]);
        return Err( HistEqError::UnsupportedFormat( format!("magic '{magic}' (only P5 supported)")))
    }

    let mut scanner = HeaderScanner { data, pos: PGM_MAGIC.len() };
    if !scanner.at_separator() {
        return Err( HistEqError::InvalidHeader("no separator after magic".into()))
    }

    let width = scanner.next_field("width")?;
    let height = scanner.next_field("height")?;
    let maxval = scanner.next_field("maxval")?;

    let maxval = match maxval {
        1..=255 => maxval as u8,
        256..=65535 => return Err( HistEqError::UnsupportedFormat( format!("16 bit samples (maxval {maxval})"))),
        _ => return Err( HistEqError::InvalidHeader( format!("maxval {maxval} out of range")))
    };

    // exactly one whitespace byte separates the header from the raster
    if !scanner.skip_single_whitespace() {
        return Err( HistEqError::InvalidHeader("no whitespace after maxval".into()))
    }

    let n = width.checked_mul( height)
        .ok_or_else(|| HistEqError::InvalidHeader( format!("{width}x{height} image size overflow")))?;
    let raster = &data[scanner.pos..];
    if raster.len() < n {
        return Err( HistEqError::TruncatedData( format!("expected {n} bytes, got {}", raster.len())))
    }
    if raster.len() > n {
        debug!("ignoring {} trailing bytes", raster.len() - n);
    }

    Ok( PgmImage { width, height, maxval, pixels: raster[..n].to_vec() } )
}

/// tokenizer for the ASCII part of the P5 header
struct HeaderScanner<'a> {
    data: &'a [u8],
    pos: usize
}

impl <'a> HeaderScanner<'a> {
    fn at_separator (&self)->bool {
        self.data.get( self.pos).is_some_and(|&b| b == b'#' || b.is_ascii_whitespace() || b == 0x0b)
    }

    fn skip_whitespace_and_comments (&mut self) {
        while let Some(&b) = self.data.get( self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get( self.pos) {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' { break }
                }
            } else if b.is_ascii_whitespace() || b == 0x0b {
                self.pos += 1;
            } else {
                break
            }
        }
    }

    fn next_field (&mut self, name: &str)->Result<usize> {
        self.skip_whitespace_and_comments();

        let start = self.pos;
        let mut v: usize = 0;
        while let Some(&b) = self.data.get( self.pos) {
            if !b.is_ascii_digit() { break }
            v = v.checked_mul(10).and_then(|v| v.checked_add( (b - b'0') as usize))
                .ok_or_else(|| HistEqError::InvalidHeader( format!("{name} out of range")))?;
            self.pos += 1;
        }

        if self.pos == start {
            Err( HistEqError::InvalidHeader( format!("missing or non-numeric {name}")))
        } else if self.pos < self.data.len() && !self.at_separator() {
            Err( HistEqError::InvalidHeader( format!("invalid character after {name}")))
        } else {
            Ok(v)
        }
    }

    fn skip_single_whitespace (&mut self)->bool {
        match self.data.get( self.pos) {
            Some(b) if b.is_ascii_whitespace() || *b == 0x0b => { self.pos += 1; true }
            _ => false
        }
    }
}

/* #endregion reader */

/* #region writer ***************************************************************************************************/

/// write a P5 graymap with maxval 255 to a byte stream
pub fn write_pgm<W: Write> (writer: &mut W, width: usize, height: usize, pixels: &[u8])->Result<()> {
    check_dimensions( width, height, pixels.len())?;
    write!( writer, "P5\n{width} {height}\n{MAX_VAL}\n")?;
    writer.write_all( pixels)?;
    Ok(())
}

pub fn pgm_to_bytes (width: usize, height: usize, pixels: &[u8])->Result<Vec<u8>> {
    let mut buf = Vec::with_capacity( pixels.len() + 32);
    write_pgm( &mut buf, width, height, pixels)?;
    Ok(buf)
}

/// write a P5 graymap to a file. The data is completely serialized before the file is created, and
/// existing files are only replaced if `overwrite` is set
pub fn write_pgm_path<P: AsRef<Path>> (path: P, img: &PgmImage, overwrite: bool)->Result<()> {
    let path = path.as_ref();
    let data = img.to_bytes()?;
    set_filepath_contents( path, &data, overwrite).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            HistEqError::OutputExists( path_to_lossy_string( path))
        } else {
            HistEqError::IOError(e)
        }
    })
}

/* #endregion writer */
