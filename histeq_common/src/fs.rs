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

use std::fs::{self,File,OpenOptions};
use std::io::{self,Write,ErrorKind};
use std::path::{Path,PathBuf};

use crate::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn filename<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

pub fn path_to_lossy_string (path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().to_string()
}

pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// make sure the parent directory of a file path exists
pub fn ensure_parent_dir (path: impl AsRef<Path>)->io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir( parent)?;
        }
    }
    Ok(())
}

/// the complete file contents. Note that unlike `fs::read` this does not accept directories
pub fn filepath_contents <P: AsRef<Path>> (path: &P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err( io_error!( ErrorKind::InvalidInput, "not a file: {:?}", path))
    }
    fs::read( path)
}

/// open a file for writing. If `overwrite` is not set this fails with `AlreadyExists` for existing files
pub fn writable_file (path: impl AsRef<Path>, overwrite: bool) -> Result<File> {
    let path = path.as_ref();
    ensure_parent_dir( path)?;

    let mut opts = OpenOptions::new();
    opts.write(true);
    if overwrite {
        opts.create(true).truncate(true);
    } else {
        opts.create_new(true);
    }
    opts.open( path)
}

/// write the complete contents in one call, honoring the `overwrite` flag
pub fn set_filepath_contents (path: impl AsRef<Path>, contents: &[u8], overwrite: bool) -> Result<()> {
    let mut file = writable_file( path, overwrite)?;
    file.write_all( contents)?;
    file.flush()
}
