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

use histeq_common::define_error;

pub type Result<T> = std::result::Result<T, HistEqError>;

define_error!{ pub HistEqError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    ConfigError(#[from] histeq_common::config::ConfigError) : "config error: {0}",
    SerdeError(#[from] serde_json::Error) : "serialization/deserialization error: {0}",
    FileNotFound(String) : "file not found: {0}",
    UnsupportedFormat(String) : "unsupported format: {0}",
    InvalidHeader(String) : "invalid header: {0}",
    TruncatedData(String) : "truncated pixel data: {0}",
    InvalidInput(String) : "invalid input: {0}",
    DivisionDegenerate(String) : "degenerate intensity distribution: {0}",
    OutputExists(String) : "output file already exists: {0}"
}
