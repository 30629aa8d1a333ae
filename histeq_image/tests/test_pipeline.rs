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

use std::fs;
use std::path::PathBuf;
use histeq_common::config::load_config_str;
use histeq_image::{
    equalize_pgm_bytes, equalize_pgm_file, load_pgm_path, pgm_to_bytes, parse_pgm,
    EqualizeConfig, Equalization, HistEqError, HistogramReport
};

// run with "cargo test --test test_pipeline -- --nocapture"

fn test_dir (name: &str)->PathBuf {
    let dir = std::env::temp_dir().join( format!("histeq_test_pipeline_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all( &dir);
    fs::create_dir_all( &dir).unwrap();
    dir
}

#[test]
fn test_equalize_file() {
    let dir = test_dir("equalize_file");
    let input = dir.join("input.pgm");
    let output = dir.join("output.pgm");
    fs::write( &input, pgm_to_bytes( 4, 2, &[0,0,1,1,2,2,3,3]).unwrap()).unwrap();

    let report = equalize_pgm_file( &EqualizeConfig::new( &input, &output)).unwrap();
    println!("{}", serde_json::to_string( &report).unwrap());
    assert_eq!( (report.width, report.height), (4, 2));
    assert_eq!( report.equalization, Equalization::Stretched{ cdf_min: 2, count: 8 });

    let img = load_pgm_path( &output).unwrap();
    assert_eq!( (img.width, img.height, img.maxval), (4, 2, 255));
    assert_eq!( img.pixels, vec![0,0,85,85,170,170,255,255]);

    fs::remove_dir_all( &dir).unwrap();
}

#[test]
fn test_unsupported_input_writes_nothing() {
    let dir = test_dir("unsupported");
    let input = dir.join("input.pgm");
    let output = dir.join("output.pgm");
    fs::write( &input, b"P2\n2 1\n255\n0 255\n").unwrap();

    let res = equalize_pgm_file( &EqualizeConfig::new( &input, &output));
    assert!( matches!( res, Err(HistEqError::UnsupportedFormat(_))));
    assert!( !output.exists());

    fs::remove_dir_all( &dir).unwrap();
}

#[test]
fn test_missing_input() {
    let dir = test_dir("missing");
    let res = equalize_pgm_file( &EqualizeConfig::new( dir.join("nothing.pgm"), dir.join("output.pgm")));
    match res {
        Err(HistEqError::FileNotFound(path)) => assert!( path.ends_with("nothing.pgm")),
        other => panic!("expected FileNotFound, got {other:?}")
    }
    assert!( !dir.join("output.pgm").exists());

    fs::remove_dir_all( &dir).unwrap();
}

#[test]
fn test_missing_input_with_existing_output() {
    let dir = test_dir("missing_existing");
    let output = dir.join("output.pgm");
    fs::write( &output, b"keep me").unwrap();

    let res = equalize_pgm_file( &EqualizeConfig::new( dir.join("nothing.pgm"), &output));
    match res {
        Err(HistEqError::FileNotFound(path)) => assert!( path.ends_with("nothing.pgm")),
        other => panic!("expected FileNotFound, got {other:?}")
    }
    assert_eq!( fs::read( &output).unwrap().as_slice(), b"keep me");

    fs::remove_dir_all( &dir).unwrap();
}

#[test]
fn test_existing_output() {
    let dir = test_dir("existing");
    let input = dir.join("input.pgm");
    let output = dir.join("output.pgm");
    fs::write( &input, pgm_to_bytes( 2, 1, &[10,20]).unwrap()).unwrap();
    fs::write( &output, b"keep me").unwrap();

    let mut config = EqualizeConfig::new( &input, &output);
    assert!( matches!( equalize_pgm_file( &config), Err(HistEqError::OutputExists(_))));
    assert_eq!( fs::read( &output).unwrap().as_slice(), b"keep me");

    config.overwrite = true;
    equalize_pgm_file( &config).unwrap();
    assert_eq!( load_pgm_path( &output).unwrap().pixels, vec![0,255]);

    fs::remove_dir_all( &dir).unwrap();
}

#[test]
fn test_degenerate_policy() {
    let dir = test_dir("degenerate");
    let input = dir.join("input.pgm");
    let output = dir.join("output.pgm");
    fs::write( &input, pgm_to_bytes( 3, 3, &[77;9]).unwrap()).unwrap();

    let mut config = EqualizeConfig::new( &input, &output);
    config.fail_on_degenerate = true;
    assert!( matches!( equalize_pgm_file( &config), Err(HistEqError::DivisionDegenerate(_))));
    assert!( !output.exists());

    config.fail_on_degenerate = false;
    let report = equalize_pgm_file( &config).unwrap();
    assert_eq!( report.equalization, Equalization::Degenerate{ intensity: 77, count: 9 });
    assert_eq!( load_pgm_path( &output).unwrap().pixels, vec![77;9]);

    fs::remove_dir_all( &dir).unwrap();
}

#[test]
fn test_empty_image() {
    let data = pgm_to_bytes( 0, 0, &[]).unwrap();
    assert!( matches!( equalize_pgm_bytes( &data), Err(HistEqError::InvalidInput(_))));
}

#[test]
fn test_equalize_bytes() {
    let data = b"P5\n# comment\n2 2\n255\n\x10\x20\x20\x30";
    let (out, equalization) = equalize_pgm_bytes( data).unwrap();
    assert_eq!( equalization, Equalization::Stretched{ cdf_min: 1, count: 4 });

    let img = parse_pgm( &out).unwrap();
    assert_eq!( img.pixels, vec![0,170,170,255]);
}

#[test]
fn test_config_ron() {
    let config: EqualizeConfig = load_config_str( r#"EqualizeConfig( input: "a.pgm", overwrite: true )"#).unwrap();
    assert_eq!( config.input, PathBuf::from("a.pgm"));
    assert_eq!( config.output, PathBuf::from("output.pgm"));
    assert!( config.overwrite);
    assert!( !config.fail_on_degenerate);

    let config: EqualizeConfig = load_config_str( "()").unwrap();
    assert_eq!( config, EqualizeConfig::default());
}

#[test]
fn test_config_file() {
    let dir = test_dir("config_file");
    let path = dir.join("equalize.ron");
    fs::write( &path, r#"( input: "in.pgm", output: "out.pgm", fail_on_degenerate: true )"#).unwrap();

    let config = EqualizeConfig::load( &path).unwrap();
    assert_eq!( config.output, PathBuf::from("out.pgm"));
    assert!( config.fail_on_degenerate);

    assert!( matches!( EqualizeConfig::load( dir.join("none.ron")), Err(HistEqError::ConfigError(_))));

    fs::remove_dir_all( &dir).unwrap();
}

#[test]
fn test_histogram_report() {
    let img = parse_pgm( &pgm_to_bytes( 4, 1, &[10,10,20,30]).unwrap()).unwrap();
    let report = HistogramReport::from_image( &img);
    assert_eq!( report.count, 4);
    assert_eq!( (report.min, report.max, report.distinct), (Some(10), Some(30), 3));
    assert_eq!( report.cdf_min, Some(2));

    let json: serde_json::Value = serde_json::from_str( &report.to_json( false).unwrap()).unwrap();
    let hist = json["histogram"].as_array().unwrap();
    assert_eq!( hist.len(), 256);
    assert_eq!( hist[10], 2);
    assert_eq!( json["mean"], 17.5);
}
