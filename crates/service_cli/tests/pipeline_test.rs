//! End-to-end tests for the CLI command layer.
//!
//! These drive the command implementations against a scratch directory and
//! inspect what actually lands on disk.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use service_cli::commands;
use traffic_core::lcg::{self, LcgParams};
use traffic_core::variate::exponential;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("trafgen_cli_tests").join(name);
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn files_with_extension(dir: &PathBuf, extension: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .expect("output directory exists")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension() == Some(OsStr::new(extension)))
        .collect();
    paths.sort();
    paths
}

fn read_values(path: &PathBuf) -> Vec<f64> {
    fs::read_to_string(path)
        .expect("readable dump")
        .lines()
        .map(|line| line.parse().expect("numeric line"))
        .collect()
}

/// The variates pipeline persists the derived exponential sequence, not
/// the uniform input it was computed from.
#[test]
fn variates_command_persists_variate_sequence() {
    let dir = scratch_dir("variates_persist");
    let params = LcgParams::new(7, 0, 11, 1_024);

    commands::variates::run(256, &params, 3.0, 20, "table", dir.to_str().unwrap()).unwrap();

    let dumps = files_with_extension(&dir, "txt");
    let plots = files_with_extension(&dir, "svg");
    assert_eq!(dumps.len(), 1);
    assert_eq!(plots.len(), 1);

    let written = read_values(&dumps[0]);
    let uniforms = lcg::generate(256, &params).unwrap();
    let expected = exponential(&uniforms, 3.0).unwrap();

    // Display output of f64 round-trips exactly through parse.
    assert_eq!(written, expected);
    assert_ne!(written, uniforms);
}

/// The generate command dumps the uniform sequence byte-exactly.
#[test]
fn generate_command_dumps_uniform_sequence() {
    let dir = scratch_dir("generate_dump");
    let params = LcgParams::new(7, 0, 11, 1_024);

    commands::generate::run(5, &params, 4, "table", dir.to_str().unwrap()).unwrap();

    let dumps = files_with_extension(&dir, "txt");
    assert_eq!(dumps.len(), 1);
    assert_eq!(
        fs::read_to_string(&dumps[0]).unwrap(),
        "0.0751953125\n0.8271484375\n0.0986328125\n0.0849609375\n0.9345703125\n"
    );
}

/// A zero-count run still writes its (empty) dump but skips the histogram.
#[test]
fn generate_command_with_zero_count_skips_plot() {
    let dir = scratch_dir("generate_empty");
    let params = LcgParams::default();

    commands::generate::run(0, &params, 30, "table", dir.to_str().unwrap()).unwrap();

    let dumps = files_with_extension(&dir, "txt");
    assert_eq!(dumps.len(), 1);
    assert_eq!(fs::read_to_string(&dumps[0]).unwrap(), "");
    assert!(files_with_extension(&dir, "svg").is_empty());
}

/// Invalid generator input surfaces as a typed error and leaves nothing
/// behind.
#[test]
fn generate_command_rejects_zero_modulus() {
    let dir = scratch_dir("generate_invalid");
    let params = LcgParams::new(7, 0, 11, 0);

    let result = commands::generate::run(16, &params, 30, "table", dir.to_str().unwrap());
    assert!(result.is_err());
    assert!(!dir.exists() || files_with_extension(&dir, "txt").is_empty());
}

/// The reference sampler is reproducible for a fixed seed.
#[test]
fn reference_draw_is_reproducible() {
    let first = commands::reference::draw(1_000, 3.0, 5).unwrap();
    let second = commands::reference::draw(1_000, 3.0, 5).unwrap();
    assert_eq!(first, second);

    let mean = first.iter().sum::<f64>() / first.len() as f64;
    assert!((mean - 1.0 / 3.0).abs() < 0.05, "mean {} far from 1/3", mean);
}

/// Unknown formats are rejected up front.
#[test]
fn unknown_format_is_rejected() {
    let dir = scratch_dir("bad_format");
    let params = LcgParams::default();

    let result = commands::generate::run(8, &params, 4, "yaml", dir.to_str().unwrap());
    assert!(matches!(
        result,
        Err(service_cli::CliError::UnknownFormat(_))
    ));
}

/// The demo sweep publishes all six scenarios: four uniform runs, the
/// variate run and the library reference run.
#[test]
fn demo_sweep_publishes_all_scenarios() {
    let dir = scratch_dir("demo_sweep");

    commands::demo::run(30, "table", dir.to_str().unwrap()).unwrap();

    assert_eq!(files_with_extension(&dir, "txt").len(), 6);
    assert_eq!(files_with_extension(&dir, "svg").len(), 6);
}
