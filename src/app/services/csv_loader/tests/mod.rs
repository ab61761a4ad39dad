//! Test helpers for CSV loading
//!
//! Scratch files are written into a `TempDir` so each test controls the exact
//! name, extension and bytes on disk.

use std::path::PathBuf;
use tempfile::TempDir;


/// Small weather sample with a missing rainfall value
pub const SAMPLE_WEATHER_CSV: &str = "\
Location,MinTemp,MaxTemp,Rainfall
Albury,13.4,22.9,0.6
Albury,7.4,25.1,
Sydney,12.9,25.7,3.2
";

/// Write `bytes` to `name` inside `dir` and return the full path
pub fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
