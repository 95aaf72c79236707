pub mod output;
pub mod writers;

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::{Error, MeasurementSet, Result, ResultExt};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io_at(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io_at(path, e))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Read a measurement payload from a file, or from stdin when the path is `-`.
pub fn read_measurements(path: &Path) -> Result<MeasurementSet> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        read_file(path)?
    };
    parse_measurements(&content).context(format!("Failed to read measurements from {}", path.display()))
}

/// Parse a flat JSON object of measurement key to value.
pub fn parse_measurements(content: &str) -> Result<MeasurementSet> {
    let payload: serde_json::Value = serde_json::from_str(content)?;
    MeasurementSet::from_json(&payload)
}
