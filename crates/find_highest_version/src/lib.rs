use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Lowest version a project can have; scanning never reports less than
/// this even when no version directory exists yet.
pub const VERSION_FLOOR: f64 = 1.0;

/// Parses a directory name as a version number. Non-numeric names yield
/// `None` and are ignored by the scan.
pub fn dirname_to_version(dirname: &str) -> Option<f64> {
    dirname.parse::<f64>().ok()
}

/// Formats a version number the way version directories are named ("2.0").
pub fn version_dirname(version: f64) -> String {
    format!("{:.1}", version)
}

/// Scans a project directory for version-named subdirectories and returns
/// the highest version found, floored at 1.0.
pub fn find_highest_version(project_dir: &Path) -> Result<f64> {
    let entries = fs::read_dir(project_dir)
        .with_context(|| format!("Failed to read project directory {}", project_dir.display()))?;

    let mut highest = VERSION_FLOOR;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", project_dir.display()))?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(version) = entry.file_name().to_str().and_then(dirname_to_version) {
            highest = highest.max(version);
        }
    }
    Ok(highest)
}
