use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

/// Environment variable rooting all Eagle project paths.
pub const PROJECTS_PATH_VAR: &str = "EAGLE_PROJECTS_PATH";

/// Resolves the directory that roots all project paths from the
/// `EAGLE_PROJECTS_PATH` environment variable. Absence is a configuration
/// error; there is no fallback.
pub fn get_projects_root() -> Result<PathBuf> {
    match env::var(PROJECTS_PATH_VAR) {
        Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => bail!("{} is not set", PROJECTS_PATH_VAR),
    }
}
