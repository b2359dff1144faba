use std::path::{Path, PathBuf};

/// File name of the description held by a project or version directory.
pub const DESCRIPTION_FILE: &str = "DESCRIPTION";

/// Path of a project's root description file: `<root>/<name>/DESCRIPTION`.
pub fn description_path_for_project(root: &Path, name: &str) -> PathBuf {
    root.join(name).join(DESCRIPTION_FILE)
}

/// Path of a per-version description file:
/// `<root>/<name>/<version>/DESCRIPTION`.
pub fn description_path_for_project_version(root: &Path, name: &str, version: &str) -> PathBuf {
    root.join(name).join(version).join(DESCRIPTION_FILE)
}
