use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use copy_template::copy_tree;
use description_codec::VersionDescription;
use find_highest_version::{find_highest_version, version_dirname};

/// Version step between the highest existing directory and the new one.
pub const VERSION_INCREMENT: f64 = 1.0;

/// Copies the highest-versioned directory of `<root>/<name>` forward to the
/// next version, then rewrites the copied description with the incremented
/// label. Returns the new version number. The caller has already checked
/// that the project exists.
pub fn up_project_version<W: Write>(
    root: &Path,
    name: &str,
    out: &mut W,
    verbose: bool,
) -> Result<f64> {
    let project_dir = root.join(name);
    let old_version = find_highest_version(&project_dir)?;
    let new_version = old_version + VERSION_INCREMENT;

    writeln!(
        out,
        "Incrementing project '{}' version {:.1} to {:.1}",
        name, old_version, new_version
    )
    .context("Failed to write output")?;

    let old_dir = project_dir.join(version_dirname(old_version));
    let new_dir = project_dir.join(version_dirname(new_version));
    if verbose {
        writeln!(out, "Copying {} to {}", old_dir.display(), new_dir.display())
            .context("Failed to write output")?;
    }
    copy_tree(&old_dir, &new_dir).with_context(|| {
        format!(
            "Failed to copy version directory {} forward",
            old_dir.display()
        )
    })?;

    // The copied description still carries the old label; rewrite it under
    // the new one.
    let mut description =
        VersionDescription::from_project_version(root, name, &version_dirname(new_version))?;
    description.set_version(&version_dirname(new_version));
    description.write_to_project_version(root)?;

    Ok(new_version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn seed_version(root: &Path, name: &str, version: &str) {
        let dir = root.join(name).join(version);
        fs::create_dir_all(&dir).unwrap();
        let description = VersionDescription::new(
            name,
            version,
            vec!["Todo1".to_string()],
            vec!["Done1".to_string()],
            Some("JamesF".to_string()),
            Some("08-Aug-14".to_string()),
        );
        description.write_to_project_version(root).unwrap();
    }

    #[test]
    fn test_copies_highest_version_forward_and_relabels() {
        let root = tempdir().unwrap();
        seed_version(root.path(), "widget", "1.0");
        seed_version(root.path(), "widget", "2.0");
        fs::write(
            root.path().join("widget").join("2.0").join("board.brd"),
            "board",
        )
        .unwrap();

        let mut out = Vec::new();
        let new_version = up_project_version(root.path(), "widget", &mut out, false).unwrap();
        assert_eq!(new_version, 3.0);

        let new_dir = root.path().join("widget").join("3.0");
        assert_eq!(fs::read_to_string(new_dir.join("board.brd")).unwrap(), "board");

        let description =
            VersionDescription::from_project_version(root.path(), "widget", "3.0").unwrap();
        assert_eq!(description.version, "3.0");
        assert_eq!(description.todo, vec!["Todo1"]);
        assert_eq!(description.done, vec!["Done1"]);
        assert_eq!(description.creator, "JamesF");

        // The source directory is untouched.
        let old =
            VersionDescription::from_project_version(root.path(), "widget", "2.0").unwrap();
        assert_eq!(old.version, "2.0");
    }

    #[test]
    fn test_non_numeric_directories_are_ignored_when_scanning() {
        let root = tempdir().unwrap();
        seed_version(root.path(), "widget", "1.0");
        fs::create_dir_all(root.path().join("widget").join("gerbers")).unwrap();

        let mut out = Vec::new();
        let new_version = up_project_version(root.path(), "widget", &mut out, false).unwrap();
        assert_eq!(new_version, 2.0);
    }

    #[test]
    fn test_progress_line_reports_old_and_new_version() {
        let root = tempdir().unwrap();
        seed_version(root.path(), "widget", "1.0");

        let mut out = Vec::new();
        up_project_version(root.path(), "widget", &mut out, false).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Incrementing project 'widget' version 1.0 to 2.0"));
    }

    #[test]
    fn test_missing_version_directory_is_an_error() {
        let root = tempdir().unwrap();
        // Project exists but holds no version directory to copy forward.
        fs::create_dir(root.path().join("widget")).unwrap();

        let mut out = Vec::new();
        let result = up_project_version(root.path(), "widget", &mut out, false);
        assert!(result.is_err());
    }
}
