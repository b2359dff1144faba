use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Recursively copies the directory tree at `src` to `dst`, creating `dst`
/// and any nested directories. Used both to instantiate a project from the
/// template and to copy a version directory forward. The copy is not
/// transactional: a failure partway leaves the files already copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("Failed to relativize {}", entry.path().display()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copies_nested_tree() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("Project_Template");
        fs::create_dir_all(src.join("gerbers")).unwrap();
        fs::write(src.join("board.brd"), "board").unwrap();
        fs::write(src.join("gerbers").join("top.gbr"), "top").unwrap();

        let dst = dir.path().join("widget");
        copy_tree(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("board.brd")).unwrap(), "board");
        assert_eq!(
            fs::read_to_string(dst.join("gerbers").join("top.gbr")).unwrap(),
            "top"
        );
    }

    #[test]
    fn test_copies_empty_directories() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("empty")).unwrap();

        let dst = dir.path().join("dst");
        copy_tree(&src, &dst).unwrap();

        assert!(dst.join("empty").is_dir());
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = tempdir().unwrap();
        let result = copy_tree(&dir.path().join("absent"), &dir.path().join("dst"));
        assert!(result.is_err());
    }
}
