//! Input file collection
//!
//! Expands the paths given on the command line into a flat list of regular
//! files. Directory traversal belongs to the front-end, not the processor.

use std::path::PathBuf;
use log::debug;
use walkdir::WalkDir;

use crate::errors::{PressError, PressResult};

/// Collect regular files from files and directories
///
/// Each argument may hold several comma-separated paths. Directories are
/// walked recursively without following symbolic links; entries are sorted
/// by name so runs are reproducible.
pub fn collect_files(inputs: &[String]) -> PressResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        for part in input.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let walker = WalkDir::new(part)
                .follow_links(false)
                .sort_by_file_name();

            for entry in walker {
                let entry = entry.map_err(|e| {
                    PressError::GenericError(format!("Cannot access {}: {}", part, e))
                })?;
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        }
    }

    debug!("Collected {} files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collects_nested_files_in_order() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("a/b")).unwrap();
        fs::write(root.path().join("a/b/deep.txt"), b"1").unwrap();
        fs::write(root.path().join("a/top.txt"), b"2").unwrap();
        fs::write(root.path().join("single.bin"), b"3").unwrap();

        let dir_arg = root.path().join("a").display().to_string();
        let file_arg = root.path().join("single.bin").display().to_string();
        let files = collect_files(&[format!("{}, {}", dir_arg, file_arg)]).unwrap();

        assert_eq!(files, vec![
            root.path().join("a/b/deep.txt"),
            root.path().join("a/top.txt"),
            root.path().join("single.bin"),
        ]);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_symlink_loop_is_not_followed() {
        let root = TempDir::new().unwrap();
        let data = root.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(data.join("a.txt"), b"a").unwrap();
        std::os::unix::fs::symlink(&data, data.join("loop")).unwrap();

        let files = collect_files(&[data.display().to_string()]).unwrap();
        assert_eq!(files, vec![data.join("a.txt")]);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope").display().to_string();
        assert!(collect_files(&[missing]).is_err());
    }
}
