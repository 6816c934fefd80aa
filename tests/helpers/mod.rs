//! Helpers for building small SEN12MS-CR style trees in temp directories

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Write `contents` to `path`, creating parent folders
pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent folder");
    }
    fs::write(path, contents).expect("Failed to write test file");
}

pub fn read_file(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read test file")
}

/// Sorted names of the entries directly inside `dir`
pub fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to list folder")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Every path under `root` with file contents (`None` for folders)
pub fn snapshot(root: &Path) -> Vec<(String, Option<Vec<u8>>)> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let rel = entry.path().strip_prefix(root).unwrap().to_string_lossy().into_owned();
            let contents = if entry.file_type().is_file() {
                Some(fs::read(entry.path()).unwrap())
            } else {
                None
            };
            (rel, contents)
        })
        .collect()
}
