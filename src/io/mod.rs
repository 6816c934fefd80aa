//! Filesystem stages that reorganize a SEN12MS-CR download in place

pub mod flatten;
pub mod rename;
pub mod layout;
pub mod prune;
pub mod manifest;

pub use flatten::Flattener;
pub use rename::Renamer;
pub use layout::{provision_destinations, Router};
pub use prune::Pruner;
pub use manifest::{ManifestSummary, ManifestWriter};

use crate::types::{PrepError, PrepResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Entries directly inside `dir`, sorted by file name
fn sorted_entries(dir: &Path) -> PrepResult<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .map_err(PrepError::fs("read directory", dir))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(PrepError::fs("read directory", dir))?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

/// Subdirectories directly inside `dir`, sorted by name
pub fn subdirectories(dir: &Path) -> PrepResult<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in sorted_entries(dir)? {
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

/// Regular files directly inside `dir`, sorted by name
pub fn files_in(dir: &Path) -> PrepResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in sorted_entries(dir)? {
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// File name of `path` as UTF-8; tile names are matched as text
pub(crate) fn utf8_file_name(path: &Path) -> PrepResult<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| PrepError::NonUtf8Name { path: path.to_path_buf() })
}

/// Whether anything (file, folder or link) already occupies `path`
pub(crate) fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Move `source` into `dest_dir` under its own name, refusing to overwrite
pub fn move_into(source: &Path, dest_dir: &Path) -> PrepResult<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| PrepError::FileSystem {
        op: "move",
        path: source.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let target = dest_dir.join(file_name);

    if occupied(&target) {
        return Err(PrepError::Collision {
            file_name: file_name.to_string_lossy().into_owned(),
            destination: dest_dir.to_path_buf(),
        });
    }

    fs::rename(source, &target).map_err(PrepError::fs("move", source))?;
    log::debug!("Moved {} -> {}", source.display(), target.display());
    Ok(target)
}
