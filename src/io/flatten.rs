use crate::io::{move_into, occupied, subdirectories};
use crate::progress::stage_bar;
use crate::types::{PrepError, PrepResult, StageReport};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Hoists nested tile files to the top of their sample folder
///
/// Downloads of SEN12MS-CR unpack into `ROIs*/<scene>/<file>.tif` with
/// varying depth. After flattening, every file of a top-level folder sits
/// directly inside it; the emptied subfolders are left for the [`Pruner`].
///
/// [`Pruner`]: crate::io::Pruner
#[derive(Debug, Clone, Default)]
pub struct Flattener {
    show_progress: bool,
}

impl Flattener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Flatten every top-level folder under `root`
    pub fn flatten<P: AsRef<Path>>(&self, root: P) -> PrepResult<StageReport> {
        let folders = subdirectories(root.as_ref())?;
        log::info!("Flattening {} sample folders", folders.len());

        let bar = stage_bar(folders.len(), self.show_progress, "Processing folders");
        let mut report = StageReport::default();
        for folder in &folders {
            report.files += self.flatten_folder(folder)?;
            report.folders += 1;
            bar.inc(1);
        }
        bar.finish_and_clear();

        log::info!("Hoisted {} files out of nested folders", report.files);
        Ok(report)
    }

    /// Flatten one sample folder, returning the number of files moved
    ///
    /// Every move is checked up front: if two nested files share a name, or
    /// one would land on an existing entry, nothing in this folder is moved.
    pub fn flatten_folder(&self, folder: &Path) -> PrepResult<usize> {
        let mut nested: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(folder).min_depth(2).sort_by_file_name() {
            let entry = entry?;
            // follows links, matching `files_in`
            if entry.path().is_file() {
                nested.push(entry.into_path());
            }
        }

        let mut seen = HashSet::new();
        for path in &nested {
            let Some(name) = path.file_name() else { continue };
            if !seen.insert(name.to_os_string()) || occupied(&folder.join(name)) {
                return Err(PrepError::Collision {
                    file_name: name.to_string_lossy().into_owned(),
                    destination: folder.to_path_buf(),
                });
            }
        }

        for path in &nested {
            move_into(path, folder)?;
        }

        if !nested.is_empty() {
            log::debug!("Flattened {} files into {}", nested.len(), folder.display());
        }
        Ok(nested.len())
    }
}
