use crate::core::strip_modality_markers;
use crate::io::{files_in, occupied, subdirectories, utf8_file_name};
use crate::progress::stage_bar;
use crate::types::{PrepError, PrepResult, StageReport};
use std::fs;
use std::path::Path;

/// Strips modality tags so the three images of a tile share one file name
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    show_progress: bool,
}

impl Renamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Rename the files directly inside every top-level folder under `root`
    pub fn rename<P: AsRef<Path>>(&self, root: P) -> PrepResult<StageReport> {
        let folders = subdirectories(root.as_ref())?;
        log::info!("Renaming tiles in {} folders", folders.len());

        let bar = stage_bar(folders.len(), self.show_progress, "Renaming files");
        let mut report = StageReport::default();
        for folder in &folders {
            report.files += Self::rename_folder(folder)?;
            report.folders += 1;
            bar.inc(1);
        }
        bar.finish_and_clear();

        log::info!("Renamed {} files", report.files);
        Ok(report)
    }

    fn rename_folder(folder: &Path) -> PrepResult<usize> {
        let mut renamed = 0;
        for path in files_in(folder)? {
            let name = utf8_file_name(&path)?;

            let new_name = strip_modality_markers(name);
            if new_name == name {
                continue;
            }

            let target = folder.join(&new_name);
            if occupied(&target) {
                return Err(PrepError::Collision {
                    file_name: new_name,
                    destination: folder.to_path_buf(),
                });
            }

            fs::rename(&path, &target).map_err(PrepError::fs("rename", &path))?;
            log::debug!("Renamed {} -> {}", name, new_name);
            renamed += 1;
        }
        Ok(renamed)
    }
}
