use crate::core::route_for;
use crate::io::{files_in, move_into, subdirectories};
use crate::progress::stage_bar;
use crate::types::{Modality, PrepError, PrepResult, StageReport};
use std::fs;
use std::path::{Path, PathBuf};

/// Create the `s1`, `s2_cloudFree` and `s2_cloudy` folders under `root`
///
/// Existing folders are left as they are.
pub fn provision_destinations<P: AsRef<Path>>(root: P) -> PrepResult<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut created = Vec::with_capacity(Modality::ALL.len());
    for modality in Modality::ALL {
        let dir = root.join(modality.folder_name());
        fs::create_dir_all(&dir).map_err(PrepError::fs("create directory", &dir))?;
        created.push(dir);
    }
    log::info!("Destination folders ready under {}", root.display());
    Ok(created)
}

/// Moves tiles from region folders into their modality folder
#[derive(Debug, Clone, Default)]
pub struct Router {
    show_progress: bool,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Route every `R*` folder under `root`
    ///
    /// Stops at the first file whose name is already taken in its
    /// destination; that file stays where it was.
    pub fn route<P: AsRef<Path>>(&self, root: P) -> PrepResult<StageReport> {
        let root = root.as_ref();
        let sources: Vec<(PathBuf, Modality)> = subdirectories(root)?
            .into_iter()
            .filter_map(|dir| {
                let name = dir.file_name()?.to_string_lossy().into_owned();
                route_for(&name).map(|modality| (dir, modality))
            })
            .collect();
        log::info!("Routing {} region folders", sources.len());

        let bar = stage_bar(sources.len(), self.show_progress, "Moving files");
        let mut report = StageReport::default();
        for (source, modality) in &sources {
            let dest = root.join(modality.folder_name());
            bar.set_message(format!("{} -> {}", source.display(), modality));

            let files = files_in(source)?;
            for file in &files {
                move_into(file, &dest)?;
            }
            log::debug!("Moved {} files from {} to {}", files.len(), source.display(), modality);

            report.files += files.len();
            report.folders += 1;
            bar.inc(1);
        }
        bar.finish_and_clear();

        log::info!("Routed {} files", report.files);
        Ok(report)
    }
}
