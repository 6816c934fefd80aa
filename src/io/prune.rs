use crate::types::{PrepError, PrepResult, StageReport};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Removes empty folders bottom-up
#[derive(Debug, Clone, Default)]
pub struct Pruner {
    protected: Vec<String>,
}

impl Pruner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pruner that keeps the named top-level folders even when empty
    pub fn with_protected<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            protected: names.into_iter().map(Into::into).collect(),
        }
    }

    fn is_protected(&self, name: &OsStr) -> bool {
        self.protected.iter().any(|p| OsStr::new(p) == name)
    }

    /// Delete every empty folder below `root`; `root` itself is kept
    ///
    /// Children are visited before their parent, so a folder holding only
    /// empty folders is removed in the same pass.
    pub fn prune<P: AsRef<Path>>(&self, root: P) -> PrepResult<StageReport> {
        let root = root.as_ref();
        let mut report = StageReport::default();

        for entry in WalkDir::new(root).min_depth(1).contents_first(true).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            if entry.depth() == 1 && self.is_protected(entry.file_name()) {
                continue;
            }

            let path = entry.path();
            let empty = fs::read_dir(path)
                .map_err(PrepError::fs("read directory", path))?
                .next()
                .is_none();
            if empty {
                fs::remove_dir(path).map_err(PrepError::fs("remove directory", path))?;
                log::debug!("Removed empty folder {}", path.display());
                report.folders += 1;
            }
        }

        log::info!("Removed {} empty folders", report.folders);
        Ok(report)
    }
}
