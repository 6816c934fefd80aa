use crate::io::{provision_destinations, Flattener, ManifestSummary, ManifestWriter, Pruner, Renamer, Router};
use crate::types::{Modality, PrepResult, StageReport, DEFAULT_MANIFEST_NAME};
use std::path::PathBuf;
use std::time::Instant;

/// Parameters for a preparation run
#[derive(Debug, Clone)]
pub struct PrepConfig {
    /// Dataset root holding the extracted `ROIs*` folders
    pub root: PathBuf,
    /// Manifest file name, written under `root`
    pub manifest_name: String,
    /// Draw per-stage progress bars on stderr
    pub show_progress: bool,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            show_progress: true,
        }
    }
}

impl PrepConfig {
    /// Config for `root` with defaults for everything else
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

/// Counters for a complete run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub flattened: StageReport,
    pub renamed: StageReport,
    pub routed: StageReport,
    pub pruned: StageReport,
    pub manifest: ManifestSummary,
}

/// Runs the six preparation stages in order
///
/// Each stage expects the previous one to have completed. A failure stops
/// the run and leaves the tree as it is; rerun after fixing the cause.
pub struct Pipeline {
    config: PrepConfig,
}

impl Pipeline {
    pub fn new(config: PrepConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> PrepResult<PipelineReport> {
        let root = &self.config.root;
        let show = self.config.show_progress;
        let start_time = Instant::now();
        log::info!("Preparing SEN12MS-CR dataset in {}", root.display());

        let flattened = Flattener::new().with_progress(show).flatten(root)?;
        let renamed = Renamer::new().with_progress(show).rename(root)?;
        provision_destinations(root)?;
        let routed = Router::new().with_progress(show).route(root)?;
        let pruned = Pruner::with_protected(Modality::ALL.map(|m| m.folder_name())).prune(root)?;
        let manifest = ManifestWriter::new(self.config.manifest_name.as_str())?
            .with_progress(show)
            .write(root)?;

        log::info!(
            "Dataset prepared in {:.2}s: {} tiles listed in {}",
            start_time.elapsed().as_secs_f64(),
            manifest.rows(),
            manifest.path.display()
        );

        Ok(PipelineReport {
            flattened,
            renamed,
            routed,
            pruned,
            manifest,
        })
    }
}
