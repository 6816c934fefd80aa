use crate::core::SplitClassifier;
use crate::io::{files_in, utf8_file_name};
use crate::progress::stage_bar;
use crate::types::{ManifestRow, PrepError, PrepResult, Split, DEFAULT_MANIFEST_NAME, S1_DIR};
use csv::{Terminator, WriterBuilder};
use std::path::{Path, PathBuf};

/// Row counts of a written manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
    pub path: PathBuf,
    pub train: usize,
    pub validation: usize,
    pub test: usize,
}

impl ManifestSummary {
    fn new(path: PathBuf) -> Self {
        Self { path, train: 0, validation: 0, test: 0 }
    }

    fn record(&mut self, split: Split) {
        match split {
            Split::Train => self.train += 1,
            Split::Validation => self.validation += 1,
            Split::Test => self.test += 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.train + self.validation + self.test
    }
}

/// Writes the tab-separated split manifest from the `s1` roster
pub struct ManifestWriter {
    manifest_name: String,
    classifier: SplitClassifier,
    show_progress: bool,
}

impl ManifestWriter {
    pub fn new(manifest_name: impl Into<String>) -> PrepResult<Self> {
        Ok(Self {
            manifest_name: manifest_name.into(),
            classifier: SplitClassifier::new()?,
            show_progress: false,
        })
    }

    /// Writer targeting `data.csv`
    pub fn standard() -> PrepResult<Self> {
        Self::new(DEFAULT_MANIFEST_NAME)
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Classify the tiles of `root/s1` and overwrite `root/<manifest_name>`
    ///
    /// Every tile has exactly one SAR image, so the `s1` folder is the
    /// roster. Rows follow file name order; there is no header.
    pub fn write<P: AsRef<Path>>(&self, root: P) -> PrepResult<ManifestSummary> {
        let root = root.as_ref();
        let tiles = files_in(&root.join(S1_DIR))?;
        // every tile needs a row: reject non UTF-8 names before touching the manifest
        let names = tiles
            .iter()
            .map(|tile| utf8_file_name(tile))
            .collect::<PrepResult<Vec<&str>>>()?;
        let path = root.join(&self.manifest_name);
        log::info!("Writing manifest for {} tiles to {}", tiles.len(), path.display());

        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_path(&path)?;

        let bar = stage_bar(tiles.len(), self.show_progress, "Writing manifest");
        let mut summary = ManifestSummary::new(path.clone());
        for name in names {
            let split = self.classifier.classify(name);
            writer.serialize(ManifestRow::new(split, name))?;
            summary.record(split);
            bar.inc(1);
        }
        bar.finish_and_clear();
        writer.flush().map_err(PrepError::fs("write", &path))?;

        log::info!(
            "Manifest written: {} train, {} val, {} test",
            summary.train, summary.validation, summary.test
        );
        Ok(summary)
    }
}
