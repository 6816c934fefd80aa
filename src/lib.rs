//! SEN12MS-CR dataset preparation
//!
//! Reorganizes an extracted SEN12MS-CR download (paired Sentinel-1 SAR and
//! cloud-free/cloudy Sentinel-2 tiles) into flat `s1`, `s2_cloudFree` and
//! `s2_cloudy` folders and writes a tab-separated train/val/test manifest.

pub mod types;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod progress;

// Re-export main types and functions for easier access
pub use crate::types::{
    ManifestRow, Modality, PrepError, PrepResult, Season, Split, StageReport, TileId,
    S1_DIR, S2_CLOUDY_DIR, S2_CLOUD_FREE_DIR,
};

pub use crate::core::SplitClassifier;
pub use crate::io::{provision_destinations, Flattener, ManifestSummary, ManifestWriter, Pruner, Renamer, Router};
pub use crate::pipeline::{Pipeline, PipelineReport, PrepConfig};
