//! Filesystem-free classification rules for SEN12MS-CR tiles

pub mod naming;
pub mod split;

// Re-export main types
pub use naming::{folder_modality, is_region_folder, route_for, strip_modality_markers, MODALITY_MARKERS};
pub use split::{SplitClassifier, TEST_SCENES, VALIDATION_SCENES};
