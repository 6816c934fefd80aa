//! Name-based rules for renaming tiles and routing sample folders

use crate::types::Modality;

/// Modality tags removed from tile file names, applied in this order
pub const MODALITY_MARKERS: [&str; 3] = ["_s1", "_s2", "_cloudy"];

/// First character of every region-of-interest sample folder
pub const REGION_PREFIX: char = 'R';

/// Remove every modality tag from a tile file name
///
/// After stripping, the SAR, cloud-free and cloudy files of one tile share
/// the same name. Names without tags come back unchanged.
pub fn strip_modality_markers(file_name: &str) -> String {
    MODALITY_MARKERS
        .iter()
        .fold(file_name.to_string(), |name, marker| name.replace(marker, ""))
}

/// Whether a top-level folder holds region tiles and should be routed
pub fn is_region_folder(folder_name: &str) -> bool {
    folder_name.starts_with(REGION_PREFIX)
}

/// Modality of a sample folder, judged by its name
///
/// `_cloudy` wins over `_s1`; anything else is cloud-free optical.
pub fn folder_modality(folder_name: &str) -> Modality {
    if folder_name.contains("_cloudy") {
        Modality::Cloudy
    } else if folder_name.contains("_s1") {
        Modality::Sar
    } else {
        Modality::CloudFree
    }
}

/// Routing destination for a top-level folder, `None` for non-region folders
pub fn route_for(folder_name: &str) -> Option<Modality> {
    if is_region_folder(folder_name) {
        Some(folder_modality(folder_name))
    } else {
        None
    }
}
