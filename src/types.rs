use serde::Serialize;
use std::path::PathBuf;

/// Destination folder for SAR (Sentinel-1) tiles
pub const S1_DIR: &str = "s1";

/// Destination folder for cloud-free optical (Sentinel-2) tiles
pub const S2_CLOUD_FREE_DIR: &str = "s2_cloudFree";

/// Destination folder for cloudy optical (Sentinel-2) tiles
pub const S2_CLOUDY_DIR: &str = "s2_cloudy";

/// Default manifest file name (tab separated despite the extension)
pub const DEFAULT_MANIFEST_NAME: &str = "data.csv";

/// Imaging modality of a tile, one per destination folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    /// Sentinel-1 SAR
    Sar,
    /// Sentinel-2 optical without clouds
    CloudFree,
    /// Sentinel-2 optical with clouds
    Cloudy,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Sar, Modality::CloudFree, Modality::Cloudy];

    /// Name of the destination folder holding this modality
    pub fn folder_name(&self) -> &'static str {
        match self {
            Modality::Sar => S1_DIR,
            Modality::CloudFree => S2_CLOUD_FREE_DIR,
            Modality::Cloudy => S2_CLOUDY_DIR,
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.folder_name())
    }
}

/// Dataset partition a tile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl Split {
    /// Numeric id written in the first manifest column
    pub fn id(&self) -> u8 {
        match self {
            Split::Train => 1,
            Split::Validation => 2,
            Split::Test => 3,
        }
    }
}

/// Acquisition season encoded in a region-of-interest identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

/// Scene a tile belongs to, parsed from a name like `ROIs1158_spring_9_p100.tif`
///
/// The patch index is not kept; any digit run is accepted there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    /// ROI set, e.g. 1158
    pub region: u32,
    pub season: Season,
    /// Scene number inside the ROI set
    pub subregion: u32,
}

/// One line of the split manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRow {
    pub split: u8,
    pub s1_dir: &'static str,
    pub s2_cloud_free_dir: &'static str,
    pub s2_cloudy_dir: &'static str,
    pub file_name: String,
}

impl ManifestRow {
    pub fn new(split: Split, file_name: impl Into<String>) -> Self {
        Self {
            split: split.id(),
            s1_dir: S1_DIR,
            s2_cloud_free_dir: S2_CLOUD_FREE_DIR,
            s2_cloudy_dir: S2_CLOUDY_DIR,
            file_name: file_name.into(),
        }
    }
}

/// Counters produced by one preparation stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    /// Folders visited (flatten, rename, route) or removed (prune)
    pub folders: usize,
    /// Files moved or renamed
    pub files: usize,
}

/// Error types for dataset preparation
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    #[error("Failed to {op} {}: {source}", path.display())]
    FileSystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File name is not valid UTF-8: {}", path.display())]
    NonUtf8Name { path: PathBuf },

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("File '{file_name}' already exists in the target folder: {}", destination.display())]
    Collision {
        file_name: String,
        destination: PathBuf,
    },

    #[error("Manifest write error: {0}")]
    Manifest(#[from] csv::Error),

    #[error("Invalid tile name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl PrepError {
    /// Builds a `map_err` adapter that tags an I/O failure with its operation and path
    pub fn fs<P: Into<PathBuf>>(op: &'static str, path: P) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| PrepError::FileSystem { op, path, source }
    }
}

/// Result type for preparation stages
pub type PrepResult<T> = Result<T, PrepError>;
