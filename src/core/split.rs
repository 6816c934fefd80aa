use crate::types::{PrepResult, Season, Split, TileId};
use regex::Regex;

/// Scenes held out for testing: (ROI set, season, scene numbers)
pub const TEST_SCENES: &[(u32, Season, &[u32])] = &[
    (1158, Season::Spring, &[9, 141]),
    (1868, Season::Summer, &[43, 89, 146]),
    (1970, Season::Fall, &[57, 27, 135]),
    (2017, Season::Winter, &[130, 146, 49]),
];

/// Scenes held out for validation
pub const VALIDATION_SCENES: &[(u32, Season, &[u32])] = &[(1158, Season::Spring, &[77])];

// Anchored at the start only: trailing text after `.tif` still matches.
const TILE_NAME_PATTERN: &str = r"^ROIs(\d+)_([a-z]+)_(0|[1-9]\d*)_p\d+\.tif";

fn scene_listed(table: &[(u32, Season, &[u32])], tile: &TileId) -> bool {
    table.iter().any(|(region, season, scenes)| {
        *region == tile.region && *season == tile.season && scenes.contains(&tile.subregion)
    })
}

/// Assigns tiles to train/validation/test by their region-of-interest scene
pub struct SplitClassifier {
    pattern: Regex,
}

impl SplitClassifier {
    pub fn new() -> PrepResult<Self> {
        Ok(Self {
            pattern: Regex::new(TILE_NAME_PATTERN)?,
        })
    }

    /// Parse a tile file name, `None` if it does not follow the ROI naming scheme
    pub fn parse(&self, file_name: &str) -> Option<TileId> {
        let caps = self.pattern.captures(file_name)?;
        Some(TileId {
            region: caps[1].parse().ok()?,
            season: Season::from_name(&caps[2])?,
            subregion: caps[3].parse().ok()?,
        })
    }

    /// Split for a tile file name
    ///
    /// The test table is consulted before the validation table; names that
    /// do not parse or are listed in neither table are training tiles.
    pub fn classify(&self, file_name: &str) -> Split {
        match self.parse(file_name) {
            Some(tile) if scene_listed(TEST_SCENES, &tile) => Split::Test,
            Some(tile) if scene_listed(VALIDATION_SCENES, &tile) => Split::Validation,
            _ => Split::Train,
        }
    }
}
