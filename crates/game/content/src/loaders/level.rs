//! Level layout loader.

use std::path::Path;

use crate::level::LevelSpec;
use crate::loaders::{LoadResult, read_file};

/// Loader for level layout data from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level spec from a RON file.
    pub fn load(path: &Path) -> LoadResult<LevelSpec> {
        let content = read_file(path)?;
        let level: LevelSpec = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        if level.guide.lines.is_empty() {
            return Err(anyhow::anyhow!("level guide script has no lines"));
        }

        Ok(level)
    }
}
