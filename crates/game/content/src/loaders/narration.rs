//! Narration script loader.

use std::path::Path;

use game_core::NarrationScript;

use crate::loaders::{LoadResult, read_file};

/// Loader for narration lines from RON files.
///
/// RON format: `Vec<String>`, shown in order.
pub struct NarrationLoader;

impl NarrationLoader {
    pub fn load(path: &Path) -> LoadResult<NarrationScript> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid narration {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<NarrationScript> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse narration RON: {}", e))
    }
}
