//! Enemy catalog loader.

use std::path::Path;

use game_core::{EnemyCatalog, EnemyTemplate};

use crate::loaders::{LoadResult, read_file};

/// Loader for the weighted enemy catalog from RON files.
///
/// RON format: `Vec<EnemyTemplate>`.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<EnemyCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid enemy catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<EnemyCatalog> {
        let templates: Vec<EnemyTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        if let Some(t) = templates.iter().find(|t| t.stats.max_hp == 0) {
            anyhow::bail!("enemy '{}' has zero max_hp", t.id);
        }

        Ok(EnemyCatalog::new(templates)?)
    }
}
