//! Content factory assembling config, enemies and narration.

use std::path::{Path, PathBuf};

use game_core::{EnemyCatalog, GameConfig, NarrationScript};

use crate::loaders::{ConfigLoader, EnemyLoader, LoadResult, NarrationLoader};

const CONFIG_FILE: &str = "config.toml";
const ENEMIES_FILE: &str = "enemies.ron";
const NARRATION_FILE: &str = "narration.ron";

const BUILTIN_CONFIG: &str = include_str!("../../data/config.toml");
const BUILTIN_ENEMIES: &str = include_str!("../../data/enemies.ron");
const BUILTIN_NARRATION: &str = include_str!("../../data/narration.ron");

/// Everything a session needs besides its seed.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub config: GameConfig,
    pub enemies: EnemyCatalog,
    pub narration: NarrationScript,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.ron
/// └── narration.ron
/// ```
///
/// Files absent from the directory fall back to the built-in copies, so a
/// directory holding only `enemies.ron` overrides just the catalog.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Built-in demo content compiled into the crate.
    pub fn builtin() -> LoadResult<GameContent> {
        Ok(GameContent {
            config: ConfigLoader::parse(BUILTIN_CONFIG)?,
            enemies: EnemyLoader::parse(BUILTIN_ENEMIES)?,
            narration: NarrationLoader::parse(BUILTIN_NARRATION)?,
        })
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing(CONFIG_FILE) {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::parse(BUILTIN_CONFIG),
        }
    }

    /// Load the enemy catalog from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<EnemyCatalog> {
        match self.existing(ENEMIES_FILE) {
            Some(path) => EnemyLoader::load(&path),
            None => EnemyLoader::parse(BUILTIN_ENEMIES),
        }
    }

    /// Load narration lines from `narration.ron`.
    pub fn load_narration(&self) -> LoadResult<NarrationScript> {
        match self.existing(NARRATION_FILE) {
            Some(path) => NarrationLoader::load(&path),
            None => NarrationLoader::parse(BUILTIN_NARRATION),
        }
    }

    /// Load every content file.
    pub fn load(&self) -> LoadResult<GameContent> {
        Ok(GameContent {
            config: self.load_config()?,
            enemies: self.load_enemies()?,
            narration: self.load_narration()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        let path = self.data_dir.join(file);
        path.is_file().then_some(path)
    }
}
