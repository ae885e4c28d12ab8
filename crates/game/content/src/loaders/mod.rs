//! Content loaders for reading game data from files.
//!
//! Each loader offers `load(path)` for files on disk and `parse(text)` for
//! embedded or in-memory data, so the built-in content and user overrides go
//! through the same validation.

pub mod config;
pub mod enemies;
pub mod factory;
pub mod narration;

pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::{ContentFactory, GameContent};
pub use narration::NarrationLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
