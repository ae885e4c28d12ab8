//! Data-driven content definitions and loaders.
//!
//! This crate houses the island demo's static content and provides loaders
//! for its RON/TOML data files:
//! - Game configuration (TOML)
//! - Enemy catalog with selection weights (RON)
//! - Narration script (RON)
//!
//! Content is consumed by the runtime session and never mutated.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EnemyLoader, GameContent, LoadResult, NarrationLoader,
};
