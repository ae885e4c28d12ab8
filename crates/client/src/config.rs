//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use game_core::GenerationParams;

/// How events are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EventFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Island width override; the loaded config wins when unset.
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub seed: Option<u64>,
    /// Directory with `config.toml`, `enemies.ron` and `narration.ron`.
    /// Built-in content is used when unset.
    pub data_dir: Option<PathBuf>,
    pub format: EventFormat,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ISLE_WIDTH` / `ISLE_HEIGHT` - Island size, raised to the generator minimum
    /// - `ISLE_SEED` - Session seed (default: derived from the clock)
    /// - `ISLE_DATA_DIR` - Content directory (default: built-in content)
    /// - `ISLE_EVENT_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let min = GenerationParams::MIN_DIMENSION;
        Self {
            width: read_env::<u32>("ISLE_WIDTH").map(|w| w.max(min)),
            height: read_env::<u32>("ISLE_HEIGHT").map(|h| h.max(min)),
            seed: read_env("ISLE_SEED"),
            data_dir: env::var_os("ISLE_DATA_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            format: read_env("ISLE_EVENT_FORMAT").unwrap_or_default(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
