//! Game configuration loader.

use std::path::Path;

use game_core::{GameConfig, GenerationParams};

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and validate config TOML.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let mut config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let min = GenerationParams::MIN_DIMENSION;
        if config.width < min || config.height < min {
            anyhow::bail!(
                "grid {}x{} is smaller than the minimum {min}x{min}",
                config.width,
                config.height
            );
        }
        if !config.encounter_multiplier.is_finite() || config.encounter_multiplier < 0.0 {
            anyhow::bail!(
                "encounter_multiplier must be a non-negative number, got {}",
                config.encounter_multiplier
            );
        }
        if let Err(e) = config.generation.validate() {
            anyhow::bail!("invalid [generation] section: {}", e);
        }
        if config.player.max_hp == 0 {
            anyhow::bail!("player max_hp must be positive");
        }
        // The starting record is always at full health with no progress.
        config.player.reset();

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("width = 40\n[encounters]\nforest = 0.5\n").unwrap();
        assert_eq!(config.width, 40);
        assert_eq!(config.height, GameConfig::DEFAULT_HEIGHT);
        assert_eq!(config.encounters.forest, 0.5);
        assert_eq!(config.encounters.land, 0.05);
        assert_eq!(config.player.max_hp, 25);
    }

    #[test]
    fn player_starts_at_full_health() {
        let config = ConfigLoader::parse("[player]\nmax_hp = 40\nhp = 3\nxp = 9\n").unwrap();
        assert_eq!(config.player.hp, 40);
        assert_eq!(config.player.xp, 0);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(ConfigLoader::parse("width = 4").is_err());
        assert!(ConfigLoader::parse("encounter_multiplier = -1.0").is_err());
        assert!(ConfigLoader::parse("[player]\nmax_hp = 0").is_err());
        assert!(ConfigLoader::parse("width = \"wide\"").is_err());

        for generation in [
            "min_ranges = 6\nmax_ranges = 3",
            "min_range_length = 7\nmax_range_length = 2",
            "min_forest_seeds = 13\nmax_forest_seeds = 4",
            "min_cluster_size = 10\nmax_cluster_size = 1",
            "straight_chance = 0.9\nturn_chance = 0.2",
            "turn_chance = -0.1",
        ] {
            let content = format!("[generation]\n{generation}\n");
            let err = ConfigLoader::parse(&content).unwrap_err();
            assert!(err.to_string().contains("[generation]"), "{generation}: {err}");
        }
    }

    #[test]
    fn accepted_generation_section_builds_an_island() {
        let config = ConfigLoader::parse("[generation]\nmin_ranges = 2\nmax_ranges = 2\n").unwrap();
        let mut rng = game_core::PcgRng::seeded(3);
        assert!(game_core::generate(config.width, config.height, &config.generation, &mut rng).is_ok());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "height = 30").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.height, 30);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
