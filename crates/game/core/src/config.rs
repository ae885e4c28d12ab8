use crate::encounter::EncounterTable;
use crate::stats::PlayerStats;
use crate::terrain::GenerationParams;

/// Game configuration: generation, encounter and starting-player tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    pub generation: GenerationParams,
    pub encounters: EncounterTable,
    /// Starting player record; restored on every restart.
    pub player: PlayerStats,
    /// Global scale applied to every encounter chance.
    pub encounter_multiplier: f64,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: u32 = 32;
    pub const DEFAULT_HEIGHT: u32 = 24;
    pub const DEFAULT_ENCOUNTER_MULTIPLIER: f64 = 1.0;
    /// Upper bound accepted for the encounter multiplier override.
    pub const MAX_ENCOUNTER_MULTIPLIER: f64 = 100.0;
    /// Upper bound accepted for the HP override.
    pub const MAX_HP_OVERRIDE: u32 = 999;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            generation: GenerationParams::default(),
            encounters: EncounterTable::default(),
            player: PlayerStats::default(),
            encounter_multiplier: Self::DEFAULT_ENCOUNTER_MULTIPLIER,
        }
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
