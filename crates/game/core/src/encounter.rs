//! Per-tile random encounter probability.
//!
//! The session rolls once per accepted move, on the destination tile, with a
//! single unit draw compared against [`EncounterTable::tile_chance`]. Arriving
//! on the goal never rolls.

use crate::rng::RngSource;
use crate::world::{Position, TileKind, World};

/// Base encounter probability per walkable tile kind.
///
/// Forest is denser than open land; every other kind never triggers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncounterTable {
    pub land: f64,
    pub forest: f64,
}

impl EncounterTable {
    pub const DEFAULT_LAND: f64 = 0.05;
    pub const DEFAULT_FOREST: f64 = 0.15;

    /// Probability for `kind` under a global multiplier.
    ///
    /// # Formula
    ///
    /// ```text
    /// chance = clamp(base(kind) * multiplier, 0, 1)   (NaN -> 0)
    /// base(Land) = land, base(Forest) = forest, otherwise 0
    /// ```
    pub fn chance(&self, kind: TileKind, multiplier: f64) -> f64 {
        let base = match kind {
            TileKind::Land => self.land,
            TileKind::Forest => self.forest,
            TileKind::Water | TileKind::Mountain | TileKind::Goal => 0.0,
        };
        let scaled = base * multiplier;
        if scaled.is_nan() {
            return 0.0;
        }
        scaled.clamp(0.0, 1.0)
    }

    /// Chance for the tile at `position`; zero when out of bounds.
    pub fn tile_chance(&self, world: &World, position: Position, multiplier: f64) -> f64 {
        world
            .tile(position)
            .map_or(0.0, |kind| self.chance(kind, multiplier))
    }

    /// Draws once and reports whether an encounter starts on `position`.
    ///
    /// The goal tile short-circuits without consuming a draw.
    pub fn roll(
        &self,
        world: &World,
        position: Position,
        multiplier: f64,
        rng: &mut impl RngSource,
    ) -> bool {
        if world.is_goal(position) {
            return false;
        }
        let chance = self.tile_chance(world, position, multiplier);
        rng.next_unit() < chance
    }
}

impl Default for EncounterTable {
    fn default() -> Self {
        Self {
            land: Self::DEFAULT_LAND,
            forest: Self::DEFAULT_FOREST,
        }
    }
}

/// Encounter probability of a tile kind.
///
/// # Arguments
///
/// * `kind` - Destination tile kind
/// * `table` - Base probabilities per kind
/// * `multiplier` - Global scale, `1.0` by default
///
/// # Returns
///
/// Probability in `[0, 1]`, see [`EncounterTable::chance`].
pub fn encounter_chance(kind: TileKind, table: &EncounterTable, multiplier: f64) -> f64 {
    table.chance(kind, multiplier)
}

/// Encounter chance of a tile under the default table.
///
/// # Arguments
///
/// * `world` - Generated island
/// * `position` - Tile to query; out-of-bounds positions yield `0.0`
/// * `multiplier` - Global scale, `1.0` by default
pub fn tile_encounter_chance(world: &World, position: Position, multiplier: f64) -> f64 {
    EncounterTable::default().tile_chance(world, position, multiplier)
}
