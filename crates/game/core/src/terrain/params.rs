//! Tunable parameters for island generation.

/// Inconsistent generator parameters, found before any tile is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamsError {
    #[error("min_ranges {min} exceeds max_ranges {max}")]
    Ranges { min: u32, max: u32 },

    #[error("min_range_length {min} exceeds max_range_length {max}")]
    RangeLength { min: u32, max: u32 },

    #[error("min_forest_seeds {min} exceeds max_forest_seeds {max}")]
    ForestSeeds { min: u32, max: u32 },

    #[error("min_cluster_size {min} exceeds max_cluster_size {max}")]
    ClusterSize { min: u32, max: u32 },

    #[error("straight_chance and turn_chance must be in [0, 1] and sum to at most 1")]
    HeadingChances,
}

/// Balance parameters for the terrain generator.
///
/// Defaults reproduce the demo's island: a noisy ellipse taking roughly a
/// third of the viewport, a handful of short mountain ranges, and clustered
/// forests.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerationParams {
    /// Island semi-axis as a fraction of the grid size on that axis.
    pub ellipse_ratio: f64,
    /// Upper bound on either semi-axis, in tiles.
    pub max_radius: f64,
    /// Peak-to-peak amplitude of the coastline perturbation.
    pub jitter_amplitude: f64,
    /// Noise lattice frequency (lattice cells per tile).
    pub noise_scale: f64,

    /// Land cells per mountain range before clamping.
    pub land_per_range: u32,
    pub min_ranges: u32,
    pub max_ranges: u32,
    /// Ellipse distance below which a cell counts as interior.
    pub interior_threshold: f64,
    pub min_range_length: u32,
    pub max_range_length: u32,
    /// Probability that a range keeps its heading on each step.
    pub straight_chance: f64,
    /// Probability of a left/right quarter turn (split evenly).
    pub turn_chance: f64,

    /// Land cells per forest seed before clamping.
    pub land_per_forest_seed: u32,
    pub min_forest_seeds: u32,
    pub max_forest_seeds: u32,
    pub min_cluster_size: u32,
    pub max_cluster_size: u32,
    /// Independent chance for each remaining land cell to become a lone forest.
    pub sprinkle_chance: f64,

    /// Rows north of the southernmost walkable row searched for a spawn.
    pub spawn_band_rows: u32,
}

impl GenerationParams {
    /// Smallest accepted width and height.
    pub const MIN_DIMENSION: u32 = 12;

    /// Cap on random retries for any single pick.
    pub const MAX_PICK_ATTEMPTS: u32 = 200;

    /// Northern band thresholds tried in order when placing the goal.
    pub const GOAL_BANDS: [f64; 4] = [0.4, 0.6, 0.8, 1.0];

    /// Spawn used when no walkable cell can be found at all.
    pub const DEFAULT_SPAWN: (i32, i32) = (1, 1);

    /// Checks every min/max pair and the heading probabilities.
    ///
    /// # Errors
    ///
    /// The first inconsistency found, in field order.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let (min, max) = (self.min_ranges, self.max_ranges);
        if min > max {
            return Err(ParamsError::Ranges { min, max });
        }
        let (min, max) = (self.min_range_length, self.max_range_length);
        if min > max {
            return Err(ParamsError::RangeLength { min, max });
        }
        let (min, max) = (self.min_forest_seeds, self.max_forest_seeds);
        if min > max {
            return Err(ParamsError::ForestSeeds { min, max });
        }
        let (min, max) = (self.min_cluster_size, self.max_cluster_size);
        if min > max {
            return Err(ParamsError::ClusterSize { min, max });
        }

        let unit = 0.0..=1.0;
        if !unit.contains(&self.straight_chance)
            || !unit.contains(&self.turn_chance)
            || !unit.contains(&(self.straight_chance + self.turn_chance))
        {
            return Err(ParamsError::HeadingChances);
        }
        Ok(())
    }

    pub fn new() -> Self {
        Self {
            ellipse_ratio: 0.36,
            max_radius: 40.0,
            jitter_amplitude: 0.3,
            noise_scale: 0.2,

            land_per_range: 60,
            min_ranges: 3,
            max_ranges: 8,
            interior_threshold: 0.5,
            min_range_length: 3,
            max_range_length: 6,
            straight_chance: 0.65,
            turn_chance: 0.25,

            land_per_forest_seed: 35,
            min_forest_seeds: 2,
            max_forest_seeds: 12,
            min_cluster_size: 3,
            max_cluster_size: 12,
            sprinkle_chance: 0.03,

            spawn_band_rows: 6,
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new()
    }
}
