//! Procedural island generation.
//!
//! The generator runs as a fixed pipeline over a single [`Grid`]:
//!
//! 1. **Island mask**: noisy ellipse of land, border forced to water
//! 2. **Mountain ranges**: short biased walks from interior land
//! 3. **Forest clusters**: 8-neighbour walks plus isolated trees
//! 4. **Goal**: northernmost band, closest to the horizontal centre
//! 5. **Spawn**: southern band, then spiral fallback
//! 6. **Reachability**: goal moved into the spawn's region if cut off
//!
//! Every step draws from the injected [`RngSource`], so a seed fully
//! determines the resulting [`World`]. All random picks are capped; once any
//! land exists the pipeline cannot fail.

mod features;
mod island;
mod noise;
mod params;
mod placement;

pub use features::{plant_forests, raise_mountains};
pub use island::{IslandShape, carve_island};
pub use noise::ValueNoise;
pub use params::{GenerationParams, ParamsError};
pub use placement::{ensure_goal_reachable, find_spawn, place_goal, reachable_from};

use crate::error::{ErrorSeverity, GameError};
use crate::rng::{PcgRng, RngSource};
use crate::world::{Dimensions, TileKind, World};

/// Configuration errors raised by the generator.
///
/// All are fatal: the caller must supply consistent parameters and
/// dimensions large enough to hold an island.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationError {
    #[error("grid {width}x{height} is smaller than the minimum {min}x{min}")]
    GridTooSmall { width: u32, height: u32, min: u32 },

    #[error("island mask produced no land in a {width}x{height} grid")]
    NoLand { width: u32, height: u32 },

    #[error("invalid generation parameters: {0}")]
    InvalidParams(#[from] ParamsError),
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GridTooSmall { .. } => "GENERATION_GRID_TOO_SMALL",
            Self::NoLand { .. } => "GENERATION_NO_LAND",
            Self::InvalidParams(_) => "GENERATION_INVALID_PARAMS",
        }
    }
}

/// Builds a complete island world.
///
/// # Errors
///
/// - [`GenerationError::GridTooSmall`] if either side is below
///   [`GenerationParams::MIN_DIMENSION`]
/// - [`GenerationError::NoLand`] if the island mask is empty
/// - [`GenerationError::InvalidParams`] if `params` fails
///   [`GenerationParams::validate`]
pub fn generate(
    width: u32,
    height: u32,
    params: &GenerationParams,
    rng: &mut impl RngSource,
) -> Result<World, GenerationError> {
    let min = GenerationParams::MIN_DIMENSION;
    if width < min || height < min {
        return Err(GenerationError::GridTooSmall { width, height, min });
    }
    params.validate()?;

    let dimensions = Dimensions::new(width, height);
    let shape = IslandShape::new(dimensions, params);
    let noise_seed = (u64::from(rng.next_u32()) << 32) | u64::from(rng.next_u32());
    let noise = ValueNoise::new(noise_seed, params.noise_scale);

    let mut grid = carve_island(dimensions, &shape, &noise, params);
    let land = grid.count(TileKind::Land) as u32;
    if land == 0 {
        return Err(GenerationError::NoLand { width, height });
    }

    // A quarter of the island stays open land, and never fewer than two
    // cells: one for the goal and one that remains plain land.
    let keep_land = (land / 4).max(2).min(land);
    raise_mountains(&mut grid, &shape, params, keep_land, rng);
    plant_forests(&mut grid, params, keep_land, rng);

    // Land existed after the mask, so one of land/forest/mountain remains.
    let goal = place_goal(&mut grid, None).ok_or(GenerationError::NoLand { width, height })?;
    let spawn = find_spawn(&grid, params.spawn_band_rows);
    let goal = ensure_goal_reachable(&mut grid, goal, spawn);

    Ok(World { grid, goal, spawn })
}

/// Convenience entry point with default parameters and a PCG source.
///
/// `None` uses the generator's fixed default seed; pass a seed for variety.
pub fn generate_world(width: u32, height: u32, seed: Option<u64>) -> Result<World, GenerationError> {
    let mut rng = seed.map(PcgRng::seeded).unwrap_or_default();
    generate(width, height, &GenerationParams::default(), &mut rng)
}
