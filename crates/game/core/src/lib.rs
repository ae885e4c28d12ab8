//! Deterministic island rules shared by the runtime and tools.
//!
//! `game-core` defines the canonical rules (terrain generation, encounter
//! probabilities, combat resolution) as pure APIs over an injected
//! [`RngSource`]. It holds no session state and performs no I/O; the runtime
//! crate owns the mutable session and drives these functions.
pub mod combat;
pub mod config;
pub mod encounter;
pub mod error;
pub mod narration;
pub mod rng;
pub mod stats;
pub mod terrain;
pub mod world;

pub use combat::{
    AttackOutcome, AttackResult, CombatAction, CombatError, CombatLog, CombatOutcome, CombatPhase,
    CombatResolver, RoundReport, Side, begin_combat, resolve_round, turn_order,
};
pub use config::GameConfig;
pub use encounter::{EncounterTable, encounter_chance, tile_encounter_chance};
pub use error::{ErrorSeverity, GameError};
pub use narration::{NarrationScript, NarrationStep, advance_narration};
pub use rng::{PcgRng, RngSource, ScriptedRng, compute_seed};
pub use stats::{
    CatalogError, CombatStats, EnemyCatalog, EnemyInstance, EnemyTemplate, PlayerStats, Rewards,
};
pub use terrain::{GenerationError, GenerationParams, ParamsError, generate, generate_world};
pub use world::{Dimensions, Direction, Grid, Position, TileKind, World};
