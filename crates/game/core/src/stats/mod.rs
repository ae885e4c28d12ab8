//! Combatant records: the player's persistent stats and the enemy catalog.
//!
//! # Ownership
//!
//! - [`PlayerStats`] lives in the session for the whole play-through and is
//!   only reset on restart.
//! - [`EnemyTemplate`]s are immutable catalog entries.
//! - [`EnemyInstance`]s are cloned from a template per encounter and dropped
//!   when the encounter ends.

mod enemy;
mod player;

pub use enemy::{CatalogError, EnemyCatalog, EnemyInstance, EnemyTemplate, Rewards};
pub use player::PlayerStats;

/// Fighting attributes shared by the player and enemy templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    /// Speed: decides turn order and critical chance.
    pub spe: u32,
    /// Luck: lowers the opponent's hit chance.
    pub luc: u32,
}

impl CombatStats {
    pub const fn new(max_hp: u32, atk: u32, def: u32, spe: u32, luc: u32) -> Self {
        Self {
            max_hp,
            atk,
            def,
            spe,
            luc,
        }
    }
}
