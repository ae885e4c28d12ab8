//! Turn-based combat resolution.
//!
//! The rules are pure functions; [`CombatResolver`] layers the encounter
//! lifecycle on top of them.
//!
//! # Core Functions
//!
//! - `resolve_attack`: hit roll, critical roll, damage
//! - `resolve_round`: both sides act in speed order until someone drops
//! - `begin_combat`: fresh enemy instance plus the opening log
//!
//! # Draw order
//!
//! Each attack draws a hit roll, and a critical roll only if it lands. The
//! player acts first unless the enemy is strictly faster.

pub mod damage;
pub mod hit;
pub mod resolver;
pub mod result;
pub mod round;

pub use damage::{CRITICAL_MULTIPLIER, apply_damage, calculate_damage};
pub use hit::{check_critical, check_hit, critical_chance, hit_chance};
pub use resolver::{CombatError, CombatPhase, CombatResolver};
pub use result::{AttackOutcome, AttackResult, resolve_attack};
pub use round::{
    AttackRecord, CombatAction, CombatLog, CombatOutcome, MAX_LOG_LINES, PLAYER_NAME, RoundReport,
    Side, begin_combat, resolve_round, turn_order,
};
