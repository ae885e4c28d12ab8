//! Single-attack resolution.

use crate::rng::RngSource;
use crate::stats::CombatStats;

use super::damage::calculate_damage;
use super::hit::{check_critical, check_hit};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit the target.
    Hit,
    /// Critical hit: attack multiplied before defense.
    Critical,
}

/// Result of a single attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Damage dealt; zero on a miss.
    pub damage: u32,
}

impl AttackResult {
    pub const MISS: Self = Self {
        outcome: AttackOutcome::Miss,
        damage: 0,
    };

    pub fn landed(&self) -> bool {
        self.outcome != AttackOutcome::Miss
    }

    pub fn is_critical(&self) -> bool {
        self.outcome == AttackOutcome::Critical
    }
}

/// Resolve one attack: hit roll, then (only if it lands) a critical roll.
///
/// A miss consumes one percentage draw, a landed attack consumes two.
///
/// # Arguments
///
/// * `attacker` - Supplies `atk` for damage and `spe` for the critical roll
/// * `defender` - Supplies `luc` for the hit roll and `def` for damage
/// * `rng` - Source of the percentage draws
///
/// # Returns
///
/// [`AttackResult::MISS`] or a landed result carrying
/// [`calculate_damage`](super::damage::calculate_damage).
pub fn resolve_attack(
    attacker: &CombatStats,
    defender: &CombatStats,
    rng: &mut impl RngSource,
) -> AttackResult {
    if !check_hit(defender.luc, rng.roll_percent()) {
        return AttackResult::MISS;
    }

    let critical = check_critical(attacker.spe, rng.roll_percent());
    AttackResult {
        outcome: if critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        damage: calculate_damage(attacker.atk, defender.def, critical),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    const PLAYER: CombatStats = CombatStats::new(25, 5, 2, 8, 10);
    const ENEMY: CombatStats = CombatStats::new(12, 3, 3, 5, 3);

    #[test]
    fn miss_draws_once() {
        let mut rng = ScriptedRng::from_percents([95.0, 0.0]);
        let result = resolve_attack(&ENEMY, &PLAYER, &mut rng);
        assert_eq!(result, AttackResult::MISS);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn critical_hit_deals_multiplied_damage() {
        let mut rng = ScriptedRng::from_percents([10.0, 1.0]);
        let result = resolve_attack(&PLAYER, &ENEMY, &mut rng);
        assert_eq!(result.outcome, AttackOutcome::Critical);
        assert_eq!(result.damage, 12);
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn normal_hit() {
        let mut rng = ScriptedRng::from_percents([10.0, 50.0]);
        let result = resolve_attack(&PLAYER, &ENEMY, &mut rng);
        assert_eq!(result.outcome, AttackOutcome::Hit);
        assert_eq!(result.damage, 2);
    }
}
