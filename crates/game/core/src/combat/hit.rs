//! Hit and critical checks.
//!
//! Both checks compare a percentage draw in `[0, 100)` against a threshold
//! with a strict `<`, so a draw equal to the threshold fails.

/// Chance in percent that an attack lands.
///
/// # Formula
///
/// ```text
/// hit_chance = max(0, 100 - defender.luc)
/// ```
pub fn hit_chance(defender_luc: u32) -> f64 {
    f64::from(100u32.saturating_sub(defender_luc))
}

/// Check if an attack lands.
///
/// # Arguments
///
/// * `defender_luc` - Defender's luck; 100 or more can never be hit
/// * `roll` - Percentage draw in `[0, 100)`
///
/// # Returns
///
/// `true` if `roll < hit_chance(defender_luc)`.
pub fn check_hit(defender_luc: u32, roll: f64) -> bool {
    roll < hit_chance(defender_luc)
}

/// Critical chance in percent.
///
/// # Formula
///
/// ```text
/// critical_chance = attacker.spe / 2   (real division, not rounded)
/// ```
pub fn critical_chance(attacker_spe: u32) -> f64 {
    f64::from(attacker_spe) / 2.0
}

/// Check if a landed attack is critical.
///
/// # Arguments
///
/// * `attacker_spe` - Attacker's speed
/// * `roll` - Percentage draw in `[0, 100)`, taken after the hit roll
///
/// # Returns
///
/// `true` if `roll < critical_chance(attacker_spe)`; the damage is then
/// multiplied by [`CRITICAL_MULTIPLIER`](super::damage::CRITICAL_MULTIPLIER).
pub fn check_critical(attacker_spe: u32, roll: f64) -> bool {
    roll < critical_chance(attacker_spe)
}
