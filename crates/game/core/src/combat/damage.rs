//! Damage calculation and application.

/// Damage multiplier applied to attack on a critical hit.
pub const CRITICAL_MULTIPLIER: u32 = 3;

/// Damage dealt by a landed attack.
///
/// # Formula
///
/// ```text
/// raw = atk * (CRITICAL_MULTIPLIER if critical else 1)
/// damage = max(1, raw - def)
/// ```
///
/// A landed attack always deals at least one point.
pub fn calculate_damage(atk: u32, def: u32, is_critical: bool) -> u32 {
    let multiplier = if is_critical { CRITICAL_MULTIPLIER } else { 1 };
    atk.saturating_mul(multiplier).saturating_sub(def).max(1)
}

/// Apply damage to current HP, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
