use super::{CombatStats, Rewards};

/// The player's persistent record.
///
/// `xp` and `gold` only grow during a session; [`PlayerStats::reset`] is the
/// single place that zeroes them. `hp` stays within `0..=max_hp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerStats {
    pub max_hp: u32,
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spe: u32,
    pub luc: u32,
    pub xp: u32,
    pub gold: u32,
}

impl PlayerStats {
    /// Demo starting line: 25 HP, 5 ATK, 2 DEF, 8 SPE, 10 LUC.
    pub const DEFAULT_STATS: CombatStats = CombatStats::new(25, 5, 2, 8, 10);

    /// Fresh record at full health with no progress.
    pub const fn new(stats: CombatStats) -> Self {
        Self {
            max_hp: stats.max_hp,
            hp: stats.max_hp,
            atk: stats.atk,
            def: stats.def,
            spe: stats.spe,
            luc: stats.luc,
            xp: 0,
            gold: 0,
        }
    }

    pub fn combat_stats(&self) -> CombatStats {
        CombatStats::new(self.max_hp, self.atk, self.def, self.spe, self.luc)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Sets current health, clamped to `0..=max_hp`. Returns the stored value.
    pub fn set_hp(&mut self, hp: u32) -> u32 {
        self.hp = hp.min(self.max_hp);
        self.hp
    }

    /// Subtracts damage, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn gain(&mut self, rewards: Rewards) {
        self.xp = self.xp.saturating_add(rewards.xp);
        self.gold = self.gold.saturating_add(rewards.gold);
    }

    /// Full restart: health restored, progress cleared, attributes kept.
    pub fn reset(&mut self) {
        self.hp = self.max_hp;
        self.xp = 0;
        self.gold = 0;
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STATS)
    }
}
