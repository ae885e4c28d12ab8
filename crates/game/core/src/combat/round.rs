//! One combat round between the player and an enemy instance.

use std::fmt;

use arrayvec::ArrayVec;

use crate::rng::RngSource;
use crate::stats::{EnemyInstance, EnemyTemplate, PlayerStats, Rewards};

use super::damage::apply_damage;
use super::result::{AttackResult, resolve_attack};

/// Display name used for the player in log lines.
pub const PLAYER_NAME: &str = "Player";

/// Upper bound on lines produced by one round.
///
/// A round holds at most a header, two attacks and one closing line.
pub const MAX_LOG_LINES: usize = 6;

/// Ordered, human-readable lines for one round. Rebuilt every round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLog {
    lines: ArrayVec<String, MAX_LOG_LINES>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line; lines beyond [`MAX_LOG_LINES`] are dropped.
    pub fn push(&mut self, line: impl Into<String>) {
        let _ = self.lines.try_push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for CombatLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Combatant side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

/// The player's choice for a round.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CombatAction {
    Attack,
    Run,
}

/// Terminal result of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatOutcome {
    Won,
    Lost,
    Fled,
}

/// One attack as it happened within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRecord {
    pub attacker: Side,
    pub result: AttackResult,
    /// Defender HP after the attack.
    pub defender_hp: u32,
}

/// Everything one round produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub log: CombatLog,
    pub attacks: ArrayVec<AttackRecord, 2>,
    /// `None` while the fight continues.
    pub outcome: Option<CombatOutcome>,
    /// Player record after the round, rewards included.
    pub player: PlayerStats,
    pub enemy_hp: u32,
    /// Rewards granted this round; only set on a win.
    pub rewards: Option<Rewards>,
}

/// Acting order for a round. The faster side acts first; ties go to the player.
pub fn turn_order(player_spe: u32, enemy_spe: u32) -> [Side; 2] {
    if player_spe >= enemy_spe {
        [Side::Player, Side::Enemy]
    } else {
        [Side::Enemy, Side::Player]
    }
}

/// Builds a fresh enemy instance and the opening log.
pub fn begin_combat(player: &PlayerStats, template: &EnemyTemplate) -> (EnemyInstance, CombatLog) {
    let enemy = template.spawn();
    let mut log = CombatLog::new();
    log.push("A foe approaches!");
    log.push(format!(
        "{} (HP {}) blocks the way. {PLAYER_NAME} HP {}/{}.",
        enemy.name, enemy.hp, player.hp, player.max_hp
    ));
    (enemy, log)
}

/// Resolves one round without mutating its inputs.
///
/// `Attack` lets both sides act in [`turn_order`], stopping as soon as either
/// side reaches zero HP. Defeating the enemy adds its rewards to the returned
/// player record exactly once. `Run` ends the fight with no damage and no
/// draws.
pub fn resolve_round(
    enemy: &EnemyInstance,
    player: &PlayerStats,
    action: CombatAction,
    rng: &mut impl RngSource,
) -> RoundReport {
    let mut report = RoundReport {
        log: CombatLog::new(),
        attacks: ArrayVec::new(),
        outcome: None,
        player: *player,
        enemy_hp: enemy.hp,
        rewards: None,
    };

    if action == CombatAction::Run {
        flee(&mut report);
        return report;
    }

    report.log.push("-> Turn decision");
    let player_stats = player.combat_stats();

    for side in turn_order(player.spe, enemy.stats.spe) {
        let (attacker, defender, name) = match side {
            Side::Player => (&player_stats, &enemy.stats, PLAYER_NAME),
            Side::Enemy => (&enemy.stats, &player_stats, enemy.name.as_str()),
        };
        let result = resolve_attack(attacker, defender, rng);

        let defender_hp = match side {
            Side::Player => {
                report.enemy_hp = apply_damage(report.enemy_hp, result.damage);
                report.enemy_hp
            }
            Side::Enemy => {
                report.player.take_damage(result.damage);
                report.player.hp
            }
        };
        report.attacks.push(AttackRecord {
            attacker: side,
            result,
            defender_hp,
        });
        report.log.push(attack_line(name, &result));

        if report.enemy_hp == 0 {
            win(&mut report, enemy);
            break;
        }
        if !report.player.is_alive() {
            lose(&mut report);
            break;
        }
    }

    report
}

fn attack_line(name: &str, result: &AttackResult) -> String {
    if !result.landed() {
        return format!("{name} attacks! {name} missed! {name} deals 0 hp damage.");
    }
    let critical = if result.is_critical() {
        "CRITICAL DAMAGE! "
    } else {
        ""
    };
    format!(
        "{name} attacks! {critical}{name} deals {} hp damage.",
        result.damage
    )
}

pub(super) fn win(report: &mut RoundReport, enemy: &EnemyInstance) {
    let rewards = enemy.rewards;
    report.enemy_hp = 0;
    report.player.gain(rewards);
    report.rewards = Some(rewards);
    report.outcome = Some(CombatOutcome::Won);
    report.log.push(format!(
        "{} defeated! +{} EXP and +{} Gold.",
        enemy.name, rewards.xp, rewards.gold
    ));
}

pub(super) fn lose(report: &mut RoundReport) {
    report.player.hp = 0;
    report.outcome = Some(CombatOutcome::Lost);
    report.log.push(format!("{PLAYER_NAME} was defeated..."));
}

pub(super) fn flee(report: &mut RoundReport) {
    report.outcome = Some(CombatOutcome::Fled);
    report.log.push("You ran away!");
}
