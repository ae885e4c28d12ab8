//! Encounter lifecycle: `Idle -> InProgress -> Finished -> Idle`.

use crate::error::{ErrorSeverity, GameError};
use crate::rng::RngSource;
use crate::stats::{EnemyInstance, EnemyTemplate, PlayerStats};

use super::round::{
    self, CombatAction, CombatLog, CombatOutcome, RoundReport, begin_combat, resolve_round,
};

/// Where the resolver stands in the encounter lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    #[default]
    Idle,
    InProgress,
    Finished(CombatOutcome),
}

/// Out-of-sequence calls. The resolver is left untouched when one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("an encounter is already active")]
    AlreadyInProgress,

    #[error("no encounter is in progress")]
    NotInProgress,

    #[error("the encounter has not finished")]
    NotFinished,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyInProgress => "COMBAT_ALREADY_IN_PROGRESS",
            Self::NotInProgress => "COMBAT_NOT_IN_PROGRESS",
            Self::NotFinished => "COMBAT_NOT_FINISHED",
        }
    }
}

/// Stateful wrapper around [`resolve_round`] holding the active enemy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatResolver {
    phase: CombatPhase,
    enemy: Option<EnemyInstance>,
    turn: u32,
}

impl CombatResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn enemy(&self) -> Option<&EnemyInstance> {
        self.enemy.as_ref()
    }

    /// Rounds resolved without a knockout since the encounter began.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        match self.phase {
            CombatPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Starts an encounter against a fresh instance of `template`.
    ///
    /// # Errors
    ///
    /// [`CombatError::AlreadyInProgress`] unless the resolver is idle.
    pub fn begin(
        &mut self,
        player: &PlayerStats,
        template: &EnemyTemplate,
    ) -> Result<CombatLog, CombatError> {
        if self.phase != CombatPhase::Idle {
            return Err(CombatError::AlreadyInProgress);
        }
        let (enemy, log) = begin_combat(player, template);
        self.enemy = Some(enemy);
        self.turn = 0;
        self.phase = CombatPhase::InProgress;
        Ok(log)
    }

    /// Resolves one round and writes the results back to `player`.
    ///
    /// # Errors
    ///
    /// [`CombatError::NotInProgress`] unless a round can be played.
    pub fn resolve_round(
        &mut self,
        player: &mut PlayerStats,
        action: CombatAction,
        rng: &mut impl RngSource,
    ) -> Result<RoundReport, CombatError> {
        let enemy = self.active_enemy()?;
        let report = resolve_round(enemy, player, action, rng);
        self.apply(player, &report);
        Ok(report)
    }

    /// Ends the encounter immediately with `outcome`, bypassing the dice.
    ///
    /// A forced win still grants the enemy's rewards; a forced loss drops the
    /// player to zero HP.
    pub fn force(
        &mut self,
        player: &mut PlayerStats,
        outcome: CombatOutcome,
    ) -> Result<RoundReport, CombatError> {
        let enemy = self.active_enemy()?;
        let mut report = RoundReport {
            log: CombatLog::new(),
            attacks: Default::default(),
            outcome: None,
            player: *player,
            enemy_hp: enemy.hp,
            rewards: None,
        };
        match outcome {
            CombatOutcome::Won => round::win(&mut report, enemy),
            CombatOutcome::Lost => round::lose(&mut report),
            CombatOutcome::Fled => round::flee(&mut report),
        }
        self.apply(player, &report);
        Ok(report)
    }

    /// Discards the enemy and returns to `Idle`, reporting how the fight ended.
    ///
    /// # Errors
    ///
    /// [`CombatError::NotFinished`] unless a terminal outcome was reached.
    pub fn finish(&mut self) -> Result<CombatOutcome, CombatError> {
        let outcome = self.outcome().ok_or(CombatError::NotFinished)?;
        self.reset();
        Ok(outcome)
    }

    /// Drops any encounter regardless of phase. Used by a full restart.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn active_enemy(&self) -> Result<&EnemyInstance, CombatError> {
        match (&self.phase, &self.enemy) {
            (CombatPhase::InProgress, Some(enemy)) => Ok(enemy),
            _ => Err(CombatError::NotInProgress),
        }
    }

    fn apply(&mut self, player: &mut PlayerStats, report: &RoundReport) {
        *player = report.player;
        if let Some(enemy) = self.enemy.as_mut() {
            enemy.hp = report.enemy_hp;
        }
        match report.outcome {
            Some(outcome) => self.phase = CombatPhase::Finished(outcome),
            None => self.turn += 1,
        }
    }
}
