//! Developer overrides.

use game_core::{CombatOutcome, CombatPhase, GameConfig, Position, RngSource};
use tracing::{debug, info};

use crate::command::{DebugOverride, Mode};
use crate::error::Result;
use crate::events::SessionEvent;

use super::Session;

impl<R: RngSource> Session<R> {
    /// Validates and applies an override. Rejected overrides are ignored.
    pub(super) fn apply_debug(
        &mut self,
        change: DebugOverride,
        events: &mut Vec<SessionEvent>,
    ) -> Result<()> {
        if !self.debug {
            debug!("Debug override {:?} ignored: debug mode is off", change);
            return Ok(());
        }

        let mut applied_events = Vec::new();
        let Some(applied) = self.try_apply(change, &mut applied_events)? else {
            debug!("Debug override {:?} rejected in {} mode", change, self.mode);
            return Ok(());
        };

        info!("Debug override applied: {:?}", applied);
        events.push(SessionEvent::DebugApplied { change: applied });
        events.append(&mut applied_events);
        Ok(())
    }

    /// Returns the override as actually applied, or `None` if rejected.
    fn try_apply(
        &mut self,
        change: DebugOverride,
        events: &mut Vec<SessionEvent>,
    ) -> Result<Option<DebugOverride>> {
        let applied = match change {
            DebugOverride::SetPosition { x, y } => {
                let dims = self.world.dimensions();
                let to = Position::new(
                    x.clamp(0, dims.width as i32 - 1),
                    y.clamp(0, dims.height as i32 - 1),
                );
                let Some(tile) = self.world.tile(to).filter(|t| t.is_walkable()) else {
                    return Ok(None);
                };
                if self.mode == Mode::Combat {
                    return Ok(None);
                }
                let from = self.position;
                self.position = to;
                events.push(SessionEvent::PlayerMoved { from, to, tile });
                DebugOverride::SetPosition { x: to.x, y: to.y }
            }

            DebugOverride::SetHp { hp } => {
                let hp = self.player.set_hp(hp.min(GameConfig::MAX_HP_OVERRIDE));
                DebugOverride::SetHp { hp }
            }

            DebugOverride::SetEncounterMultiplier { multiplier } => {
                if multiplier.is_nan() {
                    return Ok(None);
                }
                let multiplier = multiplier.clamp(0.0, GameConfig::MAX_ENCOUNTER_MULTIPLIER);
                self.encounter_multiplier = multiplier;
                DebugOverride::SetEncounterMultiplier { multiplier }
            }

            DebugOverride::EnterMode { mode } => {
                match mode {
                    Mode::Narration => self.enter_narration(events),
                    Mode::Exploration => self.enter_exploration(events),
                    Mode::Combat => {
                        if self.mode == Mode::Combat {
                            return Ok(None);
                        }
                        self.combat.reset();
                        self.start_encounter(events)?;
                    }
                }
                change
            }

            DebugOverride::ForceWin | DebugOverride::ForceFlee => {
                if self.combat.phase() != CombatPhase::InProgress {
                    return Ok(None);
                }
                let outcome = if change == DebugOverride::ForceWin {
                    CombatOutcome::Won
                } else {
                    CombatOutcome::Fled
                };
                let report = self.combat.force(&mut self.player, outcome)?;
                self.report_round(report, events);
                change
            }
        };
        Ok(Some(applied))
    }
}
