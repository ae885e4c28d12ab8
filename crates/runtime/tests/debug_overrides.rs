mod common;

use common::*;
use game_core::{CombatOutcome, GameConfig, RngSource, TileKind};
use runtime::{Command, DebugOverride, Mode, Session, SessionEvent};

fn debug(session: &mut Session<impl RngSource>, change: DebugOverride) -> Vec<SessionEvent> {
    session.handle(Command::Debug(change)).unwrap()
}

#[test]
fn overrides_require_debug_mode() {
    let mut session = Session::new(content(), SEED).unwrap();

    assert!(debug(&mut session, DebugOverride::SetHp { hp: 1 }).is_empty());
    assert_eq!(session.player().hp, 25);

    assert_eq!(
        session.handle(Command::ToggleDebug).unwrap(),
        [SessionEvent::DebugToggled { enabled: true }]
    );
    let events = debug(&mut session, DebugOverride::SetHp { hp: 1 });
    assert_eq!(
        events,
        [SessionEvent::DebugApplied {
            change: DebugOverride::SetHp { hp: 1 }
        }]
    );
    assert_eq!(session.player().hp, 1);

    session.handle(Command::ToggleDebug).unwrap();
    assert!(!session.debug_enabled());
}

#[test]
fn hp_override_is_clamped_to_max() {
    let mut session = Session::new(content(), SEED).unwrap();
    enable_debug(&mut session);

    let events = debug(&mut session, DebugOverride::SetHp { hp: 5000 });
    assert_eq!(
        events,
        [SessionEvent::DebugApplied {
            change: DebugOverride::SetHp { hp: 25 }
        }]
    );
    assert_eq!(session.player().hp, 25);
}

#[test]
fn position_override_is_clamped_and_must_be_walkable() {
    let mut session = Session::new(content(), SEED).unwrap();
    skip_narration(&mut session);
    enable_debug(&mut session);
    let spawn = session.position();

    // Clamps to (0, 0), which is always water.
    assert!(debug(&mut session, DebugOverride::SetPosition { x: -50, y: -50 }).is_empty());
    assert_eq!(session.position(), spawn);

    let target = session
        .world()
        .grid
        .positions()
        .find(|p| session.world().tile(*p) == Some(TileKind::Land) && *p != spawn)
        .unwrap();
    let events = debug(
        &mut session,
        DebugOverride::SetPosition {
            x: target.x,
            y: target.y,
        },
    );
    assert_eq!(kinds(&events), ["debug_applied", "player_moved"]);
    assert_eq!(session.position(), target);
    assert_eq!(session.mode(), Mode::Exploration);
}

#[test]
fn multiplier_override_is_clamped() {
    let mut session = Session::new(content(), SEED).unwrap();
    enable_debug(&mut session);

    debug(&mut session, DebugOverride::SetEncounterMultiplier { multiplier: 1e9 });
    assert_eq!(session.encounter_multiplier(), GameConfig::MAX_ENCOUNTER_MULTIPLIER);

    debug(&mut session, DebugOverride::SetEncounterMultiplier { multiplier: -2.0 });
    assert_eq!(session.encounter_multiplier(), 0.0);

    let events = debug(
        &mut session,
        DebugOverride::SetEncounterMultiplier {
            multiplier: f64::NAN,
        },
    );
    assert!(events.is_empty());
    assert_eq!(session.encounter_multiplier(), 0.0);
}

#[test]
fn zero_multiplier_never_starts_encounters() {
    let mut session = scripted_session(&[0.0]);
    skip_narration(&mut session);
    enable_debug(&mut session);
    debug(&mut session, DebugOverride::SetEncounterMultiplier { multiplier: 0.0 });

    let step = open_step(session.world(), session.position());
    let events = session.handle(Command::Move(step)).unwrap();
    assert_eq!(kinds(&events), ["player_moved"]);
    assert_eq!(session.mode(), Mode::Exploration);
    assert_eq!(session.encounter_chance_at(session.position()), 0.0);
}

#[test]
fn forced_encounter_and_win() {
    let mut session = Session::new(content(), SEED).unwrap();
    enable_debug(&mut session);

    let events = debug(&mut session, DebugOverride::EnterMode { mode: Mode::Combat });
    assert_eq!(
        kinds(&events),
        ["debug_applied", "mode_changed", "encounter_started"]
    );
    let rewards = session.enemy().map(|e| e.rewards).unwrap();

    let events = debug(&mut session, DebugOverride::ForceWin);
    assert_eq!(
        events.last(),
        Some(&SessionEvent::CombatEnded {
            outcome: CombatOutcome::Won,
            rewards: Some(rewards),
        })
    );
    assert_eq!(session.player().xp, rewards.xp);

    // Nothing left to force.
    assert!(debug(&mut session, DebugOverride::ForceWin).is_empty());
    assert_eq!(session.player().xp, rewards.xp);

    session.handle(Command::Confirm).unwrap();
    assert_eq!(session.mode(), Mode::Exploration);
}

#[test]
fn forced_flee_outside_combat_is_rejected() {
    let mut session = Session::new(content(), SEED).unwrap();
    enable_debug(&mut session);
    assert!(debug(&mut session, DebugOverride::ForceFlee).is_empty());

    debug(&mut session, DebugOverride::EnterMode { mode: Mode::Combat });
    let events = debug(&mut session, DebugOverride::ForceFlee);
    assert!(events.contains(&SessionEvent::CombatEnded {
        outcome: CombatOutcome::Fled,
        rewards: None
    }));
    assert_eq!((session.player().xp, session.player().gold), (0, 0));
}

#[test]
fn entering_narration_replays_from_the_first_line() {
    let mut session = Session::new(content(), SEED).unwrap();
    skip_narration(&mut session);
    enable_debug(&mut session);

    let events = debug(&mut session, DebugOverride::EnterMode { mode: Mode::Narration });
    assert_eq!(kinds(&events), ["debug_applied", "mode_changed", "narration_line"]);
    assert_eq!(session.narration_index(), 0);
    assert_eq!(session.generation(), 0);
    assert_eq!(session.position(), session.world().spawn);
}

#[test]
fn mode_jumps_clear_a_finished_run() {
    let mut session = Session::new(content(), SEED).unwrap();
    skip_narration(&mut session);
    enable_debug(&mut session);
    debug(&mut session, DebugOverride::SetEncounterMultiplier { multiplier: 0.0 });

    let (approach, onto_goal) = goal_approach(session.world());
    teleport(&mut session, approach);
    session.handle(Command::Move(onto_goal)).unwrap();
    assert!(session.is_complete());

    // Replaying the story leaves exploration open again.
    debug(&mut session, DebugOverride::EnterMode { mode: Mode::Narration });
    skip_narration(&mut session);
    assert_eq!(session.mode(), Mode::Exploration);
    assert!(!session.is_complete());

    let off_goal = open_step(session.world(), session.position());
    let events = session.handle(Command::Move(off_goal)).unwrap();
    assert_eq!(kinds(&events), ["player_moved"]);

    // Same for jumping straight back into exploration.
    let back = off_goal.turn_left().turn_left();
    let events = session.handle(Command::Move(back)).unwrap();
    assert_eq!(kinds(&events), ["player_moved", "session_complete"]);
    debug(&mut session, DebugOverride::EnterMode { mode: Mode::Exploration });
    assert!(!session.is_complete());

    let events = session.handle(Command::Move(off_goal)).unwrap();
    assert_eq!(kinds(&events), ["player_moved"]);
    assert_eq!(session.generation(), 0);
}
