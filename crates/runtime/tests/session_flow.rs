mod common;

use common::*;
use game_core::rng::stream;
use game_core::{
    CombatOutcome, CombatPhase, CombatStats, Direction, EnemyCatalog, EnemyTemplate, PcgRng,
    Rewards, compute_seed, generate,
};
use runtime::{Command, DebugOverride, Mode, Session, SessionEvent};

#[test]
fn narration_plays_in_order_then_exploration_begins() {
    let mut session = Session::new(content(), SEED).unwrap();
    assert_eq!(session.mode(), Mode::Narration);

    let opening = session.opening();
    assert_eq!(kinds(&opening), ["world_generated", "narration_line"]);
    assert_eq!(
        session.current_line(),
        Some("Long ago, in a land of emerald isles and sapphire seas...")
    );

    // Movement is ignored while the story is told.
    let spawn = session.position();
    assert!(session.handle(Command::Move(Direction::North)).unwrap().is_empty());
    assert_eq!(session.position(), spawn);

    for index in 1..4 {
        let events = session.handle(Command::Confirm).unwrap();
        assert!(matches!(
            &events[..],
            [SessionEvent::NarrationLine { index: i, .. }] if *i == index
        ));
    }
    assert_eq!(session.current_line(), Some("Your journey begins here."));

    let events = session.handle(Command::Confirm).unwrap();
    assert_eq!(
        events,
        [SessionEvent::ModeChanged {
            from: Mode::Narration,
            to: Mode::Exploration
        }]
    );
    assert_eq!(session.current_line(), None);
}

#[test]
fn rejected_moves_change_nothing() {
    let mut session = scripted_session(&[0.0]);
    skip_narration(&mut session);

    let (edge, outward) = blocked_edge(session.world());
    teleport(&mut session, edge);

    let before = *session.player();
    let events = session.handle(Command::Move(outward)).unwrap();

    assert!(events.is_empty());
    assert_eq!(session.position(), edge);
    assert_eq!(session.mode(), Mode::Exploration);
    assert_eq!(*session.player(), before);
}

#[test]
fn reaching_the_goal_completes_without_combat_at_any_multiplier() {
    let mut session = scripted_session(&[0.0]);
    skip_narration(&mut session);
    enable_debug(&mut session);
    session
        .handle(Command::Debug(DebugOverride::SetEncounterMultiplier {
            multiplier: 100.0,
        }))
        .unwrap();

    let (approach, onto_goal) = goal_approach(session.world());
    teleport(&mut session, approach);

    let events = session.handle(Command::Move(onto_goal)).unwrap();

    assert_eq!(kinds(&events), ["player_moved", "session_complete"]);
    assert_eq!(events[1], SessionEvent::SessionComplete { xp: 0, gold: 0 });
    assert_eq!(session.mode(), Mode::Exploration);
    assert_eq!(session.combat_phase(), CombatPhase::Idle);
    assert!(session.is_complete());

    // Further movement waits for the restart offer to be accepted.
    let from = session.position();
    assert!(session.handle(Command::Move(onto_goal.turn_left().turn_left())).unwrap().is_empty());
    assert_eq!(session.position(), from);

    let events = session.handle(Command::Confirm).unwrap();
    assert_eq!(kinds(&events)[..2], ["restarted", "world_generated"]);
    assert_eq!(session.generation(), 1);
    assert_eq!(session.mode(), Mode::Narration);
    assert!(!session.is_complete());
}

#[test]
fn winning_an_encounter_pays_out_once() {
    // Every draw is zero: encounters trigger, the first template is picked,
    // and every attack lands critically.
    let mut session = scripted_session(&[0.0]);
    skip_narration(&mut session);

    let step = open_step(session.world(), session.position());
    let events = session.handle(Command::Move(step)).unwrap();
    assert_eq!(kinds(&events), ["player_moved", "mode_changed", "encounter_started"]);
    assert!(matches!(
        &events[2],
        SessionEvent::EncounterStarted { template_id, enemy_hp: 12, .. } if template_id == "slime"
    ));
    assert_eq!(session.mode(), Mode::Combat);

    let events = session.handle(Command::Attack).unwrap();
    assert_eq!(kinds(&events), ["combat_round", "combat_ended"]);
    assert_eq!(
        events[1],
        SessionEvent::CombatEnded {
            outcome: CombatOutcome::Won,
            rewards: Some(Rewards::new(10, 10)),
        }
    );
    if let SessionEvent::CombatRound { lines, enemy_hp, .. } = &events[0] {
        assert_eq!(*enemy_hp, 0);
        assert_eq!(lines[1].text(), "Player attacks! CRITICAL DAMAGE! Player deals 12 hp damage.");
        assert_eq!(lines[2].text(), "Slime defeated! +10 EXP and +10 Gold.");
    }
    assert_eq!((session.player().xp, session.player().gold), (10, 10));
    assert_eq!(session.player().hp, 25);

    // The fight is over: more attacks do nothing and pay nothing.
    assert!(session.handle(Command::Attack).unwrap().is_empty());
    assert_eq!((session.player().xp, session.player().gold), (10, 10));

    let events = session.handle(Command::Confirm).unwrap();
    assert_eq!(
        events,
        [SessionEvent::ModeChanged {
            from: Mode::Combat,
            to: Mode::Exploration
        }]
    );
    assert!(session.enemy().is_none());
}

#[test]
fn running_away_returns_to_exploration_empty_handed() {
    let mut session = scripted_session(&[0.0]);
    skip_narration(&mut session);
    let step = open_step(session.world(), session.position());
    session.handle(Command::Move(step)).unwrap();
    assert_eq!(session.mode(), Mode::Combat);

    let events = session.handle(Command::Cancel).unwrap();
    assert_eq!(
        events[1],
        SessionEvent::CombatEnded {
            outcome: CombatOutcome::Fled,
            rewards: None
        }
    );
    assert_eq!(session.combat_phase(), CombatPhase::Finished(CombatOutcome::Fled));

    session.handle(Command::Confirm).unwrap();
    assert_eq!(session.mode(), Mode::Exploration);
    assert_eq!((session.player().xp, session.player().gold), (0, 0));
}

#[test]
fn defeat_leads_to_a_full_restart() {
    let mut content = content();
    content.enemies = EnemyCatalog::new(vec![EnemyTemplate::new(
        "colossus",
        "Colossus",
        CombatStats::new(99, 40, 9, 20, 0),
        Rewards::new(500, 500),
        1,
    )])
    .unwrap();
    let mut session = scripted_with(content, &[0.0]);
    skip_narration(&mut session);

    let step = open_step(session.world(), session.position());
    session.handle(Command::Move(step)).unwrap();

    let events = session.handle(Command::Attack).unwrap();
    assert_eq!(kinds(&events), ["combat_round", "combat_ended", "defeated"]);
    assert_eq!(session.player().hp, 0);
    assert_eq!(session.mode(), Mode::Combat);

    let events = session.handle(Command::Confirm).unwrap();
    assert_eq!(
        kinds(&events),
        ["restarted", "world_generated", "mode_changed", "narration_line"]
    );
    assert_eq!(session.mode(), Mode::Narration);
    assert_eq!(session.narration_index(), 0);
    assert_eq!(session.player().hp, session.player().max_hp);
    assert_eq!(session.position(), session.world().spawn);
    assert!(session.enemy().is_none());
}

#[test]
fn restart_resets_progress_and_regenerates_terrain() {
    let mut session = scripted_session(&[0.0]);
    skip_narration(&mut session);
    let step = open_step(session.world(), session.position());
    session.handle(Command::Move(step)).unwrap();
    session.handle(Command::Attack).unwrap();
    assert_eq!(session.player().xp, 10);

    let events = session.handle(Command::Restart).unwrap();
    assert_eq!(events[0], SessionEvent::Restarted { generation: 1 });

    let player = session.player();
    assert_eq!((player.hp, player.xp, player.gold), (player.max_hp, 0, 0));
    assert_eq!(session.mode(), Mode::Narration);
    assert_eq!(session.narration_index(), 0);
    assert_eq!(session.combat_phase(), CombatPhase::Idle);

    let config = session.config();
    let mut rng = PcgRng::seeded(compute_seed(SEED, 1, stream::TERRAIN));
    let expected = generate(config.width, config.height, &config.generation, &mut rng).unwrap();
    assert_eq!(session.world(), &expected);
    assert_eq!(session.position(), expected.spawn);
}

#[test]
fn restart_is_available_mid_combat() {
    let mut session = scripted_session(&[0.0]);
    skip_narration(&mut session);
    let step = open_step(session.world(), session.position());
    session.handle(Command::Move(step)).unwrap();
    assert_eq!(session.mode(), Mode::Combat);

    session.handle(Command::Restart).unwrap();
    assert_eq!(session.mode(), Mode::Narration);
    assert!(session.enemy().is_none());
}

#[test]
fn same_seed_replays_identically() {
    let script = [
        Command::Confirm,
        Command::Confirm,
        Command::Confirm,
        Command::Confirm,
        Command::Move(Direction::North),
        Command::Move(Direction::East),
        Command::Attack,
        Command::Move(Direction::West),
        Command::Attack,
        Command::Confirm,
    ];
    let mut a = Session::new(content(), 7).unwrap();
    let mut b = Session::new(content(), 7).unwrap();
    assert_eq!(a.world().fingerprint(), b.world().fingerprint());

    for command in script {
        assert_eq!(a.handle(command).unwrap(), b.handle(command).unwrap());
    }
    assert_eq!(a.player(), b.player());
    assert_eq!(a.position(), b.position());
}

#[test]
fn events_serialize_with_a_type_tag() {
    let session = Session::new(content(), SEED).unwrap();
    let opening = session.opening();

    let json = serde_json::to_value(&opening[1]).unwrap();
    assert_eq!(json["event"], "narration_line");
    assert_eq!(json["index"], 0);

    let json = serde_json::to_value(&opening[0]).unwrap();
    assert_eq!(json["event"], "world_generated");
    assert_eq!(json["fingerprint"].as_str().map(str::len), Some(64));
}
