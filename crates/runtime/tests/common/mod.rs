#![allow(dead_code)]

use game_content::{ContentFactory, GameContent};
use game_core::{Direction, Position, RngSource, ScriptedRng, World};
use runtime::{Command, DebugOverride, Mode, Session, SessionEvent};

pub const SEED: u64 = 42;

pub fn content() -> GameContent {
    ContentFactory::builtin().expect("built-in content parses")
}

/// Session whose encounter, enemy and combat draws replay `draws`.
pub fn scripted_session(draws: &[f64]) -> Session<ScriptedRng> {
    scripted_with(content(), draws)
}

pub fn scripted_with(content: GameContent, draws: &[f64]) -> Session<ScriptedRng> {
    Session::with_rng(content, SEED, ScriptedRng::new(draws.iter().copied()))
        .expect("session builds")
}

pub fn skip_narration<R: RngSource>(session: &mut Session<R>) {
    while session.mode() == Mode::Narration {
        session.handle(Command::Confirm).unwrap();
    }
}

pub fn enable_debug<R: RngSource>(session: &mut Session<R>) {
    if !session.debug_enabled() {
        session.handle(Command::ToggleDebug).unwrap();
    }
}

pub fn teleport<R: RngSource>(session: &mut Session<R>, to: Position) {
    enable_debug(session);
    session
        .handle(Command::Debug(DebugOverride::SetPosition { x: to.x, y: to.y }))
        .unwrap();
    assert_eq!(session.position(), to);
}

/// Direction from `from` into a walkable tile that is not the goal.
pub fn open_step(world: &World, from: Position) -> Direction {
    Direction::ALL
        .into_iter()
        .find(|&d| {
            let to = from.step(d);
            world.is_walkable(to) && !world.is_goal(to)
        })
        .expect("an open neighbour")
}

/// A walkable cell next to the goal and the direction leading onto it.
pub fn goal_approach(world: &World) -> (Position, Direction) {
    Direction::ALL
        .into_iter()
        .find_map(|d| {
            let neighbour = world.goal.step(d);
            world
                .is_walkable(neighbour)
                .then(|| (neighbour, d.turn_left().turn_left()))
        })
        .expect("goal has a walkable neighbour")
}

/// A walkable non-goal cell and a direction that leaves the walkable area.
pub fn blocked_edge(world: &World) -> (Position, Direction) {
    world
        .grid
        .positions()
        .filter(|p| world.is_walkable(*p) && !world.is_goal(*p))
        .find_map(|p| {
            Direction::ALL
                .into_iter()
                .find(|d| !world.is_walkable(p.step(*d)))
                .map(|d| (p, d))
        })
        .expect("the island has a coast")
}

pub fn kinds(events: &[SessionEvent]) -> Vec<&'static str> {
    events.iter().map(SessionEvent::kind).collect()
}
