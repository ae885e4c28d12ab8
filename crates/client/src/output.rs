//! Event rendering for stdout.

use std::io::{self, Write};

use anyhow::Result;
use game_core::{CombatOutcome, Position, RngSource, World};
use runtime::{Mode, Session, SessionEvent};

use crate::config::EventFormat;

pub struct Printer<W: Write> {
    out: W,
    format: EventFormat,
}

impl Printer<io::Stdout> {
    pub fn stdout(format: EventFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: EventFormat) -> Self {
        Self { out, format }
    }

    pub fn events(&mut self, events: &[SessionEvent]) -> Result<()> {
        for event in events {
            match self.format {
                EventFormat::Json => writeln!(self.out, "{}", serde_json::to_string(event)?)?,
                EventFormat::Text => {
                    for line in describe(event) {
                        writeln!(self.out, "{}", line)?;
                    }
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn map<R: RngSource>(&mut self, session: &Session<R>) -> Result<()> {
        self.line(&render_map(session.world(), session.position()))
    }

    pub fn status<R: RngSource>(&mut self, session: &Session<R>) -> Result<()> {
        let p = session.player();
        let mut status = format!(
            "[{}] HP {}/{} ATK {} DEF {} SPE {} LUC {} | EXP {} Gold {} | at {}",
            session.mode(),
            p.hp,
            p.max_hp,
            p.atk,
            p.def,
            p.spe,
            p.luc,
            p.xp,
            p.gold,
            session.position()
        );
        if session.debug_enabled() {
            status.push_str(&format!(
                " | debug: multiplier {:.2}, chance here {:.3}",
                session.encounter_multiplier(),
                session.encounter_chance_at(session.position())
            ));
        }
        self.line(&status)
    }
}

/// Human-readable lines for one event.
pub fn describe(event: &SessionEvent) -> Vec<String> {
    match event {
        SessionEvent::NarrationLine { text, .. } => vec![format!("{}  (ok)", text)],
        SessionEvent::ModeChanged { to, .. } => match to {
            Mode::Exploration => vec!["You are free to explore. (n/s/e/w, map)".to_owned()],
            Mode::Combat => vec!["-- combat -- (attack/run)".to_owned()],
            Mode::Narration => vec![],
        },
        SessionEvent::PlayerMoved { to, tile, .. } => vec![format!("You walk to {} ({}).", to, tile)],
        SessionEvent::EncounterStarted { lines, .. } | SessionEvent::CombatRound { lines, .. } => {
            lines.iter().map(|line| line.text().to_owned()).collect()
        }
        SessionEvent::CombatEnded { outcome, .. } => match outcome {
            CombatOutcome::Lost => vec![],
            _ => vec!["(ok to continue)".to_owned()],
        },
        SessionEvent::SessionComplete { xp, gold } => vec![
            "You found the treasure!".to_owned(),
            format!("Final tally: {} EXP, {} Gold. (ok to play again)", xp, gold),
        ],
        SessionEvent::Defeated { xp, gold } => vec![format!(
            "Game over with {} EXP and {} Gold. (ok to start over)",
            xp, gold
        )],
        SessionEvent::Restarted { generation } => vec![format!("A new island rises (#{}).", generation)],
        SessionEvent::WorldGenerated {
            width,
            height,
            spawn,
            goal,
            ..
        } => vec![format!(
            "Island {}x{}: you land at {}, the treasure lies at {}.",
            width, height, spawn, goal
        )],
        SessionEvent::DebugToggled { enabled } => {
            vec![format!("Debug mode {}.", if *enabled { "on" } else { "off" })]
        }
        SessionEvent::DebugApplied { change } => vec![format!("debug: {:?}", change)],
    }
}

/// One glyph per tile, one row per line, `@` for the player.
pub fn render_map(world: &World, player: Position) -> String {
    let dims = world.dimensions();
    let mut map = String::with_capacity(((dims.width + 1) * dims.height) as usize);
    for y in 0..dims.height {
        let Some(row) = world.grid.row(y) else {
            break;
        };
        for (x, tile) in row.iter().enumerate() {
            if player.x == x as i32 && player.y == y as i32 {
                map.push('@');
            } else {
                map.push(tile.glyph());
            }
        }
        if y + 1 < dims.height {
            map.push('\n');
        }
    }
    map
}
