//! Session controller.
//!
//! [`Session`] is the single owner of mutable game state: mode, player
//! record, world, position, combat resolver and the session RNG. Clients
//! feed it [`Command`]s and render the [`SessionEvent`]s it returns. Every
//! call runs to completion; nothing happens between calls.
//!
//! # Random streams
//!
//! Terrain for generation `n` is built from
//! `compute_seed(seed, n, stream::TERRAIN)`, so each restart produces a new
//! island that is still reproducible from the session seed. Encounter rolls,
//! enemy picks and combat draws come from a separate session stream that
//! persists across restarts.

mod debug;

use game_content::GameContent;
use game_core::rng::stream;
use game_core::{
    CombatAction, CombatOutcome, CombatPhase, CombatResolver, EnemyCatalog, EnemyInstance, GameConfig,
    NarrationScript, NarrationStep, PcgRng, PlayerStats, Position, RngSource, RoundReport,
    TileKind, World, advance_narration, compute_seed, generate,
};
use tracing::{debug, info};

use crate::command::{Command, Mode};
use crate::error::Result;
use crate::events::{DisplayLine, SessionEvent};

pub struct Session<R: RngSource = PcgRng> {
    config: GameConfig,
    enemies: EnemyCatalog,
    narration: NarrationScript,

    seed: u64,
    generation: u64,
    world: World,
    position: Position,
    player: PlayerStats,

    mode: Mode,
    narration_index: usize,
    combat: CombatResolver,
    /// Goal reached; exploration waits for a restart.
    complete: bool,

    debug: bool,
    encounter_multiplier: f64,
    rng: R,
}

impl Session<PcgRng> {
    /// Creates a session whose every random draw derives from `seed`.
    pub fn new(content: GameContent, seed: u64) -> Result<Self> {
        let rng = PcgRng::seeded(compute_seed(seed, 0, stream::SESSION));
        Self::with_rng(content, seed, rng)
    }
}

impl<R: RngSource> Session<R> {
    /// Creates a session with a caller-supplied session stream.
    ///
    /// Terrain still derives from `seed`; `rng` feeds encounter rolls, enemy
    /// selection and combat.
    pub fn with_rng(content: GameContent, seed: u64, rng: R) -> Result<Self> {
        let GameContent {
            config,
            enemies,
            narration,
        } = content;

        let world = generate_world_for(&config, seed, 0)?;
        let mut player = config.player;
        player.reset();
        info!(
            "Session created: seed={}, island {}x{}, spawn {}, goal {}",
            seed,
            config.width,
            config.height,
            world.spawn,
            world.goal
        );

        let mode = if narration.is_empty() {
            Mode::Exploration
        } else {
            Mode::Narration
        };

        Ok(Self {
            encounter_multiplier: config.encounter_multiplier,
            position: world.spawn,
            config,
            enemies,
            narration,
            seed,
            generation: 0,
            world,
            player,
            mode,
            narration_index: 0,
            combat: CombatResolver::new(),
            complete: false,
            debug: false,
            rng,
        })
    }

    /// Events describing the state a fresh session starts in.
    pub fn opening(&self) -> Vec<SessionEvent> {
        let mut events = vec![SessionEvent::world_generated(&self.world)];
        if let Some(line) = self.narration_event() {
            events.push(line);
        }
        events
    }

    /// Applies one command and returns what happened, in order.
    ///
    /// Commands that make no sense in the current mode, or moves into water,
    /// mountains or off the grid, change nothing and produce no events.
    ///
    /// # Errors
    ///
    /// Only a failed island regeneration on restart is expected in practice;
    /// the session is left unchanged when it happens.
    pub fn handle(&mut self, command: Command) -> Result<Vec<SessionEvent>> {
        let mut events = Vec::new();
        match command {
            Command::Restart => self.restart(&mut events)?,
            Command::ToggleDebug => {
                self.debug = !self.debug;
                info!("Debug mode {}", if self.debug { "enabled" } else { "disabled" });
                events.push(SessionEvent::DebugToggled {
                    enabled: self.debug,
                });
            }
            Command::Debug(change) => self.apply_debug(change, &mut events)?,
            command => match self.mode {
                Mode::Narration => self.handle_narration(command, &mut events),
                Mode::Exploration => self.handle_exploration(command, &mut events)?,
                Mode::Combat => self.handle_combat(command, &mut events)?,
            },
        }
        Ok(events)
    }

    // ===== accessors =====

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn player(&self) -> &PlayerStats {
        &self.player
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of restarts since the session was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn narration_index(&self) -> usize {
        self.narration_index
    }

    pub fn current_line(&self) -> Option<&str> {
        match self.mode {
            Mode::Narration => self.narration.line(self.narration_index),
            _ => None,
        }
    }

    pub fn combat_phase(&self) -> CombatPhase {
        self.combat.phase()
    }

    pub fn enemy(&self) -> Option<&EnemyInstance> {
        self.combat.enemy()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    pub fn encounter_multiplier(&self) -> f64 {
        self.encounter_multiplier
    }

    /// Encounter chance of `position` under the current multiplier.
    pub fn encounter_chance_at(&self, position: Position) -> f64 {
        self.config
            .encounters
            .tile_chance(&self.world, position, self.encounter_multiplier)
    }

    // ===== narration =====

    fn handle_narration(&mut self, command: Command, events: &mut Vec<SessionEvent>) {
        if command != Command::Confirm {
            self.ignore(command);
            return;
        }
        match advance_narration(self.narration_index, self.narration.len()) {
            NarrationStep::Line(index) => {
                self.narration_index = index;
                events.extend(self.narration_event());
            }
            NarrationStep::Complete => self.enter_exploration(events),
        }
    }

    fn narration_event(&self) -> Option<SessionEvent> {
        let text = self.current_line()?;
        Some(SessionEvent::NarrationLine {
            index: self.narration_index,
            text: text.to_owned(),
        })
    }

    fn enter_narration(&mut self, events: &mut Vec<SessionEvent>) {
        self.combat.reset();
        self.complete = false;
        self.narration_index = 0;
        if self.narration.is_empty() {
            self.set_mode(Mode::Exploration, events);
            return;
        }
        self.set_mode(Mode::Narration, events);
        events.extend(self.narration_event());
    }

    // ===== exploration =====

    fn handle_exploration(&mut self, command: Command, events: &mut Vec<SessionEvent>) -> Result<()> {
        match command {
            Command::Move(direction) if !self.complete => {
                let from = self.position;
                let to = from.step(direction);
                let Some(tile) = self.world.tile(to).filter(|t| t.is_walkable()) else {
                    debug!("Move {} from {} rejected: {} is not walkable", direction, from, to);
                    return Ok(());
                };

                self.position = to;
                events.push(SessionEvent::PlayerMoved { from, to, tile });

                if tile == TileKind::Goal {
                    self.complete = true;
                    info!(
                        "Goal reached at {}: xp={}, gold={}",
                        to, self.player.xp, self.player.gold
                    );
                    events.push(SessionEvent::SessionComplete {
                        xp: self.player.xp,
                        gold: self.player.gold,
                    });
                    return Ok(());
                }

                let encounter = self.config.encounters.roll(
                    &self.world,
                    to,
                    self.encounter_multiplier,
                    &mut self.rng,
                );
                debug!("Encounter roll at {} ({}): {}", to, tile, encounter);
                if encounter {
                    self.start_encounter(events)?;
                }
                Ok(())
            }
            Command::Confirm if self.complete => self.restart(events),
            command => {
                self.ignore(command);
                Ok(())
            }
        }
    }

    fn enter_exploration(&mut self, events: &mut Vec<SessionEvent>) {
        self.combat.reset();
        self.complete = false;
        self.set_mode(Mode::Exploration, events);
    }

    // ===== combat =====

    fn start_encounter(&mut self, events: &mut Vec<SessionEvent>) -> Result<()> {
        let template = self.enemies.select(&mut self.rng).clone();
        let log = self.combat.begin(&self.player, &template)?;
        info!("Encounter started: {} ({} HP)", template.name, template.stats.max_hp);

        self.set_mode(Mode::Combat, events);
        events.push(SessionEvent::EncounterStarted {
            enemy_hp: template.stats.max_hp,
            template_id: template.id,
            enemy: template.name,
            lines: DisplayLine::from_log(&log),
        });
        Ok(())
    }

    fn handle_combat(&mut self, command: Command, events: &mut Vec<SessionEvent>) -> Result<()> {
        match (command, self.combat.phase()) {
            (Command::Attack, CombatPhase::InProgress) => {
                self.play_round(CombatAction::Attack, events)
            }
            (Command::Run | Command::Cancel, CombatPhase::InProgress) => {
                self.play_round(CombatAction::Run, events)
            }
            (Command::Confirm, CombatPhase::Finished(_)) => self.close_encounter(events),
            (command, _) => {
                self.ignore(command);
                Ok(())
            }
        }
    }

    fn play_round(&mut self, action: CombatAction, events: &mut Vec<SessionEvent>) -> Result<()> {
        let report = self
            .combat
            .resolve_round(&mut self.player, action, &mut self.rng)?;
        self.report_round(report, events);
        Ok(())
    }

    fn report_round(&self, report: RoundReport, events: &mut Vec<SessionEvent>) {
        events.push(SessionEvent::CombatRound {
            turn: self.combat.turn(),
            lines: DisplayLine::from_log(&report.log),
            player_hp: self.player.hp,
            enemy_hp: report.enemy_hp,
        });

        let Some(outcome) = report.outcome else {
            return;
        };
        info!(
            "Encounter finished: {} (hp={}, xp={}, gold={})",
            outcome, self.player.hp, self.player.xp, self.player.gold
        );
        events.push(SessionEvent::CombatEnded {
            outcome,
            rewards: report.rewards,
        });
        if outcome == CombatOutcome::Lost {
            events.push(SessionEvent::Defeated {
                xp: self.player.xp,
                gold: self.player.gold,
            });
        }
    }

    fn close_encounter(&mut self, events: &mut Vec<SessionEvent>) -> Result<()> {
        match self.combat.finish()? {
            CombatOutcome::Lost => self.restart(events),
            _ => {
                self.enter_exploration(events);
                Ok(())
            }
        }
    }

    // ===== shared =====

    /// Full reset: fresh island, full health, no progress, narration from
    /// the first line.
    fn restart(&mut self, events: &mut Vec<SessionEvent>) -> Result<()> {
        let generation = self.generation + 1;
        let world = generate_world_for(&self.config, self.seed, generation)?;

        self.generation = generation;
        self.position = world.spawn;
        self.world = world;
        self.player = self.config.player;
        self.player.reset();
        self.complete = false;
        info!(
            "Session restarted: generation={}, spawn {}, goal {}",
            generation, self.world.spawn, self.world.goal
        );

        events.push(SessionEvent::Restarted { generation });
        events.push(SessionEvent::world_generated(&self.world));
        self.enter_narration(events);
        Ok(())
    }

    fn set_mode(&mut self, to: Mode, events: &mut Vec<SessionEvent>) {
        let from = self.mode;
        if from == to {
            return;
        }
        self.mode = to;
        info!("Mode {} -> {}", from, to);
        events.push(SessionEvent::ModeChanged { from, to });
    }

    fn ignore(&self, command: Command) {
        debug!("Command {:?} ignored in {} mode", command, self.mode);
    }
}

fn generate_world_for(config: &GameConfig, seed: u64, generation: u64) -> Result<World> {
    let mut rng = PcgRng::seeded(compute_seed(seed, generation, stream::TERRAIN));
    Ok(generate(
        config.width,
        config.height,
        &config.generation,
        &mut rng,
    )?)
}
