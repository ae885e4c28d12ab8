//! Events emitted by the session for presentation layers.
//!
//! Every [`Session::handle`](crate::Session::handle) call returns the events
//! it produced, in order. Clients render them however they like; the session
//! never waits on presentation.

use game_core::{CombatLog, CombatOutcome, Position, Rewards, TileKind, World};
use serde::{Deserialize, Serialize};

use crate::command::{DebugOverride, Mode};

/// One line of combat text, revealed by the client at its own pace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayLine(pub String);

impl DisplayLine {
    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn from_log(log: &CombatLog) -> Vec<Self> {
        log.lines().iter().cloned().map(Self).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    NarrationLine {
        index: usize,
        text: String,
    },

    ModeChanged {
        from: Mode,
        to: Mode,
    },

    PlayerMoved {
        from: Position,
        to: Position,
        tile: TileKind,
    },

    EncounterStarted {
        template_id: String,
        enemy: String,
        enemy_hp: u32,
        lines: Vec<DisplayLine>,
    },

    CombatRound {
        /// Rounds completed so far in this encounter.
        turn: u32,
        lines: Vec<DisplayLine>,
        player_hp: u32,
        enemy_hp: u32,
    },

    CombatEnded {
        outcome: CombatOutcome,
        rewards: Option<Rewards>,
    },

    /// The goal was reached. `Confirm` restarts.
    SessionComplete {
        xp: u32,
        gold: u32,
    },

    /// The player fell. `Confirm` restarts.
    Defeated {
        xp: u32,
        gold: u32,
    },

    Restarted {
        generation: u64,
    },

    WorldGenerated {
        width: u32,
        height: u32,
        spawn: Position,
        goal: Position,
        /// Hex-encoded SHA-256 of the world.
        fingerprint: String,
    },

    DebugToggled {
        enabled: bool,
    },

    /// An override was accepted, with the values actually applied.
    DebugApplied {
        change: DebugOverride,
    },
}

impl SessionEvent {
    pub(crate) fn world_generated(world: &World) -> Self {
        let dims = world.dimensions();
        Self::WorldGenerated {
            width: dims.width,
            height: dims.height,
            spawn: world.spawn,
            goal: world.goal,
            fingerprint: hex::encode(world.fingerprint()),
        }
    }

    /// Short snake_case tag, matching the serialized `event` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NarrationLine { .. } => "narration_line",
            Self::ModeChanged { .. } => "mode_changed",
            Self::PlayerMoved { .. } => "player_moved",
            Self::EncounterStarted { .. } => "encounter_started",
            Self::CombatRound { .. } => "combat_round",
            Self::CombatEnded { .. } => "combat_ended",
            Self::SessionComplete { .. } => "session_complete",
            Self::Defeated { .. } => "defeated",
            Self::Restarted { .. } => "restarted",
            Self::WorldGenerated { .. } => "world_generated",
            Self::DebugToggled { .. } => "debug_toggled",
            Self::DebugApplied { .. } => "debug_applied",
        }
    }
}
