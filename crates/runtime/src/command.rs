//! Abstract player commands accepted by the session.
//!
//! Input decoding (keys, text, buttons) lives in the clients; they translate
//! whatever they read into a [`Command`].

use game_core::Direction;
use serde::{Deserialize, Serialize};

/// Session mode. Exactly one is active at a time.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mode {
    #[default]
    Narration,
    Exploration,
    Combat,
}

/// One player input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum Command {
    Move(Direction),
    /// Advance narration, acknowledge a finished fight, accept a restart.
    Confirm,
    /// Back out of an encounter; same as [`Command::Run`].
    Cancel,
    Run,
    Attack,
    ToggleDebug,
    Restart,
    Debug(DebugOverride),
}

/// Developer overrides. Only honoured while debug mode is on, and always
/// clamped or validated before they touch state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DebugOverride {
    /// Teleport; coordinates are clamped into the grid and the target must
    /// be walkable.
    SetPosition { x: i32, y: i32 },
    /// Current HP, clamped to `0..=max_hp`.
    SetHp { hp: u32 },
    /// Global encounter multiplier, clamped to a non-negative finite range.
    SetEncounterMultiplier { multiplier: f64 },
    /// Jump straight into a mode without restarting.
    EnterMode { mode: Mode },
    /// End the current fight as a win (rewards granted).
    ForceWin,
    /// End the current fight as a retreat.
    ForceFlee,
}
