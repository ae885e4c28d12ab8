//! Line-oriented input parsing.
//!
//! One line maps to at most one [`Input`]. Words are case-insensitive and
//! extra whitespace is ignored.

use game_core::Direction;
use runtime::{Command, DebugOverride, Mode};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    Command(Command),
    Map,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  n | s | e | w | north | south | east | west   move
  ok | confirm | enter                            advance / accept
  attack | a                                      attack
  run | r                                         run away
  cancel | esc                                    cancel (runs in combat)
  restart                                         start over on a new island
  map                                             print the island
  status                                          print the player record
  debug                                           toggle debug mode
  debug hp <n> | debug pos <x> <y> | debug enc <multiplier>
  debug mode <narration|exploration|combat> | debug win | debug flee
  quit | q                                        exit";

/// Parses one line. Blank lines parse to `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Input>, String> {
    let words: Vec<String> = line.split_whitespace().map(str::to_ascii_lowercase).collect();
    let Some((head, args)) = words.split_first() else {
        return Ok(None);
    };

    let input = match (head.as_str(), args) {
        ("n", []) => Input::Command(Command::Move(Direction::North)),
        ("s", []) => Input::Command(Command::Move(Direction::South)),
        ("e", []) => Input::Command(Command::Move(Direction::East)),
        ("w", []) => Input::Command(Command::Move(Direction::West)),
        ("ok" | "confirm" | "enter", []) => Input::Command(Command::Confirm),
        ("attack" | "a", []) => Input::Command(Command::Attack),
        ("run" | "r", []) => Input::Command(Command::Run),
        ("cancel" | "esc", []) => Input::Command(Command::Cancel),
        ("restart", []) => Input::Command(Command::Restart),
        ("map", []) => Input::Map,
        ("status", []) => Input::Status,
        ("help" | "?", []) => Input::Help,
        ("quit" | "q" | "exit", []) => Input::Quit,
        ("debug", []) => Input::Command(Command::ToggleDebug),
        ("debug", [kind, rest @ ..]) => Input::Command(Command::Debug(parse_debug(kind, rest)?)),
        (word, []) => match word.parse::<Direction>() {
            Ok(direction) => Input::Command(Command::Move(direction)),
            Err(_) => return Err(format!("unknown command '{}' (try 'help')", word)),
        },
        (word, _) => return Err(format!("'{}' takes no arguments", word)),
    };
    Ok(Some(input))
}

fn parse_debug(kind: &str, args: &[String]) -> Result<DebugOverride, String> {
    let change = match (kind, args) {
        ("hp", [hp]) => DebugOverride::SetHp { hp: number(hp)? },
        ("pos", [x, y]) => DebugOverride::SetPosition {
            x: number(x)?,
            y: number(y)?,
        },
        ("enc", [multiplier]) => DebugOverride::SetEncounterMultiplier {
            multiplier: number(multiplier)?,
        },
        ("mode", [mode]) => DebugOverride::EnterMode {
            mode: mode
                .parse::<Mode>()
                .map_err(|_| format!("unknown mode '{}'", mode))?,
        },
        ("win", []) => DebugOverride::ForceWin,
        ("flee", []) => DebugOverride::ForceFlee,
        _ => return Err(format!("bad debug command '{} {}'", kind, args.join(" "))),
    };
    Ok(change)
}

fn number<T: std::str::FromStr>(word: &str) -> Result<T, String> {
    word.parse().map_err(|_| format!("'{}' is not a valid number", word))
}
