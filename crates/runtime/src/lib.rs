//! Session orchestration for the island demo.
//!
//! This crate wires the pure rules of `game-core` and the data of
//! `game-content` into a single command-driven [`Session`]. Clients push
//! [`Command`]s in and render the [`SessionEvent`]s that come back.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the controller and its mode handlers
//! - [`command`] defines the abstract inputs
//! - [`events`] defines the presentation-facing output stream
pub mod command;
pub mod error;
pub mod events;
pub mod session;

pub use command::{Command, DebugOverride, Mode};
pub use error::{Result, SessionError};
pub use events::{DisplayLine, SessionEvent};
pub use session::Session;
