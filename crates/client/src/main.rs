//! Island client binary.
//!
//! Reads one command per line from stdin, feeds it to a [`Session`] and
//! prints the resulting events. Logs go to stderr so stdout stays clean for
//! `ISLE_EVENT_FORMAT=json`.
//!
//! ```bash
//! ISLE_SEED=7 RUST_LOG=runtime=debug cargo run -p isle-client
//! ```

mod config;
mod input;
mod output;

use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use game_content::{ContentFactory, GameContent};
use game_core::GameError;
use runtime::Session;

use crate::config::ClientConfig;
use crate::input::{HELP, Input, parse_line};
use crate::output::Printer;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let content = load_content(&config)?;
    let seed = config.seed.unwrap_or_else(clock_seed);

    tracing::info!("Starting island session: seed={}", seed);
    tracing::info!("Event format: {}", config.format);

    let mut session = Session::new(content, seed)?;
    let mut printer = Printer::stdout(config.format);
    printer.events(&session.opening())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Input::Command(command))) => match session.handle(command) {
                Ok(events) => printer.events(&events)?,
                Err(e) if e.severity().is_recoverable() => {
                    tracing::warn!("Command {:?} failed: {} ({})", command, e, e.error_code());
                }
                Err(e) => return Err(e.into()),
            },
            Ok(Some(Input::Map)) => printer.map(&session)?,
            Ok(Some(Input::Status)) => printer.status(&session)?,
            Ok(Some(Input::Help)) => printer.line(HELP)?,
            Ok(Some(Input::Quit)) => break,
            Err(message) => printer.line(&message)?,
        }
    }

    tracing::info!("Session closed: seed={}, generation={}", seed, session.generation());
    Ok(())
}

fn load_content(config: &ClientConfig) -> Result<GameContent> {
    let mut content = match &config.data_dir {
        Some(dir) => {
            tracing::info!("Loading content from {}", dir.display());
            ContentFactory::new(dir).load()?
        }
        None => ContentFactory::builtin()?,
    };

    if let Some(width) = config.width {
        content.config.width = width;
    }
    if let Some(height) = config.height {
        content.config.height = height;
    }
    Ok(content)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
