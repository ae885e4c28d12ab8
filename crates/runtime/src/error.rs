//! Errors surfaced by the session controller.
//!
//! Rejected player input is not an error: the session ignores it. What
//! remains are configuration failures and internal contract violations.
use thiserror::Error;

use game_core::{CombatError, ErrorSeverity, GameError, GenerationError};

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("failed to generate island")]
    Generation(#[from] GenerationError),

    #[error("combat resolver rejected the call")]
    Combat(#[from] CombatError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Generation(e) => e.severity(),
            // The session only calls the resolver in the matching phase.
            Self::Combat(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Generation(e) => e.error_code(),
            Self::Combat(e) => e.error_code(),
        }
    }
}
