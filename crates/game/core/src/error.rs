//! Shared error classification.
//!
//! Domain errors (`GenerationError`, `CombatError`, `CatalogError`) live next
//! to the operations that raise them and report an [`ErrorSeverity`], so
//! callers can decide how to react without matching every variant.
//!
//! Invalid player commands (walking into water, attacking outside combat)
//! are not errors at all; the session ignores them.

/// How bad an error is for the session that raised it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Call rejected, state untouched.
    ///
    /// Examples: resolving a round with no combat in progress
    Validation,

    /// Unexpected state inconsistency inside the session.
    Internal,

    /// The session cannot be built or continued.
    ///
    /// Examples: grid too small to hold any land, empty enemy catalog
    Fatal,
}

impl ErrorSeverity {
    /// Whether the caller may keep using the session after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all game errors.
///
/// Implementors derive `thiserror::Error` for `Display` and classify
/// severity by whether the session is still usable, not by impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for log fields and assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
