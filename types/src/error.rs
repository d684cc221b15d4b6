//! Shared error taxonomy for the Manhunt engine.
//!
//! `Validation` and the not-found variants are checked eagerly and abort
//! before any mutation. `SafeZone` is kept distinct from `Validation` so
//! callers can message game-rule violations differently from malformed
//! requests.

use thiserror::Error;

/// Common error type across the engine and verification crates.
#[derive(Debug, Error)]
pub enum ManhuntError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("player not found: {0}")]
    PlayerNotFound(String),

    #[error("game not found: {0}")]
    GameNotFound(String),

    #[error("kill not found: {0}")]
    KillNotFound(String),

    #[error("action not allowed: {0}")]
    ActionNotAllowed(String),

    #[error("invalid game state: {0}")]
    InvalidGameState(String),

    #[error("safe zone violation: {0}")]
    SafeZone(String),

    #[error("storage error: {0}")]
    Storage(String),
}
