//! State enums for players, games, and kill verification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a player is still in the running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerStatus {
    /// Alive, holding a target, and a valid target for someone else.
    Active,
    /// Eliminated. No target, no secrets.
    Dead,
}

impl PlayerStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Dead => "DEAD",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Created but not yet started.
    Pending,
    /// In progress. Kills are only accepted in this state.
    Active,
    /// Finished normally.
    Completed,
    /// Aborted before completion.
    Cancelled,
}

impl GameStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verification state machine of a kill record.
///
/// Created as `Pending`; a strategy verdict moves it to `Verified`,
/// `Rejected`, or `PendingReview` (escalation to a human moderator, from
/// which a later verdict still applies).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Awaiting a verification verdict.
    Pending,
    /// Escalated for human moderation.
    PendingReview,
    /// Evidence accepted; the kill stands.
    Verified,
    /// Evidence rejected.
    Rejected,
}

impl VerificationStatus {
    /// Whether a verification verdict may still be applied.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::PendingReview)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::PendingReview => "PENDING_REVIEW",
            Self::Verified => "VERIFIED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&VerificationStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&VerificationStatus::PendingReview).unwrap(),
            "\"PENDING_REVIEW\""
        );
        assert_eq!(
            serde_json::to_string(&VerificationStatus::Verified).unwrap(),
            "\"VERIFIED\""
        );
        assert_eq!(
            serde_json::to_string(&VerificationStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }

    #[test]
    fn verification_status_open_only_before_verdict() {
        assert!(VerificationStatus::Pending.is_open());
        assert!(VerificationStatus::PendingReview.is_open());
        assert!(!VerificationStatus::Verified.is_open());
        assert!(!VerificationStatus::Rejected.is_open());
    }

    #[test]
    fn player_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&PlayerStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&PlayerStatus::Dead).unwrap(),
            "\"DEAD\""
        );
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(VerificationStatus::PendingReview.to_string(), "PENDING_REVIEW");
        assert_eq!(GameStatus::Cancelled.to_string(), "CANCELLED");
    }
}
