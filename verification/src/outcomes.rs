//! Verdict types produced by verification strategies.

use manhunt_types::VerificationStatus;

/// A strategy's judgement of a kill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Evidence checks out.
    Verified,
    /// Evidence contradicts the claim.
    Rejected,
    /// Needs human moderation.
    PendingReview,
}

impl VerificationOutcome {
    /// The kill status this verdict transitions the record into.
    pub fn as_status(&self) -> VerificationStatus {
        match self {
            Self::Verified => VerificationStatus::Verified,
            Self::Rejected => VerificationStatus::Rejected,
            Self::PendingReview => VerificationStatus::PendingReview,
        }
    }
}

/// Outcome plus free-text notes written into the kill record.
#[derive(Clone, Debug)]
pub struct Verdict {
    pub outcome: VerificationOutcome,
    pub notes: String,
}

impl Verdict {
    pub fn verified(notes: impl Into<String>) -> Self {
        Self {
            outcome: VerificationOutcome::Verified,
            notes: notes.into(),
        }
    }

    pub fn rejected(notes: impl Into<String>) -> Self {
        Self {
            outcome: VerificationOutcome::Rejected,
            notes: notes.into(),
        }
    }

    pub fn pending_review(notes: impl Into<String>) -> Self {
        Self {
            outcome: VerificationOutcome::PendingReview,
            notes: notes.into(),
        }
    }
}
