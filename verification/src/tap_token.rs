//! Tap-token verification.
//!
//! At report time the killer records the token read from the victim's tag in
//! the kill's verification data; the verifier later submits the token they
//! hold. An exact match verifies the kill.

use crate::strategy::{Evidence, VerificationStrategy};
use crate::Verdict;
use manhunt_store::Kill;
use manhunt_types::{PlayerId, VerificationMethod};

/// Key in the kill's verification data holding the token captured at report
/// time.
pub const EXPECTED_TOKEN_KEY: &str = "expected_token";
/// Key in the submitted evidence holding the verifier's token.
pub const TOKEN_KEY: &str = "token";

pub struct TapTokenStrategy;

impl VerificationStrategy for TapTokenStrategy {
    fn method(&self) -> VerificationMethod {
        VerificationMethod::TapToken
    }

    fn verify(&self, kill: &Kill, evidence: &Evidence, _verifier: &PlayerId) -> Verdict {
        match (
            kill.verification_data.get(EXPECTED_TOKEN_KEY),
            evidence.get(TOKEN_KEY),
        ) {
            (Some(expected), Some(submitted)) if expected == submitted => {
                Verdict::verified("submitted token matches the recorded token")
            }
            (Some(_), Some(_)) => {
                Verdict::rejected("submitted token does not match the recorded token")
            }
            (None, _) => Verdict::rejected("kill carries no recorded token"),
            (_, None) => Verdict::rejected("no token submitted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VerificationOutcome;
    use manhunt_types::{Coordinate, GameId, Timestamp};
    use std::collections::HashMap;

    fn kill_with_token(token: Option<&str>) -> Kill {
        let mut data = HashMap::new();
        if let Some(token) = token {
            data.insert(EXPECTED_TOKEN_KEY.to_string(), token.to_string());
        }
        Kill::reported(
            PlayerId::from("k1"),
            PlayerId::from("v1"),
            Timestamp::new(1000),
            Some(GameId::from("g1")),
            Coordinate::new(1.0, 2.0),
            VerificationMethod::TapToken,
            data,
        )
    }

    fn evidence(token: &str) -> Evidence {
        let mut map = HashMap::new();
        map.insert(TOKEN_KEY.to_string(), token.to_string());
        map
    }

    #[test]
    fn matching_token_verifies() {
        let verdict = TapTokenStrategy.verify(
            &kill_with_token(Some("tag-42")),
            &evidence("tag-42"),
            &PlayerId::from("mod"),
        );
        assert_eq!(verdict.outcome, VerificationOutcome::Verified);
    }

    #[test]
    fn mismatched_token_rejects() {
        let verdict = TapTokenStrategy.verify(
            &kill_with_token(Some("tag-42")),
            &evidence("tag-99"),
            &PlayerId::from("mod"),
        );
        assert_eq!(verdict.outcome, VerificationOutcome::Rejected);
    }

    #[test]
    fn missing_recorded_token_rejects() {
        let verdict = TapTokenStrategy.verify(
            &kill_with_token(None),
            &evidence("tag-42"),
            &PlayerId::from("mod"),
        );
        assert_eq!(verdict.outcome, VerificationOutcome::Rejected);
    }

    #[test]
    fn missing_submitted_token_rejects() {
        let verdict = TapTokenStrategy.verify(
            &kill_with_token(Some("tag-42")),
            &HashMap::new(),
            &PlayerId::from("mod"),
        );
        assert_eq!(verdict.outcome, VerificationOutcome::Rejected);
    }
}
