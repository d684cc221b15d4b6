//! Photo-evidence verification.
//!
//! Photos cannot be adjudicated automatically. With a moderator decision in
//! the evidence the kill resolves; with only a photo it escalates to human
//! review.

use crate::strategy::{Evidence, VerificationStrategy};
use crate::Verdict;
use manhunt_store::Kill;
use manhunt_types::{PlayerId, VerificationMethod};

/// Evidence key carrying a moderator's decision: `approved` or `rejected`.
pub const MODERATOR_DECISION_KEY: &str = "moderator_decision";
/// Evidence key carrying the uploaded photo location.
pub const PHOTO_URL_KEY: &str = "photo_url";

pub struct PhotoStrategy;

impl VerificationStrategy for PhotoStrategy {
    fn method(&self) -> VerificationMethod {
        VerificationMethod::Photo
    }

    fn verify(&self, kill: &Kill, evidence: &Evidence, verifier: &PlayerId) -> Verdict {
        if let Some(decision) = evidence.get(MODERATOR_DECISION_KEY) {
            return match decision.as_str() {
                "approved" => Verdict::verified(format!("approved by moderator {verifier}")),
                "rejected" => Verdict::rejected(format!("rejected by moderator {verifier}")),
                other => Verdict::rejected(format!("unrecognized moderator decision '{other}'")),
            };
        }
        if evidence.contains_key(PHOTO_URL_KEY)
            || kill.verification_data.contains_key(PHOTO_URL_KEY)
        {
            Verdict::pending_review("photo evidence awaiting moderator review")
        } else {
            Verdict::rejected("no photo evidence submitted")
        }
    }
}
