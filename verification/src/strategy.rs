//! Pluggable per-method verification trait.

use crate::Verdict;
use manhunt_store::Kill;
use manhunt_types::{PlayerId, VerificationMethod};
use std::collections::HashMap;

/// Evidence submitted with a verification request.
pub type Evidence = HashMap<String, String>;

/// A pluggable verification strategy, one per method.
///
/// Strategies are pure judges: they inspect the kill record and the
/// submitted evidence and return a verdict. Persisting the verdict and
/// notifying players is the coordinator's job.
pub trait VerificationStrategy: Send + Sync {
    /// The method this strategy adjudicates.
    fn method(&self) -> VerificationMethod;

    /// Judge the kill against the submitted evidence.
    fn verify(&self, kill: &Kill, evidence: &Evidence, verifier: &PlayerId) -> Verdict;
}
