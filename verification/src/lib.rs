//! Kill verification.
//!
//! The lifecycle engine records *that* a kill must be verified, not *how*.
//! Each verification method (proximity, tap token, photo) plugs in its own
//! acceptance logic behind [`VerificationStrategy`]; the
//! [`VerificationCoordinator`] dispatches on the method stored in the kill
//! record and owns the resulting state transition and the KILL_VERIFIED
//! notification.

pub mod coordinator;
pub mod outcomes;
pub mod photo;
pub mod proximity;
pub mod registry;
pub mod strategy;
pub mod tap_token;

pub use coordinator::VerificationCoordinator;
pub use outcomes::{Verdict, VerificationOutcome};
pub use photo::PhotoStrategy;
pub use proximity::ProximityStrategy;
pub use registry::StrategyRegistry;
pub use strategy::{Evidence, VerificationStrategy};
pub use tap_token::TapTokenStrategy;
