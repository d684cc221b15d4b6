//! Kill lifecycle engine.
//!
//! Owns the rules by which a reported kill is accepted, how acceptance
//! removes the victim from the target cycle and rewires the killer's edge,
//! and death confirmation. Verification of accepted kills lives in
//! `manhunt-verification`.
//!
//! The engine is invoked per request and holds no long-lived state of its
//! own: correctness under concurrent instances comes from the storage
//! layer's conditional writes, not from in-memory locks.

pub mod config;
pub mod lifecycle;
pub mod targets;

pub use config::EngineConfig;
pub use lifecycle::KillLifecycleEngine;
pub use targets::{check_single_cycle, TargetCycleError};
