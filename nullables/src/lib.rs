//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the engine (stores, geometry checkers,
//! notification sink) is abstracted behind a trait. This crate provides
//! test-friendly implementations that:
//! - Hold state in memory
//! - Honor the conditional-write contracts
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod geo;
pub mod notify;
pub mod store;

pub use geo::{NullBoundaryChecker, NullSafeZoneChecker};
pub use notify::RecordingSink;
pub use store::{NullGameStore, NullKillStore, NullPlayerStore};
