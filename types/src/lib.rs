//! Fundamental types for the Manhunt engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: player and game ids, coordinates, timestamps, status enums, the
//! verification method enum, and the shared error taxonomy.

pub mod error;
pub mod geo;
pub mod id;
pub mod method;
pub mod state;
pub mod time;

pub use error::ManhuntError;
pub use geo::Coordinate;
pub use id::{GameId, PlayerId};
pub use method::{UnknownMethod, VerificationMethod};
pub use state::{GameStatus, PlayerStatus, VerificationStatus};
pub use time::Timestamp;
