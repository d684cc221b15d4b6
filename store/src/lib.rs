//! Abstract storage traits for the Manhunt engine.
//!
//! Every storage backend (a document store in production, in-memory for
//! testing) implements these traits. The rest of the workspace depends only
//! on the traits. Conditional writes carry the race rules: player and kill
//! mutations that lose a race fail with [`StoreError::ConditionFailed`]
//! instead of silently overwriting state.

pub mod error;
pub mod game;
pub mod kill;
pub mod player;

pub use error::StoreError;
pub use game::{Game, GameStore};
pub use kill::{Kill, KillStore};
pub use player::{Player, PlayerGuard, PlayerStore};
