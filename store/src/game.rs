//! Game record and storage trait.

use crate::StoreError;
use manhunt_types::{Coordinate, GameId, GameStatus};
use serde::{Deserialize, Serialize};

/// An elimination game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub status: GameStatus,
    /// Ordered polygon vertices. Empty means the game is unbounded.
    pub boundary: Vec<Coordinate>,
}

/// Trait for game storage operations.
pub trait GameStore: Send + Sync {
    fn get_game(&self, id: &GameId) -> Result<Option<Game>, StoreError>;
    fn put_game(&self, game: &Game) -> Result<(), StoreError>;
}
