//! Player record and storage trait.

use crate::StoreError;
use manhunt_types::{GameId, PlayerId, PlayerStatus};
use serde::{Deserialize, Serialize};

/// A participant in an elimination game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub game_id: Option<GameId>,
    pub status: PlayerStatus,
    /// The player this player must eliminate. While Active and non-null it
    /// references another Active player in the same game; None once Dead.
    pub target_id: Option<PlayerId>,
    pub secret: Option<String>,
    pub target_secret: Option<String>,
    pub display_name: String,
    pub kill_count: u32,
}

impl Player {
    /// Retire this player: Dead, no target, no secrets.
    ///
    /// Returns the target held at the moment of death, which the killer
    /// inherits.
    pub fn eliminate(&mut self) -> Option<PlayerId> {
        self.status = PlayerStatus::Dead;
        self.secret = None;
        self.target_secret = None;
        self.target_id.take()
    }
}

/// Required current stored state for a conditional player write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerGuard {
    /// The stored record's status must equal this value.
    StatusIs(PlayerStatus),
    /// The stored record's target must equal this player.
    TargetIs(PlayerId),
}

/// Trait for player storage operations.
pub trait PlayerStore: Send + Sync {
    fn get_player(&self, id: &PlayerId) -> Result<Option<Player>, StoreError>;
    fn put_player(&self, player: &Player) -> Result<(), StoreError>;

    /// Persist `player` only if the stored record still satisfies `guard`.
    ///
    /// Fails with [`StoreError::ConditionFailed`] when the stored state has
    /// moved on — a concurrent engine instance won the race. A missing
    /// stored record also fails the guard.
    fn put_player_guarded(&self, player: &Player, guard: &PlayerGuard) -> Result<(), StoreError>;

    /// Bump the player's kill counter. Backends without counter support keep
    /// the no-op default.
    fn increment_kill_count(&self, _id: &PlayerId) -> Result<(), StoreError> {
        Ok(())
    }
}
