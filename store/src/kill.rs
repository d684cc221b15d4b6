//! Kill record and storage trait.

use crate::StoreError;
use manhunt_types::{
    Coordinate, GameId, PlayerId, Timestamp, VerificationMethod, VerificationStatus,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A reported elimination, keyed by (killer, time).
///
/// Created once in `Pending` state and mutated only by verification
/// transitions and death confirmation; never deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Kill {
    pub killer_id: PlayerId,
    pub victim_id: PlayerId,
    /// Reporting timestamp; second half of the composite key.
    pub time: Timestamp,
    /// The game both players belonged to when the kill was accepted. None
    /// only for kills recorded under relaxed validation with no resolvable
    /// killer.
    pub game_id: Option<GameId>,
    pub location: Coordinate,
    pub method: VerificationMethod,
    /// Current verification state. Mutate through
    /// [`Kill::set_verification_status`] so `status_partition` stays equal.
    pub verification_status: VerificationStatus,
    /// Denormalized copy of `verification_status` for status-scoped queries.
    pub status_partition: VerificationStatus,
    /// Free-form evidence payload captured at report time.
    pub verification_data: HashMap<String, String>,
    pub verification_notes: Option<String>,
    pub last_will: Option<String>,
    pub death_confirmed: bool,
}

impl Kill {
    /// A freshly reported kill, awaiting verification.
    #[allow(clippy::too_many_arguments)]
    pub fn reported(
        killer_id: PlayerId,
        victim_id: PlayerId,
        time: Timestamp,
        game_id: Option<GameId>,
        location: Coordinate,
        method: VerificationMethod,
        verification_data: HashMap<String, String>,
    ) -> Self {
        Self {
            killer_id,
            victim_id,
            time,
            game_id,
            location,
            method,
            verification_status: VerificationStatus::Pending,
            status_partition: VerificationStatus::Pending,
            verification_data,
            verification_notes: None,
            last_will: None,
            death_confirmed: false,
        }
    }

    /// Transition the verification state, keeping the partition mirror equal.
    pub fn set_verification_status(&mut self, status: VerificationStatus) {
        self.verification_status = status;
        self.status_partition = status;
    }
}

/// Trait for kill storage operations.
pub trait KillStore: Send + Sync {
    fn put_kill(&self, kill: &Kill) -> Result<(), StoreError>;

    /// Persist `kill` only if the stored record's verification status still
    /// equals `expected`. Guards the verification state machine against a
    /// double-verification race.
    fn put_kill_guarded(
        &self,
        kill: &Kill,
        expected: VerificationStatus,
    ) -> Result<(), StoreError>;

    fn get_kill(&self, killer: &PlayerId, time: Timestamp) -> Result<Option<Kill>, StoreError>;
    fn kills_by_killer(&self, killer: &PlayerId) -> Result<Vec<Kill>, StoreError>;
    fn kills_by_victim(&self, victim: &PlayerId) -> Result<Vec<Kill>, StoreError>;
    fn kills_by_game(&self, game: &GameId) -> Result<Vec<Kill>, StoreError>;
    /// Newest first.
    fn recent_kills(&self, limit: usize) -> Result<Vec<Kill>, StoreError>;
    fn all_kills(&self) -> Result<Vec<Kill>, StoreError>;
    fn kill_by_victim_and_game(
        &self,
        victim: &PlayerId,
        game: &GameId,
    ) -> Result<Option<Kill>, StoreError>;
}
