//! Nullable stores — thread-safe in-memory storage honoring the guarded
//! write contracts.

use manhunt_store::{
    Game, GameStore, Kill, KillStore, Player, PlayerGuard, PlayerStore, StoreError,
};
use manhunt_types::{GameId, PlayerId, Timestamp, VerificationStatus};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory player store for testing.
/// Thread-safe so multiple engine instances can share one in a test.
pub struct NullPlayerStore {
    players: Mutex<HashMap<String, Player>>,
}

impl NullPlayerStore {
    pub fn new() -> Self {
        Self {
            players: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullPlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStore for NullPlayerStore {
    fn get_player(&self, id: &PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.players.lock().unwrap().get(id.as_str()).cloned())
    }

    fn put_player(&self, player: &Player) -> Result<(), StoreError> {
        self.players
            .lock()
            .unwrap()
            .insert(player.id.to_string(), player.clone());
        Ok(())
    }

    fn put_player_guarded(&self, player: &Player, guard: &PlayerGuard) -> Result<(), StoreError> {
        let mut players = self.players.lock().unwrap();
        let satisfied = match players.get(player.id.as_str()) {
            Some(stored) => match guard {
                PlayerGuard::StatusIs(status) => stored.status == *status,
                PlayerGuard::TargetIs(target) => stored.target_id.as_ref() == Some(target),
            },
            None => false,
        };
        if !satisfied {
            return Err(StoreError::ConditionFailed(format!(
                "stored player {} no longer satisfies the write guard",
                player.id
            )));
        }
        players.insert(player.id.to_string(), player.clone());
        Ok(())
    }

    fn increment_kill_count(&self, id: &PlayerId) -> Result<(), StoreError> {
        match self.players.lock().unwrap().get_mut(id.as_str()) {
            Some(player) => {
                player.kill_count += 1;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}

/// An in-memory game store for testing.
pub struct NullGameStore {
    games: Mutex<HashMap<String, Game>>,
}

impl NullGameStore {
    pub fn new() -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullGameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore for NullGameStore {
    fn get_game(&self, id: &GameId) -> Result<Option<Game>, StoreError> {
        Ok(self.games.lock().unwrap().get(id.as_str()).cloned())
    }

    fn put_game(&self, game: &Game) -> Result<(), StoreError> {
        self.games
            .lock()
            .unwrap()
            .insert(game.id.to_string(), game.clone());
        Ok(())
    }
}

/// An in-memory kill store for testing, keyed by (killer, time).
pub struct NullKillStore {
    kills: Mutex<HashMap<(String, u64), Kill>>,
}

impl NullKillStore {
    pub fn new() -> Self {
        Self {
            kills: Mutex::new(HashMap::new()),
        }
    }

    pub fn kill_count(&self) -> usize {
        self.kills.lock().unwrap().len()
    }

    fn key(kill: &Kill) -> (String, u64) {
        (kill.killer_id.to_string(), kill.time.as_millis())
    }
}

impl Default for NullKillStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KillStore for NullKillStore {
    fn put_kill(&self, kill: &Kill) -> Result<(), StoreError> {
        self.kills
            .lock()
            .unwrap()
            .insert(Self::key(kill), kill.clone());
        Ok(())
    }

    fn put_kill_guarded(
        &self,
        kill: &Kill,
        expected: VerificationStatus,
    ) -> Result<(), StoreError> {
        let mut kills = self.kills.lock().unwrap();
        match kills.get(&Self::key(kill)) {
            Some(stored) if stored.verification_status == expected => {
                kills.insert(Self::key(kill), kill.clone());
                Ok(())
            }
            Some(stored) => Err(StoreError::ConditionFailed(format!(
                "stored kill status is {}, expected {expected}",
                stored.verification_status
            ))),
            None => Err(StoreError::ConditionFailed(
                "no stored kill to transition".to_string(),
            )),
        }
    }

    fn get_kill(&self, killer: &PlayerId, time: Timestamp) -> Result<Option<Kill>, StoreError> {
        Ok(self
            .kills
            .lock()
            .unwrap()
            .get(&(killer.to_string(), time.as_millis()))
            .cloned())
    }

    fn kills_by_killer(&self, killer: &PlayerId) -> Result<Vec<Kill>, StoreError> {
        Ok(self
            .kills
            .lock()
            .unwrap()
            .values()
            .filter(|k| &k.killer_id == killer)
            .cloned()
            .collect())
    }

    fn kills_by_victim(&self, victim: &PlayerId) -> Result<Vec<Kill>, StoreError> {
        Ok(self
            .kills
            .lock()
            .unwrap()
            .values()
            .filter(|k| &k.victim_id == victim)
            .cloned()
            .collect())
    }

    fn kills_by_game(&self, game: &GameId) -> Result<Vec<Kill>, StoreError> {
        Ok(self
            .kills
            .lock()
            .unwrap()
            .values()
            .filter(|k| k.game_id.as_ref() == Some(game))
            .cloned()
            .collect())
    }

    fn recent_kills(&self, limit: usize) -> Result<Vec<Kill>, StoreError> {
        let mut all: Vec<Kill> = self.kills.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| b.time.cmp(&a.time));
        all.truncate(limit);
        Ok(all)
    }

    fn all_kills(&self) -> Result<Vec<Kill>, StoreError> {
        Ok(self.kills.lock().unwrap().values().cloned().collect())
    }

    fn kill_by_victim_and_game(
        &self,
        victim: &PlayerId,
        game: &GameId,
    ) -> Result<Option<Kill>, StoreError> {
        Ok(self
            .kills
            .lock()
            .unwrap()
            .values()
            .find(|k| &k.victim_id == victim && k.game_id.as_ref() == Some(game))
            .cloned())
    }
}
