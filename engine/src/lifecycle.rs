//! Kill reporting, death confirmation, and kill queries.

use crate::EngineConfig;
use manhunt_geo::{BoundaryChecker, SafeZoneChecker};
use manhunt_store::{GameStore, Kill, KillStore, PlayerGuard, PlayerStore, StoreError};
use manhunt_types::{
    Coordinate, GameId, ManhuntError, PlayerId, PlayerStatus, Timestamp, VerificationMethod,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Validates and records kills, owns target reassignment, and manages death
/// confirmation.
///
/// Multiple engine instances may run against the same stores; the victim and
/// killer mutations go through conditional writes so that of two concurrent
/// reports naming the same victim, exactly one succeeds.
pub struct KillLifecycleEngine {
    players: Arc<dyn PlayerStore>,
    games: Arc<dyn GameStore>,
    kills: Arc<dyn KillStore>,
    boundaries: Arc<dyn BoundaryChecker>,
    safe_zones: Arc<dyn SafeZoneChecker>,
    config: EngineConfig,
}

impl KillLifecycleEngine {
    pub fn new(
        players: Arc<dyn PlayerStore>,
        games: Arc<dyn GameStore>,
        kills: Arc<dyn KillStore>,
        boundaries: Arc<dyn BoundaryChecker>,
        safe_zones: Arc<dyn SafeZoneChecker>,
        config: EngineConfig,
    ) -> Self {
        Self {
            players,
            games,
            kills,
            boundaries,
            safe_zones,
            config,
        }
    }

    /// Report a new kill.
    ///
    /// Checks, in order: well-formed ids, a present location, a known
    /// verification method, both players existing and active, same-game
    /// membership, an active game, the boundary (when one is defined), that
    /// the victim is the killer's current target, and that the location is
    /// not inside a safe zone. Each failure aborts before any mutation.
    ///
    /// On acceptance the kill is persisted in `PENDING` state, the victim is
    /// retired, and the killer inherits the victim's former target, which
    /// keeps the target graph a single cycle over the remaining active
    /// players. The kill-count bump afterwards is best-effort.
    pub fn report_kill(
        &self,
        killer_id: &PlayerId,
        victim_id: &PlayerId,
        location: Option<Coordinate>,
        method: &str,
        verification_data: HashMap<String, String>,
    ) -> Result<Kill, ManhuntError> {
        if killer_id.as_str().is_empty() || victim_id.as_str().is_empty() || killer_id == victim_id
        {
            return Err(ManhuntError::Validation(
                "invalid killer or victim id".to_string(),
            ));
        }
        let location = location.ok_or_else(|| {
            ManhuntError::Validation("latitude and longitude are required".to_string())
        })?;
        if method.trim().is_empty() {
            return Err(ManhuntError::Validation(
                "verification method cannot be empty".to_string(),
            ));
        }
        let method: VerificationMethod = method
            .parse()
            .map_err(|err: manhunt_types::UnknownMethod| ManhuntError::Validation(err.to_string()))?;

        if self.config.relaxed_validation {
            return self.report_kill_relaxed(killer_id, victim_id, location, method, verification_data);
        }

        let mut killer = self.players.get_player(killer_id)?.ok_or_else(|| {
            ManhuntError::PlayerNotFound(format!("killer {killer_id} not found"))
        })?;
        let mut victim = self.players.get_player(victim_id)?.ok_or_else(|| {
            ManhuntError::PlayerNotFound(format!("victim {victim_id} not found"))
        })?;

        if !killer.status.is_active() {
            return Err(ManhuntError::ActionNotAllowed(format!(
                "killer {killer_id} is not active in the game"
            )));
        }
        if !victim.status.is_active() {
            return Err(ManhuntError::ActionNotAllowed(format!(
                "victim {victim_id} is not active in the game"
            )));
        }

        let game_id = killer.game_id.clone().ok_or_else(|| {
            ManhuntError::Validation(format!("killer {killer_id} is not associated with a game"))
        })?;
        if victim.game_id.as_ref() != Some(&game_id) {
            return Err(ManhuntError::Validation(
                "killer and victim are not in the same game".to_string(),
            ));
        }

        let game = self
            .games
            .get_game(&game_id)?
            .ok_or_else(|| ManhuntError::GameNotFound(format!("game {game_id} not found")))?;
        if !game.status.is_active() {
            return Err(ManhuntError::InvalidGameState(format!(
                "game {game_id} is not active, cannot report kill"
            )));
        }

        if !game.boundary.is_empty() {
            if !self.boundaries.is_point_in_boundary(&location, &game.boundary) {
                warn!(
                    game = %game_id,
                    latitude = location.latitude,
                    longitude = location.longitude,
                    killer = %killer_id,
                    victim = %victim_id,
                    "kill reported outside game boundary"
                );
                return Err(ManhuntError::Validation(
                    "kill location is outside the defined game boundary".to_string(),
                ));
            }
            debug!(game = %game_id, "kill location is within the game boundary");
        } else {
            debug!(game = %game_id, "no boundary defined, skipping boundary check");
        }

        if killer.target_id.as_ref() != Some(victim_id) {
            return Err(ManhuntError::Validation(format!(
                "reported victim {victim_id} is not the killer's current target"
            )));
        }

        if self.safe_zones.is_location_in_safe_zone(&game_id, &location) {
            return Err(ManhuntError::SafeZone(
                "kill cannot be reported in a safe zone".to_string(),
            ));
        }

        // Accepted: record the kill, then retire the victim and hand their
        // target to the killer.
        let kill = Kill::reported(
            killer_id.clone(),
            victim_id.clone(),
            Timestamp::now(),
            Some(game_id),
            location,
            method,
            verification_data,
        );
        info!(
            killer = %killer_id,
            victim = %victim_id,
            time = %kill.time,
            method = %kill.method,
            "reporting valid kill"
        );
        self.kills.put_kill(&kill)?;

        let inherited_target = victim.eliminate();
        match self
            .players
            .put_player_guarded(&victim, &PlayerGuard::StatusIs(PlayerStatus::Active))
        {
            Ok(()) => {}
            Err(StoreError::ConditionFailed(_)) => {
                return Err(ManhuntError::ActionNotAllowed(format!(
                    "target {victim_id} already eliminated"
                )));
            }
            Err(other) => return Err(other.into()),
        }
        info!(victim = %victim_id, "updated victim status to DEAD");

        killer.target_id = inherited_target.clone();
        match self
            .players
            .put_player_guarded(&killer, &PlayerGuard::TargetIs(victim_id.clone()))
        {
            Ok(()) => {}
            Err(StoreError::ConditionFailed(_)) => {
                return Err(ManhuntError::ActionNotAllowed(format!(
                    "killer {killer_id} no longer targets {victim_id}"
                )));
            }
            Err(other) => return Err(other.into()),
        }
        info!(killer = %killer_id, new_target = ?inherited_target, "reassigned killer target");

        if let Err(err) = self.players.increment_kill_count(killer_id) {
            error!(killer = %killer_id, error = %err, "failed to increment kill count");
        }

        Ok(kill)
    }

    /// Reduced-validation path: the kill keeps its normal shape and missing
    /// players are tolerated. The victim, when present, is still retired so
    /// downstream queries see a consistent record; the killer is left
    /// untouched.
    fn report_kill_relaxed(
        &self,
        killer_id: &PlayerId,
        victim_id: &PlayerId,
        location: Coordinate,
        method: VerificationMethod,
        verification_data: HashMap<String, String>,
    ) -> Result<Kill, ManhuntError> {
        info!(
            killer = %killer_id,
            victim = %victim_id,
            "relaxed validation enabled, skipping game rule checks"
        );
        let game_id = self
            .players
            .get_player(killer_id)
            .ok()
            .flatten()
            .and_then(|k| k.game_id);
        let kill = Kill::reported(
            killer_id.clone(),
            victim_id.clone(),
            Timestamp::now(),
            game_id,
            location,
            method,
            verification_data,
        );
        self.kills.put_kill(&kill)?;

        match self.players.get_player(victim_id) {
            Ok(Some(mut victim)) => {
                victim.eliminate();
                if let Err(err) = self.players.put_player(&victim) {
                    warn!(
                        victim = %victim_id,
                        error = %err,
                        "failed to update victim under relaxed validation (ignored)"
                    );
                }
            }
            Ok(None) => {}
            Err(err) => warn!(
                victim = %victim_id,
                error = %err,
                "failed to load victim under relaxed validation (ignored)"
            ),
        }
        Ok(kill)
    }

    /// Record a dead player's last will on their kill record and mark the
    /// death confirmed.
    pub fn confirm_death(
        &self,
        game_id: &GameId,
        victim_id: &PlayerId,
        last_will: &str,
    ) -> Result<Kill, ManhuntError> {
        let game = self
            .games
            .get_game(game_id)?
            .ok_or_else(|| ManhuntError::GameNotFound(format!("game {game_id} not found")))?;
        if !game.status.is_active() {
            return Err(ManhuntError::InvalidGameState(
                "cannot confirm death in a game that is not active".to_string(),
            ));
        }

        let player = self.players.get_player(victim_id)?.ok_or_else(|| {
            ManhuntError::PlayerNotFound(format!("player {victim_id} not found"))
        })?;
        if player.status != PlayerStatus::Dead {
            warn!(
                player = %victim_id,
                game = %game_id,
                status = %player.status,
                "death confirmation attempted by a player who is not dead"
            );
            return Err(ManhuntError::ActionNotAllowed(
                "cannot confirm death, player status is not DEAD".to_string(),
            ));
        }

        let mut kill = self
            .kills
            .kill_by_victim_and_game(victim_id, game_id)?
            .ok_or_else(|| {
                warn!(victim = %victim_id, game = %game_id, "no kill record for death confirmation");
                ManhuntError::KillNotFound(format!(
                    "no kill record for victim {victim_id} in game {game_id}"
                ))
            })?;

        kill.last_will = Some(last_will.to_string());
        kill.death_confirmed = true;
        self.kills.put_kill(&kill)?;
        Ok(kill)
    }

    pub fn kills_by_killer(&self, killer_id: &PlayerId) -> Result<Vec<Kill>, ManhuntError> {
        debug!(killer = %killer_id, "listing kills by killer");
        Ok(self.kills.kills_by_killer(killer_id)?)
    }

    pub fn kills_by_victim(&self, victim_id: &PlayerId) -> Result<Vec<Kill>, ManhuntError> {
        debug!(victim = %victim_id, "listing kills by victim");
        Ok(self.kills.kills_by_victim(victim_id)?)
    }

    pub fn kills_by_game(&self, game_id: &GameId) -> Result<Vec<Kill>, ManhuntError> {
        debug!(game = %game_id, "listing kills by game");
        Ok(self.kills.kills_by_game(game_id)?)
    }

    /// The most recent kills across all games, newest first.
    pub fn recent_kills(&self, limit: usize) -> Result<Vec<Kill>, ManhuntError> {
        debug!(limit, "listing recent kills");
        Ok(self.kills.recent_kills(limit)?)
    }

    /// Every kill on record. Resource-intensive on large games.
    pub fn all_kills(&self) -> Result<Vec<Kill>, ManhuntError> {
        Ok(self.kills.all_kills()?)
    }

    /// A single kill by its composite key.
    pub fn get_kill(&self, killer_id: &PlayerId, time: Timestamp) -> Result<Kill, ManhuntError> {
        self.kills.get_kill(killer_id, time)?.ok_or_else(|| {
            ManhuntError::KillNotFound(format!("no kill for killer {killer_id} at {time}"))
        })
    }
}
