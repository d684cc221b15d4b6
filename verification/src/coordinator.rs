//! Verification coordinator — resolves open kills through the strategy
//! matching their declared method and applies the resulting state
//! transition.

use crate::strategy::Evidence;
use crate::{StrategyRegistry, VerificationOutcome};
use manhunt_notify::{Notification, NotificationSink};
use manhunt_store::{Kill, KillStore, PlayerStore, StoreError};
use manhunt_types::{ManhuntError, PlayerId, Timestamp};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

pub struct VerificationCoordinator {
    kills: Arc<dyn KillStore>,
    players: Arc<dyn PlayerStore>,
    notifier: Arc<dyn NotificationSink>,
    registry: StrategyRegistry,
}

impl VerificationCoordinator {
    pub fn new(
        kills: Arc<dyn KillStore>,
        players: Arc<dyn PlayerStore>,
        notifier: Arc<dyn NotificationSink>,
        registry: StrategyRegistry,
    ) -> Self {
        Self {
            kills,
            players,
            notifier,
            registry,
        }
    }

    /// Apply a verification verdict to the kill identified by its composite
    /// key.
    ///
    /// Allowed only while the kill's verification status is still open
    /// (`PENDING` or `PENDING_REVIEW`). The verdict and its notes are
    /// persisted through a conditional write guarded by the prior status, so
    /// two verifiers racing on the same kill resolve it exactly once. Iff
    /// the verdict is `VERIFIED`, the killer is notified; a failed
    /// notification never affects the persisted kill.
    pub fn verify_kill(
        &self,
        killer_id: &PlayerId,
        kill_time: Timestamp,
        verifier_id: &PlayerId,
        evidence: &Evidence,
    ) -> Result<Kill, ManhuntError> {
        let mut kill = self.kills.get_kill(killer_id, kill_time)?.ok_or_else(|| {
            ManhuntError::KillNotFound(format!("no kill for killer {killer_id} at {kill_time}"))
        })?;

        if !kill.verification_status.is_open() {
            return Err(ManhuntError::ActionNotAllowed(format!(
                "kill is not pending verification, current status: {}",
                kill.verification_status
            )));
        }

        let strategy = self.registry.get(kill.method).ok_or_else(|| {
            ManhuntError::ActionNotAllowed(format!(
                "no verification strategy registered for method {}",
                kill.method
            ))
        })?;

        info!(
            killer = %kill.killer_id,
            time = %kill.time,
            verifier = %verifier_id,
            method = %kill.method,
            "verifying kill"
        );

        let verdict = strategy.verify(&kill, evidence, verifier_id);

        let prior = kill.verification_status;
        kill.set_verification_status(verdict.outcome.as_status());
        kill.verification_notes = Some(verdict.notes.clone());

        match self.kills.put_kill_guarded(&kill, prior) {
            Ok(()) => {}
            Err(StoreError::ConditionFailed(_)) => {
                return Err(ManhuntError::ActionNotAllowed(
                    "kill was verified concurrently".to_string(),
                ));
            }
            Err(other) => return Err(other.into()),
        }

        info!(
            killer = %kill.killer_id,
            time = %kill.time,
            status = %kill.verification_status,
            notes = %verdict.notes,
            "verification resolved"
        );

        if verdict.outcome == VerificationOutcome::Verified {
            self.notify_kill_verified(&kill);
        }

        Ok(kill)
    }

    /// Best-effort KILL_VERIFIED push to the killer. Failures are logged and
    /// swallowed; the committed verification must not be affected.
    fn notify_kill_verified(&self, kill: &Kill) {
        let killer = self.players.get_player(&kill.killer_id).ok().flatten();
        let victim = self.players.get_player(&kill.victim_id).ok().flatten();

        let victim_name = victim
            .map(|v| v.display_name)
            .unwrap_or_else(|| kill.victim_id.to_string());
        let new_target = killer.and_then(|k| k.target_id);
        let message = format!(
            "Your kill of {victim_name} has been verified! Your new target is {}.",
            new_target
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_else(|| "being assigned".to_string())
        );

        let mut data = HashMap::new();
        data.insert(
            "kill_id".to_string(),
            format!("{}_{}", kill.killer_id, kill.time.as_millis()),
        );
        data.insert("killer_id".to_string(), kill.killer_id.to_string());
        data.insert("victim_id".to_string(), kill.victim_id.to_string());
        data.insert("verification_method".to_string(), kill.method.to_string());
        data.insert(
            "new_target_id".to_string(),
            new_target.map(|t| t.to_string()).unwrap_or_default(),
        );

        let notification = Notification {
            recipient: kill.killer_id.clone(),
            kind: "KILL_VERIFIED".to_string(),
            message,
            data,
        };

        if let Err(err) = self.notifier.send(notification) {
            error!(
                killer = %kill.killer_id,
                time = %kill.time,
                error = %err,
                "failed to send KILL_VERIFIED notification"
            );
        } else {
            info!(killer = %kill.killer_id, "sent KILL_VERIFIED notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::MODERATOR_DECISION_KEY;
    use crate::proximity::{LATITUDE_KEY, LONGITUDE_KEY};
    use manhunt_nullables::{NullKillStore, NullPlayerStore, RecordingSink};
    use manhunt_store::Player;
    use manhunt_types::{
        Coordinate, GameId, PlayerStatus, VerificationMethod, VerificationStatus,
    };

    fn seeded_players() -> Arc<NullPlayerStore> {
        let players = Arc::new(NullPlayerStore::new());
        players
            .put_player(&Player {
                id: PlayerId::from("k1"),
                game_id: Some(GameId::from("g1")),
                status: PlayerStatus::Active,
                // Already reassigned by the lifecycle engine at report time.
                target_id: Some(PlayerId::from("t1")),
                secret: Some("hush".to_string()),
                target_secret: Some("mark".to_string()),
                display_name: "Killer One".to_string(),
                kill_count: 1,
            })
            .unwrap();
        players
            .put_player(&Player {
                id: PlayerId::from("v1"),
                game_id: Some(GameId::from("g1")),
                status: PlayerStatus::Dead,
                target_id: None,
                secret: None,
                target_secret: None,
                display_name: "Victim One".to_string(),
                kill_count: 0,
            })
            .unwrap();
        players
    }

    fn pending_kill(method: VerificationMethod) -> Kill {
        Kill::reported(
            PlayerId::from("k1"),
            PlayerId::from("v1"),
            Timestamp::new(5000),
            Some(GameId::from("g1")),
            Coordinate::new(0.0, 0.0),
            method,
            HashMap::new(),
        )
    }

    fn coordinator(
        kills: Arc<NullKillStore>,
        sink: Arc<RecordingSink>,
        registry: StrategyRegistry,
    ) -> VerificationCoordinator {
        VerificationCoordinator::new(kills, seeded_players(), sink, registry)
    }

    fn proximity_evidence() -> Evidence {
        let mut evidence = HashMap::new();
        evidence.insert(LATITUDE_KEY.to_string(), "0.0".to_string());
        evidence.insert(LONGITUDE_KEY.to_string(), "0.0".to_string());
        evidence
    }

    #[test]
    fn missing_kill_is_not_found() {
        let coordinator = coordinator(
            Arc::new(NullKillStore::new()),
            Arc::new(RecordingSink::new()),
            StrategyRegistry::with_defaults(),
        );
        let result = coordinator.verify_kill(
            &PlayerId::from("k1"),
            Timestamp::new(5000),
            &PlayerId::from("mod"),
            &HashMap::new(),
        );
        assert!(matches!(result, Err(ManhuntError::KillNotFound(_))));
    }

    #[test]
    fn closed_kill_is_action_not_allowed() {
        let kills = Arc::new(NullKillStore::new());
        let mut kill = pending_kill(VerificationMethod::Proximity);
        kill.set_verification_status(VerificationStatus::Verified);
        kills.put_kill(&kill).unwrap();

        let coordinator = coordinator(
            kills.clone(),
            Arc::new(RecordingSink::new()),
            StrategyRegistry::with_defaults(),
        );
        let result = coordinator.verify_kill(
            &PlayerId::from("k1"),
            Timestamp::new(5000),
            &PlayerId::from("mod"),
            &proximity_evidence(),
        );
        match result {
            Err(ManhuntError::ActionNotAllowed(msg)) => assert!(msg.contains("VERIFIED")),
            other => panic!("expected ActionNotAllowed, got {other:?}"),
        }
        // Unchanged in the store.
        let stored = kills
            .get_kill(&PlayerId::from("k1"), Timestamp::new(5000))
            .unwrap()
            .unwrap();
        assert_eq!(stored.verification_status, VerificationStatus::Verified);
        assert!(stored.verification_notes.is_none());
    }

    #[test]
    fn unregistered_method_is_action_not_allowed() {
        let kills = Arc::new(NullKillStore::new());
        kills.put_kill(&pending_kill(VerificationMethod::Photo)).unwrap();

        let coordinator = coordinator(
            kills,
            Arc::new(RecordingSink::new()),
            StrategyRegistry::empty(),
        );
        let result = coordinator.verify_kill(
            &PlayerId::from("k1"),
            Timestamp::new(5000),
            &PlayerId::from("mod"),
            &HashMap::new(),
        );
        match result {
            Err(ManhuntError::ActionNotAllowed(msg)) => assert!(msg.contains("PHOTO")),
            other => panic!("expected ActionNotAllowed, got {other:?}"),
        }
    }

    #[test]
    fn verified_kill_updates_partition_and_notifies_once() {
        let kills = Arc::new(NullKillStore::new());
        kills
            .put_kill(&pending_kill(VerificationMethod::Proximity))
            .unwrap();
        let sink = Arc::new(RecordingSink::new());

        let coordinator = coordinator(kills.clone(), sink.clone(), StrategyRegistry::with_defaults());
        let kill = coordinator
            .verify_kill(
                &PlayerId::from("k1"),
                Timestamp::new(5000),
                &PlayerId::from("mod"),
                &proximity_evidence(),
            )
            .unwrap();

        assert_eq!(kill.verification_status, VerificationStatus::Verified);
        assert_eq!(kill.status_partition, VerificationStatus::Verified);
        assert!(kill.verification_notes.is_some());

        let stored = kills
            .get_kill(&PlayerId::from("k1"), Timestamp::new(5000))
            .unwrap()
            .unwrap();
        assert_eq!(stored.status_partition, VerificationStatus::Verified);

        let sent = sink.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, PlayerId::from("k1"));
        assert_eq!(sent[0].kind, "KILL_VERIFIED");
        assert!(sent[0].message.contains("Victim One"));
        assert_eq!(sent[0].data.get("new_target_id").unwrap(), "t1");
    }

    #[test]
    fn sink_failure_leaves_kill_verified() {
        let kills = Arc::new(NullKillStore::new());
        kills
            .put_kill(&pending_kill(VerificationMethod::Proximity))
            .unwrap();

        let coordinator = coordinator(
            kills.clone(),
            Arc::new(RecordingSink::failing()),
            StrategyRegistry::with_defaults(),
        );
        let kill = coordinator
            .verify_kill(
                &PlayerId::from("k1"),
                Timestamp::new(5000),
                &PlayerId::from("mod"),
                &proximity_evidence(),
            )
            .unwrap();
        assert_eq!(kill.verification_status, VerificationStatus::Verified);

        let stored = kills
            .get_kill(&PlayerId::from("k1"), Timestamp::new(5000))
            .unwrap()
            .unwrap();
        assert_eq!(stored.verification_status, VerificationStatus::Verified);
    }

    #[test]
    fn rejected_verdict_records_notes_without_notification() {
        let kills = Arc::new(NullKillStore::new());
        kills
            .put_kill(&pending_kill(VerificationMethod::Proximity))
            .unwrap();
        let sink = Arc::new(RecordingSink::new());

        let coordinator = coordinator(kills, sink.clone(), StrategyRegistry::with_defaults());
        let mut evidence = HashMap::new();
        evidence.insert(LATITUDE_KEY.to_string(), "45.0".to_string());
        evidence.insert(LONGITUDE_KEY.to_string(), "45.0".to_string());
        let kill = coordinator
            .verify_kill(
                &PlayerId::from("k1"),
                Timestamp::new(5000),
                &PlayerId::from("mod"),
                &evidence,
            )
            .unwrap();

        assert_eq!(kill.verification_status, VerificationStatus::Rejected);
        assert!(kill.verification_notes.unwrap().contains("limit"));
        assert!(sink.sent().is_empty());
    }

    #[test]
    fn photo_escalates_then_moderator_resolves() {
        let kills = Arc::new(NullKillStore::new());
        let mut kill = pending_kill(VerificationMethod::Photo);
        kill.verification_data.insert(
            crate::photo::PHOTO_URL_KEY.to_string(),
            "https://cdn/photos/7.jpg".to_string(),
        );
        kills.put_kill(&kill).unwrap();
        let sink = Arc::new(RecordingSink::new());

        let coordinator = coordinator(kills.clone(), sink.clone(), StrategyRegistry::with_defaults());

        let escalated = coordinator
            .verify_kill(
                &PlayerId::from("k1"),
                Timestamp::new(5000),
                &PlayerId::from("v1"),
                &HashMap::new(),
            )
            .unwrap();
        assert_eq!(
            escalated.verification_status,
            VerificationStatus::PendingReview
        );
        assert_eq!(escalated.status_partition, VerificationStatus::PendingReview);
        assert!(sink.sent().is_empty());

        let mut decision = HashMap::new();
        decision.insert(MODERATOR_DECISION_KEY.to_string(), "approved".to_string());
        let resolved = coordinator
            .verify_kill(
                &PlayerId::from("k1"),
                Timestamp::new(5000),
                &PlayerId::from("mod"),
                &decision,
            )
            .unwrap();
        assert_eq!(resolved.verification_status, VerificationStatus::Verified);
        assert_eq!(sink.sent().len(), 1);
    }

    /// A kill store whose reads lag behind its writes, emulating a second
    /// coordinator that resolved the kill between our read and our write.
    struct StaleReadKillStore {
        inner: NullKillStore,
        stale: Kill,
    }

    impl KillStore for StaleReadKillStore {
        fn put_kill(&self, kill: &Kill) -> Result<(), StoreError> {
            self.inner.put_kill(kill)
        }

        fn put_kill_guarded(
            &self,
            kill: &Kill,
            expected: VerificationStatus,
        ) -> Result<(), StoreError> {
            self.inner.put_kill_guarded(kill, expected)
        }

        fn get_kill(
            &self,
            _killer: &PlayerId,
            _time: Timestamp,
        ) -> Result<Option<Kill>, StoreError> {
            Ok(Some(self.stale.clone()))
        }

        fn kills_by_killer(&self, killer: &PlayerId) -> Result<Vec<Kill>, StoreError> {
            self.inner.kills_by_killer(killer)
        }

        fn kills_by_victim(&self, victim: &PlayerId) -> Result<Vec<Kill>, StoreError> {
            self.inner.kills_by_victim(victim)
        }

        fn kills_by_game(&self, game: &GameId) -> Result<Vec<Kill>, StoreError> {
            self.inner.kills_by_game(game)
        }

        fn recent_kills(&self, limit: usize) -> Result<Vec<Kill>, StoreError> {
            self.inner.recent_kills(limit)
        }

        fn all_kills(&self) -> Result<Vec<Kill>, StoreError> {
            self.inner.all_kills()
        }

        fn kill_by_victim_and_game(
            &self,
            victim: &PlayerId,
            game: &GameId,
        ) -> Result<Option<Kill>, StoreError> {
            self.inner.kill_by_victim_and_game(victim, game)
        }
    }

    #[test]
    fn lost_verification_race_is_action_not_allowed() {
        let inner = NullKillStore::new();
        let mut resolved = pending_kill(VerificationMethod::Proximity);
        resolved.set_verification_status(VerificationStatus::Rejected);
        inner.put_kill(&resolved).unwrap();

        let kills = Arc::new(StaleReadKillStore {
            inner,
            stale: pending_kill(VerificationMethod::Proximity),
        });
        let sink = Arc::new(RecordingSink::new());
        let coordinator = VerificationCoordinator::new(
            kills,
            seeded_players(),
            sink.clone(),
            StrategyRegistry::with_defaults(),
        );

        let result = coordinator.verify_kill(
            &PlayerId::from("k1"),
            Timestamp::new(5000),
            &PlayerId::from("mod"),
            &proximity_evidence(),
        );
        assert!(matches!(result, Err(ManhuntError::ActionNotAllowed(_))));
        assert!(sink.sent().is_empty());
    }
}
