//! Target-assignment cycle invariant.
//!
//! Across the active players of a game, the (player → target) edges must
//! form a single cycle: one outgoing and one incoming edge per active
//! player, no self-loops, no fragmentation into sub-cycles. Kill acceptance
//! preserves this by handing the victim's target to the killer; this module
//! makes the invariant checkable.

use manhunt_store::Player;
use manhunt_types::PlayerId;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetCycleError {
    #[error("active player {0} has no target")]
    MissingTarget(PlayerId),

    #[error("active player {0} targets themselves")]
    SelfLoop(PlayerId),

    #[error("player {player} targets {target}, which is not an active player here")]
    InvalidTarget { player: PlayerId, target: PlayerId },

    #[error("player {0} is targeted by more than one player")]
    DuplicateIncoming(PlayerId),

    #[error("target edges form {found} cycles instead of one")]
    Fragmented { found: usize },
}

/// Check that the active players' target edges form exactly one cycle
/// covering all of them.
///
/// Dead players are ignored. A lone survivor targeting themselves is
/// accepted: the two-player cycle collapses to this on the final kill, and
/// ending the game is game management's concern, not the engine's.
pub fn check_single_cycle(players: &[Player]) -> Result<(), TargetCycleError> {
    let active: HashMap<&PlayerId, &Player> = players
        .iter()
        .filter(|p| p.status.is_active())
        .map(|p| (&p.id, p))
        .collect();
    if active.is_empty() {
        return Ok(());
    }

    let mut next: HashMap<&PlayerId, &PlayerId> = HashMap::new();
    let mut incoming: HashMap<&PlayerId, usize> = HashMap::new();
    for player in active.values() {
        let target = player
            .target_id
            .as_ref()
            .ok_or_else(|| TargetCycleError::MissingTarget(player.id.clone()))?;
        if target == &player.id && active.len() > 1 {
            return Err(TargetCycleError::SelfLoop(player.id.clone()));
        }
        if !active.contains_key(target) {
            return Err(TargetCycleError::InvalidTarget {
                player: player.id.clone(),
                target: target.clone(),
            });
        }
        let count = incoming.entry(target).or_insert(0);
        *count += 1;
        if *count > 1 {
            return Err(TargetCycleError::DuplicateIncoming(target.clone()));
        }
        next.insert(&player.id, target);
    }

    // Out-degree and in-degree are both one everywhere, so the edges
    // decompose into disjoint cycles; count them.
    let mut visited: HashSet<&PlayerId> = HashSet::new();
    let mut cycles = 0;
    for start in next.keys() {
        if visited.contains(*start) {
            continue;
        }
        cycles += 1;
        let mut cursor = *start;
        while visited.insert(cursor) {
            cursor = next[&cursor];
        }
    }
    if cycles > 1 {
        return Err(TargetCycleError::Fragmented { found: cycles });
    }
    Ok(())
}
