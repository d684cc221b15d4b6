//! Engine configuration.

/// Construction-time configuration for
/// [`KillLifecycleEngine`](crate::KillLifecycleEngine).
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineConfig {
    /// Skip game-rule validation (player lookups, game state, geofencing,
    /// target matching) and tolerate missing players, for integration
    /// harnesses that seed kills without a full game. The kill record keeps
    /// its normal shape. Never enable outside tests.
    pub relaxed_validation: bool,
}
