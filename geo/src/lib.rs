//! Geometry contracts consumed by the kill lifecycle engine.
//!
//! Boundary and safe-zone evaluation are external collaborators: the engine
//! asks yes/no questions about points and never implements the geometry
//! itself.

use manhunt_types::{Coordinate, GameId};

/// Point-in-polygon oracle for game boundaries.
pub trait BoundaryChecker: Send + Sync {
    /// Whether `point` lies inside the polygon described by `boundary`.
    ///
    /// Never called with an empty boundary — an empty boundary means the
    /// game is unbounded and the engine skips the check entirely.
    fn is_point_in_boundary(&self, point: &Coordinate, boundary: &[Coordinate]) -> bool;
}

/// Safe-zone oracle.
pub trait SafeZoneChecker: Send + Sync {
    /// Whether `point` is currently inside an active safe zone of `game`.
    fn is_location_in_safe_zone(&self, game: &GameId, point: &Coordinate) -> bool;
}
