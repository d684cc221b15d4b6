//! Nullable geometry checkers.

use manhunt_geo::{BoundaryChecker, SafeZoneChecker};
use manhunt_types::{Coordinate, GameId};

enum BoundaryMode {
    Fixed(bool),
    BoundingBox,
}

/// A deterministic boundary oracle.
///
/// Either returns a fixed verdict, or contains points in the axis-aligned
/// bounding box of the polygon's vertices — enough for the rectangular
/// boundaries used in tests, without pulling real geometry into the core.
pub struct NullBoundaryChecker {
    mode: BoundaryMode,
}

impl NullBoundaryChecker {
    /// Every point is inside.
    pub fn accepting() -> Self {
        Self {
            mode: BoundaryMode::Fixed(true),
        }
    }

    /// Every point is outside.
    pub fn rejecting() -> Self {
        Self {
            mode: BoundaryMode::Fixed(false),
        }
    }

    /// Bounding-box containment over the polygon vertices.
    pub fn bounding_box() -> Self {
        Self {
            mode: BoundaryMode::BoundingBox,
        }
    }
}

impl BoundaryChecker for NullBoundaryChecker {
    fn is_point_in_boundary(&self, point: &Coordinate, boundary: &[Coordinate]) -> bool {
        match self.mode {
            BoundaryMode::Fixed(verdict) => verdict,
            BoundaryMode::BoundingBox => {
                let min_lat = boundary.iter().map(|c| c.latitude).fold(f64::INFINITY, f64::min);
                let max_lat = boundary
                    .iter()
                    .map(|c| c.latitude)
                    .fold(f64::NEG_INFINITY, f64::max);
                let min_lon = boundary
                    .iter()
                    .map(|c| c.longitude)
                    .fold(f64::INFINITY, f64::min);
                let max_lon = boundary
                    .iter()
                    .map(|c| c.longitude)
                    .fold(f64::NEG_INFINITY, f64::max);
                point.latitude >= min_lat
                    && point.latitude <= max_lat
                    && point.longitude >= min_lon
                    && point.longitude <= max_lon
            }
        }
    }
}

/// A deterministic safe-zone oracle with a fixed verdict.
pub struct NullSafeZoneChecker {
    in_zone: bool,
}

impl NullSafeZoneChecker {
    /// No location is ever in a safe zone.
    pub fn none() -> Self {
        Self { in_zone: false }
    }

    /// Every location is in a safe zone.
    pub fn everywhere() -> Self {
        Self { in_zone: true }
    }
}

impl SafeZoneChecker for NullSafeZoneChecker {
    fn is_location_in_safe_zone(&self, _game: &GameId, _point: &Coordinate) -> bool {
        self.in_zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_contains_interior_point() {
        let checker = NullBoundaryChecker::bounding_box();
        let boundary = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            Coordinate::new(10.0, 10.0),
            Coordinate::new(10.0, 0.0),
        ];
        assert!(checker.is_point_in_boundary(&Coordinate::new(5.0, 5.0), &boundary));
        assert!(!checker.is_point_in_boundary(&Coordinate::new(15.0, 5.0), &boundary));
    }
}
