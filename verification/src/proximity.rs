//! GPS proximity verification.
//!
//! The verifier submits their own position; the kill stands if they were
//! close enough to the reported kill location.

use crate::strategy::{Evidence, VerificationStrategy};
use crate::Verdict;
use manhunt_store::Kill;
use manhunt_types::{Coordinate, PlayerId, VerificationMethod};

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default acceptance radius around the kill location.
pub const DEFAULT_MAX_DISTANCE_M: f64 = 50.0;

/// Evidence keys consumed by [`ProximityStrategy`].
pub const LATITUDE_KEY: &str = "latitude";
pub const LONGITUDE_KEY: &str = "longitude";

pub struct ProximityStrategy {
    max_distance_m: f64,
}

impl ProximityStrategy {
    pub fn new(max_distance_m: f64) -> Self {
        Self { max_distance_m }
    }
}

impl Default for ProximityStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE_M)
    }
}

impl VerificationStrategy for ProximityStrategy {
    fn method(&self) -> VerificationMethod {
        VerificationMethod::Proximity
    }

    fn verify(&self, kill: &Kill, evidence: &Evidence, _verifier: &PlayerId) -> Verdict {
        let latitude = evidence
            .get(LATITUDE_KEY)
            .and_then(|v| v.parse::<f64>().ok());
        let longitude = evidence
            .get(LONGITUDE_KEY)
            .and_then(|v| v.parse::<f64>().ok());
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Verdict::rejected("missing or malformed verifier coordinates");
        };

        let distance = haversine_m(&kill.location, &Coordinate::new(latitude, longitude));
        if distance <= self.max_distance_m {
            Verdict::verified(format!(
                "verifier within {distance:.1}m of the kill location"
            ))
        } else {
            Verdict::rejected(format!(
                "verifier {distance:.1}m from the kill location, limit {}m",
                self.max_distance_m
            ))
        }
    }
}

/// Great-circle distance between two coordinates in meters.
fn haversine_m(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
