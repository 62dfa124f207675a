//! Service-region geofence predicate.
//!
//! # Responsibility
//! - Decide whether a coordinate lies within the metropolitan service region.
//!
//! # Invariants
//! - The predicate is deterministic and has no side effects.
//! - The region boundary is inclusive: distance equal to the radius passes.
//! - Non-finite input is never inside the region.

/// Mean Earth radius in kilometres used by the great-circle distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude of the service-region center.
pub const SERVICE_CENTER_LAT: f64 = 10.3157;

/// Longitude of the service-region center.
pub const SERVICE_CENTER_LNG: f64 = 123.8854;

/// Inclusive radius of the service region in kilometres.
pub const SERVICE_RADIUS_KM: f64 = 110.0;

/// Great-circle (haversine) distance in kilometres between two points.
///
/// The `min(1, sqrt(h))` clamp keeps floating-point overshoot at
/// antipodal-like inputs from pushing `asin` outside its domain.
pub fn haversine_km(a_lat: f64, a_lng: f64, b_lat: f64, b_lng: f64) -> f64 {
    let d_lat = (b_lat - a_lat).to_radians();
    let d_lng = (b_lng - a_lng).to_radians();
    let lat_a = a_lat.to_radians();
    let lat_b = b_lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Returns whether the coordinate lies within the service region.
pub fn in_service_region(lat: f64, lng: f64) -> bool {
    if !lat.is_finite() || !lng.is_finite() {
        return false;
    }
    haversine_km(SERVICE_CENTER_LAT, SERVICE_CENTER_LNG, lat, lng) <= SERVICE_RADIUS_KM
}
