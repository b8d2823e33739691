//! Great-circle distance between the player and a quest coordinate.

use geo::Point;

/// Earth radius in meters for the spherical distance model. Proximity checks
/// operate at tens of meters, where the spherical approximation error is
/// negligible.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two WGS 84 points, in meters.
///
/// Points are (x = longitude, y = latitude) in degrees.
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlng = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
