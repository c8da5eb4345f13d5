//! Great-circle geometry for the radius containment query.

/// Mean Earth radius in miles, matching the radius used to convert a linear
/// search distance into an angular radius.
pub const EARTH_RADIUS_MILES: f64 = 3963.0;

/// Central angle in radians between two points given in degrees.
///
/// Uses the haversine formulation, which stays numerically stable for the
/// small angles a radius search works with.
pub fn central_angle(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * a.sqrt().asin()
}

/// Great-circle distance in miles between two points given in degrees.
pub fn distance_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    central_angle(lat1, lng1, lat2, lng2) * EARTH_RADIUS_MILES
}
