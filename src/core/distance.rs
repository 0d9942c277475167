use crate::models::GeoPoint;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two geo points in kilometers.
#[inline]
pub fn distance_between(a: &GeoPoint, b: &GeoPoint) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Distance when both sides have shared a location, `None` otherwise.
///
/// The scorer treats `None` as "unknown" and awards no distance points,
/// which is distinct from a known-but-far distance.
#[inline]
pub fn distance_if_known(a: Option<&GeoPoint>, b: Option<&GeoPoint>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(distance_between(a, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_haversine_symmetry() {
        let forward = haversine_distance(40.7128, -74.0060, 34.0522, -118.2437);
        let backward = haversine_distance(34.0522, -118.2437, 40.7128, -74.0060);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let distance = haversine_distance(40.7128, -74.0060, 40.7128, -74.0060);
        assert!(distance < 1e-9);
    }

    #[test]
    fn test_distance_if_known_requires_both_sides() {
        let here = GeoPoint { latitude: 40.7128, longitude: -74.0060 };
        let there = GeoPoint { latitude: 40.7580, longitude: -73.9855 };

        assert!(distance_if_known(Some(&here), Some(&there)).is_some());
        assert_eq!(distance_if_known(Some(&here), None), None);
        assert_eq!(distance_if_known(None, Some(&there)), None);
        assert_eq!(distance_if_known(None, None), None);
    }
}
