//! Great-circle distance model shared by the cost-aware finders and by the
//! route distance report.

use tracing::warn;

use crate::location::{Location, LocationRegistry};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two locations in kilometres.
pub fn haversine_km(a: &Location, b: &Location) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can leave `h` just outside [0, 1] for near-antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Cost of travelling the edge `from -> to`. Infinite when either endpoint
/// has no registered coordinates.
pub fn edge_cost(registry: &LocationRegistry, from: &str, to: &str) -> f64 {
    match (registry.get(from), registry.get(to)) {
        (Some(a), Some(b)) => haversine_km(a, b),
        _ => f64::INFINITY,
    }
}

/// Straight-line estimate from `from` to `goal`. Falls back to zero when a
/// coordinate is missing so the estimate never overshoots.
pub fn heuristic(registry: &LocationRegistry, from: &str, goal: &str) -> f64 {
    match (registry.get(from), registry.get(goal)) {
        (Some(a), Some(b)) => haversine_km(a, b),
        _ => 0.0,
    }
}

/// Distance of a single leg, or `None` when a coordinate is missing.
pub fn leg_distance(registry: &LocationRegistry, from: &str, to: &str) -> Option<f64> {
    Some(haversine_km(registry.get(from)?, registry.get(to)?))
}

/// Sum of leg distances along `route`. Legs touching a location without
/// coordinates contribute nothing.
pub fn route_distance<S: AsRef<str>>(registry: &LocationRegistry, route: &[S]) -> f64 {
    route
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            leg_distance(registry, from, to).unwrap_or_else(|| {
                warn!("missing coordinates for leg {from} -> {to}; excluded from total");
                0.0
            })
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(name: &str, latitude: f64, longitude: f64) -> Location {
        Location::new(name, latitude, longitude).unwrap()
    }

    fn assert_within(actual: f64, expected: f64, tolerance: f64) {
        let relative = ((actual - expected) / expected).abs();
        assert!(
            relative <= tolerance,
            "expected {expected} within {tolerance}, got {actual}"
        );
    }

    #[test]
    fn identical_points_are_zero_apart() {
        let a = loc("A", 37.7, -122.4);
        assert_eq!(haversine_km(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = loc("A", 51.5074, -0.1278);
        let b = loc("B", 48.8566, 2.3522);
        assert!((haversine_km(&a, &b) - haversine_km(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_at_the_equator() {
        let a = loc("A", 0.0, 0.0);
        let b = loc("B", 1.0, 0.0);
        assert_within(haversine_km(&a, &b), 111.19, 0.005);
    }

    #[test]
    fn antipodal_points_are_half_a_circumference_apart() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;

        let a = loc("A", 87.5, 0.0);
        let b = loc("B", -87.5, 180.0);
        let distance = haversine_km(&a, &b);
        assert!(distance.is_finite());
        assert_within(distance, half_circumference, 1e-6);

        for tenth in -900..=900 {
            let latitude = f64::from(tenth) / 10.0;
            let a = loc("A", latitude, 0.0);
            let b = loc("B", -latitude, 180.0);
            let distance = haversine_km(&a, &b);
            assert!(
                distance.is_finite() && distance >= 0.0,
                "latitude {latitude}: {distance}"
            );
        }
    }

    #[test]
    fn reference_city_pairs() {
        let london = loc("London", 51.5074, -0.1278);
        let paris = loc("Paris", 48.8566, 2.3522);
        assert_within(haversine_km(&london, &paris), 343.5, 0.005);

        let new_york = loc("New York", 40.7128, -74.0060);
        let los_angeles = loc("Los Angeles", 34.0522, -118.2437);
        assert_within(haversine_km(&new_york, &los_angeles), 3935.7, 0.005);
    }

    #[test]
    fn missing_coordinates_change_edge_and_heuristic_costs() {
        let registry: LocationRegistry = [loc("A", 0.0, 0.0)].into_iter().collect();
        assert_eq!(edge_cost(&registry, "A", "Z"), f64::INFINITY);
        assert_eq!(heuristic(&registry, "A", "Z"), 0.0);
        assert_eq!(leg_distance(&registry, "Z", "A"), None);
    }

    #[test]
    fn route_distance_skips_unknown_legs() {
        let registry: LocationRegistry = [loc("A", 0.0, 0.0), loc("B", 1.0, 0.0)]
            .into_iter()
            .collect();
        let direct = route_distance(&registry, &["A", "B"]);
        let with_gap = route_distance(&registry, &["A", "B", "Z"]);
        assert_eq!(direct, with_gap);
        assert_eq!(route_distance::<&str>(&registry, &[]), 0.0);
        assert_eq!(route_distance(&registry, &["A"]), 0.0);
    }
}
