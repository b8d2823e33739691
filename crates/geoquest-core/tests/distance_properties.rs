//! Property tests for the spherical distance function.

use geo::{Distance, Haversine, Point};
use geoquest_core::geo::haversine_distance;
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Point<f64>> {
    (-180.0f64..180.0, -90.0f64..90.0).prop_map(|(lng, lat)| Point::new(lng, lat))
}

proptest! {
    #[test]
    fn distance_is_non_negative(a in coordinate(), b in coordinate()) {
        prop_assert!(haversine_distance(a, b) >= 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let forward = haversine_distance(a, b);
        let backward = haversine_distance(b, a);
        prop_assert!((forward - backward).abs() < 1e-6);
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert!(haversine_distance(a, a) < 1e-6);
    }

    #[test]
    fn agrees_with_the_geo_crate(a in coordinate(), b in coordinate()) {
        let ours = haversine_distance(a, b);
        let reference = Haversine.distance(a, b);

        // Same formula, slightly different Earth radius constant (6371000 vs
        // the IUGG mean radius), so the results differ by a fixed tiny ratio
        let tolerance = reference * 1e-5 + 0.01;
        prop_assert!(
            (ours - reference).abs() <= tolerance,
            "ours = {}, geo = {}",
            ours,
            reference
        );
    }
}
