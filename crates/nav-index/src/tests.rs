//! Unit tests for nav-index.

#[cfg(test)]
mod helpers {
    use nav_core::{FacilityId, GeoPoint};

    /// Central Kyiv reference point used as a query origin.
    pub const ORIGIN: GeoPoint = GeoPoint { lat: 50.4501, lng: 30.5234 };

    /// Five facilities at increasing latitude offsets north of [`ORIGIN`]:
    /// roughly 110 m, 1.1 km, 2.2 km, 5.5 km, 11 km away, in that order.
    pub fn ladder() -> Vec<GeoPoint> {
        [0.001, 0.01, 0.02, 0.05, 0.10]
            .iter()
            .map(|d| GeoPoint::new(ORIGIN.lat + d, ORIGIN.lng))
            .collect()
    }

    /// Brute-force K-nearest: haversine sort, ties by insertion order.
    pub fn brute_force_k(points: &[GeoPoint], origin: GeoPoint, k: usize) -> Vec<FacilityId> {
        let mut ranked: Vec<(f64, usize)> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| (origin.distance_m(p), i))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        ranked.truncate(k.min(points.len()));
        ranked.into_iter().map(|(_, i)| FacilityId(i as u32)).collect()
    }
}

// ── Build ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod build {
    use nav_core::GeoPoint;
    use crate::{FacilityIndex, IndexError};

    #[test]
    fn empty_point_set_rejected() {
        let result = FacilityIndex::build(&[]);
        assert!(matches!(result, Err(IndexError::EmptyPointSet)));
    }

    #[test]
    fn nan_coordinate_rejected_with_index() {
        let points = vec![
            GeoPoint::new(50.45, 30.52),
            GeoPoint::new(50.46, 30.53),
            GeoPoint::new(f64::NAN, 30.54),
        ];
        match FacilityIndex::build(&points) {
            Err(IndexError::InvalidCoordinate { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_latitude_rejected() {
        let points = vec![GeoPoint::new(91.0, 30.52)];
        assert!(matches!(
            FacilityIndex::build(&points),
            Err(IndexError::InvalidCoordinate { index: 0, .. })
        ));
    }

    #[test]
    fn build_copies_points() {
        let points = super::helpers::ladder();
        let idx = FacilityIndex::build(&points).unwrap();
        assert_eq!(idx.len(), points.len());
        assert_eq!(idx.points(), points.as_slice());
    }
}

// ── K-nearest ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod k_nearest {
    use nav_core::{FacilityId, GeoPoint};
    use crate::FacilityIndex;
    use super::helpers::{ladder, ORIGIN};

    #[test]
    fn ascending_by_distance() {
        let idx = FacilityIndex::build(&ladder()).unwrap();
        let got = idx.k_nearest(ORIGIN, 3);
        assert_eq!(got, vec![FacilityId(0), FacilityId(1), FacilityId(2)]);
    }

    #[test]
    fn k_zero_returns_empty() {
        let idx = FacilityIndex::build(&ladder()).unwrap();
        assert!(idx.k_nearest(ORIGIN, 0).is_empty());
    }

    #[test]
    fn k_clamped_to_dataset_size() {
        let idx = FacilityIndex::build(&ladder()).unwrap();
        let got = idx.k_nearest(ORIGIN, 999);
        assert_eq!(got.len(), 5);
    }

    #[test]
    fn idempotent_queries() {
        let idx = FacilityIndex::build(&ladder()).unwrap();
        assert_eq!(idx.k_nearest(ORIGIN, 4), idx.k_nearest(ORIGIN, 4));
    }

    #[test]
    fn ties_break_by_insertion_order() {
        // Facility 2 duplicates facility 0's position; the earlier id wins.
        let a = GeoPoint::new(50.4510, 30.5234);
        let b = GeoPoint::new(50.4700, 30.5234);
        let idx = FacilityIndex::build(&[a, b, a]).unwrap();
        let got = idx.k_nearest(ORIGIN, 3);
        assert_eq!(got, vec![FacilityId(0), FacilityId(2), FacilityId(1)]);
    }

    #[test]
    fn subset_of_unbounded_radius() {
        let idx = FacilityIndex::build(&ladder()).unwrap();
        let all = idx.within_radius_km(ORIGIN, f64::INFINITY);
        for id in idx.k_nearest(ORIGIN, 3) {
            assert!(all.contains(&id));
        }
    }
}

// ── Radius ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod radius {
    use nav_core::FacilityId;
    use crate::FacilityIndex;
    use super::helpers::{ladder, ORIGIN};

    #[test]
    fn selects_points_inside() {
        let idx = FacilityIndex::build(&ladder()).unwrap();
        // Ladder distances: ~0.11, 1.1, 2.2, 5.5, 11 km.
        let mut got = idx.within_radius_km(ORIGIN, 3.0);
        got.sort();
        assert_eq!(got, vec![FacilityId(0), FacilityId(1), FacilityId(2)]);
    }

    #[test]
    fn unbounded_radius_returns_everything() {
        let idx = FacilityIndex::build(&ladder()).unwrap();
        assert_eq!(idx.within_radius_km(ORIGIN, f64::INFINITY).len(), 5);
    }

    #[test]
    fn negative_radius_returns_empty() {
        let idx = FacilityIndex::build(&ladder()).unwrap();
        assert!(idx.within_radius_km(ORIGIN, -1.0).is_empty());
    }
}

// ── Randomized cross-check against brute force ────────────────────────────────

#[cfg(test)]
mod cross_check {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use nav_core::{FacilityId, GeoPoint};
    use crate::FacilityIndex;
    use super::helpers::brute_force_k;

    /// Seeded random points across the Kyiv bounding box.
    fn random_city(rng: &mut SmallRng, n: usize) -> Vec<GeoPoint> {
        (0..n)
            .map(|_| {
                GeoPoint::new(
                    rng.gen_range(50.2995..50.5688),
                    rng.gen_range(30.2453..30.7242),
                )
            })
            .collect()
    }

    #[test]
    fn k_nearest_matches_brute_force() {
        let mut rng = SmallRng::seed_from_u64(7);
        let points = random_city(&mut rng, 120);
        let idx = FacilityIndex::build(&points).unwrap();

        let origins = [
            GeoPoint::new(50.4501, 30.5234),
            GeoPoint::new(50.3300, 30.3000),
            GeoPoint::new(50.5500, 30.7000),
        ];
        for origin in origins {
            for k in [1, 4, 9, 120] {
                assert_eq!(
                    idx.k_nearest(origin, k),
                    brute_force_k(&points, origin, k),
                    "k={k} origin={origin}"
                );
            }
        }
    }

    #[test]
    fn radius_matches_brute_force() {
        let mut rng = SmallRng::seed_from_u64(11);
        let points = random_city(&mut rng, 120);
        let idx = FacilityIndex::build(&points).unwrap();
        let origin = GeoPoint::new(50.4501, 30.5234);

        for radius_km in [0.5, 2.0, 10.0, 40.0] {
            let mut got = idx.within_radius_km(origin, radius_km);
            got.sort();
            let want: Vec<FacilityId> = points
                .iter()
                .enumerate()
                .filter(|&(_, &p)| origin.distance_km(p) <= radius_km)
                .map(|(i, _)| FacilityId(i as u32))
                .collect();
            assert_eq!(got, want, "radius={radius_km}");
        }
    }
}
