//! Unit tests for nav-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(50.4501, 30.5234);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km everywhere on the sphere.
        let a = GeoPoint::new(50.0, 30.5);
        let b = GeoPoint::new(51.0, 30.5);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        // 1 degree of longitude at 50° N is ~cos(50°) of its equator length.
        let eq = GeoPoint::new(0.0, 30.0).distance_m(GeoPoint::new(0.0, 31.0));
        let north = GeoPoint::new(50.0, 30.0).distance_m(GeoPoint::new(50.0, 31.0));
        let ratio = north / eq;
        assert!((ratio - 50.0f64.to_radians().cos()).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn distance_symmetry() {
        let a = GeoPoint::new(50.45, 30.52);
        let b = GeoPoint::new(50.47, 30.61);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn km_helper() {
        let a = GeoPoint::new(50.0, 30.5);
        let b = GeoPoint::new(51.0, 30.5);
        assert!((a.distance_km(b) * 1_000.0 - a.distance_m(b)).abs() < 1e-9);
    }

    #[test]
    fn validity_ranges() {
        assert!(GeoPoint::new(50.45, 30.52).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.1).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }
}

#[cfg(test)]
mod error {
    use crate::NavError;

    #[test]
    fn invalid_coordinate_display() {
        let e = NavError::InvalidCoordinate { lat: 91.0, lng: 0.0 };
        let msg = e.to_string();
        assert!(msg.contains("91"), "got: {msg}");
    }
}

#[cfg(test)]
mod ids {
    use crate::FacilityId;

    #[test]
    fn index_roundtrip() {
        let id = FacilityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(FacilityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(FacilityId(0) < FacilityId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(FacilityId::INVALID.0, u32::MAX);
        assert_eq!(FacilityId::default(), FacilityId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(FacilityId(7).to_string(), "FacilityId(7)");
    }
}
