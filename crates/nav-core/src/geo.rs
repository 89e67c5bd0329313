//! Geographic coordinate type and distance functions.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Facility
//! registries deliver full-precision WGS-84 coordinates, and the navigator's
//! announce threshold is 15 m — comparing distances near that threshold with
//! single-precision rounding would make announcements flap, so everything
//! downstream stays in f64.

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Spherical-earth model (mean radius); error vs. the WGS-84 ellipsoid is
    /// under 0.5 %, which is far below the proximity thresholds used for
    /// guidance at city scale.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Great-circle distance in kilometres.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        self.distance_m(other) / 1_000.0
    }

    /// `true` if both components are finite and within WGS-84 bounds
    /// (lat ∈ [-90, 90], lng ∈ [-180, 180]).
    ///
    /// NaN fails every comparison, so it is rejected by the range checks
    /// without a separate `is_finite` test.
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
