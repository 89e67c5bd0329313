//! Facility spatial index.
//!
//! # Data layout
//!
//! `FacilityIndex` owns a copy of all facility positions taken at build time.
//! `FacilityId`s returned by queries are positions in that snapshot.  The
//! index is read-only after `build`; when the dataset changes, build a new
//! index rather than mutating this one.
//!
//! # Distance metric
//!
//! Queries rank by great-circle (haversine) distance.  An R-tree is a planar
//! structure, so entries are stored in a local equirectangular projection:
//! longitudes are scaled by the cosine of the dataset's mean latitude, which
//! makes one projected degree the same ground distance along both axes.
//! Planar pruning then tracks great-circle ordering for city-scale data; the
//! final ranking and radius membership are decided by exact haversine.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use nav_core::{FacilityId, GeoPoint};

use crate::error::{IndexError, IndexResult};

/// Mean length of one degree of arc on the sphere, kilometres.
const KM_PER_DEG: f64 = 111.195;

/// Extra planar candidates fetched beyond `k` before the exact haversine
/// re-rank.  Projection ordering can disagree with great-circle ordering only
/// between near-equidistant points; this head-room absorbs those swaps.
const KNN_OVERSCAN: usize = 8;

/// Over-fetch factor for the planar radius pre-filter.  Membership is decided
/// by the exact haversine filter afterwards, so the margin only costs a few
/// extra candidate checks.
const RADIUS_MARGIN: f64 = 1.05;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a projected `[x, y]` point in degrees with the
/// associated `FacilityId`.
#[derive(Clone, Debug)]
struct FacilityEntry {
    point: [f64; 2],
    id: FacilityId,
}

impl RTreeObject for FacilityEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for FacilityEntry {
    /// Squared Euclidean distance in projected degree space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── FacilityIndex ─────────────────────────────────────────────────────────────

/// Immutable spatial index over a fixed set of facility positions.
#[derive(Debug)]
pub struct FacilityIndex {
    /// Snapshot of the indexed positions, in insertion order.
    points: Vec<GeoPoint>,

    /// `cos(mean latitude)` of the snapshot — the longitude scale of the
    /// equirectangular projection.
    lng_scale: f64,

    tree: RTree<FacilityEntry>,
}

impl FacilityIndex {
    /// Build an index over `points`.
    ///
    /// Copies the point list; the caller's slice is not retained.
    /// Construction is O(n log n) (R-tree bulk load).
    ///
    /// # Errors
    ///
    /// `EmptyPointSet` if `points` is empty; `InvalidCoordinate` for the
    /// first point that is NaN or outside WGS-84 bounds.
    pub fn build(points: &[GeoPoint]) -> IndexResult<Self> {
        if points.is_empty() {
            return Err(IndexError::EmptyPointSet);
        }
        for (index, p) in points.iter().enumerate() {
            if !p.is_valid() {
                return Err(IndexError::InvalidCoordinate { index, lat: p.lat, lng: p.lng });
            }
        }

        let mean_lat = points.iter().map(|p| p.lat).sum::<f64>() / points.len() as f64;
        let lng_scale = mean_lat.to_radians().cos();

        let entries: Vec<FacilityEntry> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| FacilityEntry {
                point: project(p, lng_scale),
                id: FacilityId(i as u32),
            })
            .collect();

        Ok(Self {
            points: points.to_vec(),
            lng_scale,
            tree: RTree::bulk_load(entries),
        })
    }

    /// Number of indexed points.  Always at least 1.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of an indexed facility.
    ///
    /// # Panics
    /// Panics if `id` did not come from a query on this index.
    #[inline]
    pub fn point(&self, id: FacilityId) -> GeoPoint {
        self.points[id.index()]
    }

    /// The indexed positions, in insertion order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The `k` facilities nearest to `origin`, ascending by great-circle
    /// distance.  Equidistant facilities order by insertion (lowest id
    /// first).  `k` is clamped to the dataset size; `k = 0` returns an empty
    /// vec.
    pub fn k_nearest(&self, origin: GeoPoint, k: usize) -> Vec<FacilityId> {
        let k = k.min(self.points.len());
        if k == 0 {
            return Vec::new();
        }

        let q = project(origin, self.lng_scale);
        let take = (k + KNN_OVERSCAN).min(self.points.len());

        let mut ranked: Vec<(f64, FacilityId)> = self
            .tree
            .nearest_neighbor_iter(&q)
            .take(take)
            .map(|e| (origin.distance_m(self.points[e.id.index()]), e.id))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        ranked.truncate(k);

        ranked.into_iter().map(|(_, id)| id).collect()
    }

    /// All facilities within `radius_km` of `origin` (boundary inclusive), in
    /// no particular order.
    ///
    /// Cost is O(log n + m) where m is the candidate count inside the padded
    /// query envelope — this is the reason for the R-tree; a linear scan per
    /// query would not hold at dataset scale.
    pub fn within_radius_km(&self, origin: GeoPoint, radius_km: f64) -> Vec<FacilityId> {
        if radius_km < 0.0 {
            return Vec::new();
        }

        let q = project(origin, self.lng_scale);
        let r_deg = radius_km / KM_PER_DEG * RADIUS_MARGIN;

        self.tree
            .locate_within_distance(q, r_deg * r_deg)
            .filter(|e| origin.distance_km(self.points[e.id.index()]) <= radius_km)
            .map(|e| e.id)
            .collect()
    }
}

/// Equirectangular projection: `[lng · cos(mean_lat), lat]`, both in degrees.
#[inline]
fn project(p: GeoPoint, lng_scale: f64) -> [f64; 2] {
    [p.lng * lng_scale, p.lat]
}
