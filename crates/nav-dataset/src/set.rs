//! Dataset snapshots and payload decoding.

use std::io::Read;

use nav_core::{FacilityId, GeoPoint};
use nav_index::FacilityIndex;

use crate::error::DatasetResult;
use crate::record::FacilityRecord;

/// Decode a registry payload (a JSON array of facility rows) from a string.
pub fn parse_records(json: &str) -> DatasetResult<Vec<FacilityRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a registry payload from a reader (a cached response body, a test
/// fixture file).
pub fn read_records<R: Read>(reader: R) -> DatasetResult<Vec<FacilityRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// An immutable snapshot of the facility dataset.
///
/// `FacilityId`s from an index built off this snapshot are positions in
/// `records`.  Records are assumed pre-deduplicated by coordinate upstream;
/// no deduplication happens here.
pub struct FacilitySet {
    records: Vec<FacilityRecord>,
}

impl FacilitySet {
    pub fn new(records: Vec<FacilityRecord>) -> Self {
        Self { records }
    }

    /// Decode a payload string straight into a snapshot.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        Ok(Self::new(parse_records(json)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    /// The record behind an id returned by this snapshot's index.
    ///
    /// # Panics
    /// Panics if `id` came from an index built off a different snapshot.
    pub fn record(&self, id: FacilityId) -> &FacilityRecord {
        &self.records[id.index()]
    }

    /// All record positions, in record order.
    pub fn points(&self) -> Vec<GeoPoint> {
        self.records.iter().map(FacilityRecord::point).collect()
    }

    /// Build the spatial index for this snapshot.
    ///
    /// One index per snapshot: when the registry serves new data, decode a
    /// new `FacilitySet` and build again.  Coordinate validation (and the
    /// non-empty requirement) is inherited from the index build.
    pub fn build_index(&self) -> DatasetResult<FacilityIndex> {
        Ok(FacilityIndex::build(&self.points())?)
    }
}
