//! The facility registry's wire shape.

use serde::{Deserialize, Serialize};

use nav_core::GeoPoint;

/// One row of the facility registry payload.
///
/// Only `lat`/`lng` are interpreted anywhere in this workspace; every other
/// field is descriptive payload carried through untouched for display.  That
/// includes `invalid` — whether a flagged facility is still offered is a
/// policy question for the presentation layer, not for the index.
///
/// Missing attribute fields decode as empty strings: registry rows are
/// hand-maintained and sparse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub lat: f64,
    pub lng: f64,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default, rename = "typeBuilding")]
    pub type_building: String,
    #[serde(default)]
    pub tel: String,
    #[serde(default)]
    pub phonenumb: String,
    #[serde(default)]
    pub invalid: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "linkFull")]
    pub link_full: String,
    #[serde(default, rename = "workingTime")]
    pub working_time: String,
}

impl FacilityRecord {
    /// The record's position as a core point.
    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}
