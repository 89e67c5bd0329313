//! Strongly typed facility identifier.
//!
//! A `FacilityId` is the position of a facility in the dataset snapshot an
//! index was built from.  The inner integer is `pub` to allow direct indexing
//! into the snapshot's `Vec`s via `id.0 as usize`, but callers should prefer
//! the `.index()` helper for clarity.

use std::fmt;

/// Index of a facility in the dataset snapshot.  Max ~4.3 billion facilities.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacilityId(pub u32);

impl FacilityId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: FacilityId = FacilityId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for FacilityId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FacilityId({})", self.0)
    }
}

impl From<FacilityId> for usize {
    #[inline(always)]
    fn from(id: FacilityId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for FacilityId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<FacilityId, Self::Error> {
        u32::try_from(n).map(FacilityId)
    }
}
