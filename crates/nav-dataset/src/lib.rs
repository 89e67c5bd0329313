//! `nav-dataset` — decode the facility registry payload and hold dataset
//! snapshots.
//!
//! The registry itself (fetch, retry, caching) is an external collaborator;
//! this crate only fixes the payload contract: a JSON array of facility
//! rows, of which the core interprets nothing but `lat`/`lng`.  A decoded
//! snapshot is immutable — when the registry serves new data, decode a new
//! snapshot and build a new index from it.
//!
//! # Crate layout
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`record`] | `FacilityRecord` (wire shape)             |
//! | [`set`]    | `FacilitySet`, `parse_records`, `read_records` |
//! | [`error`]  | `DatasetError`, `DatasetResult<T>`        |

pub mod error;
pub mod record;
pub mod set;


pub use error::{DatasetError, DatasetResult};
pub use record::FacilityRecord;
pub use set::{parse_records, read_records, FacilitySet};
