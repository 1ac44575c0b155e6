//! Error types for map data.
//!
//! Foothold errors are never fatal: the graph is built from whatever survives
//! validation and the rejected entries are handed back to the loader.

use thiserror::Error;

use crate::domain::foothold::FootholdId;
use crate::sim::map::MapId;

/// Why a single foothold record was rejected at graph construction.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FootholdError {
    #[error("foothold {id}: zero-length segment")]
    ZeroLength { id: FootholdId },

    #[error("foothold {id}: non-finite coordinate")]
    NonFinite { id: FootholdId },

    #[error("foothold {id}: link to missing foothold {link}")]
    DanglingLink { id: FootholdId, link: FootholdId },

    #[error("foothold {id}: duplicate id")]
    DuplicateId { id: FootholdId },
}

impl FootholdError {
    /// Id of the rejected record.
    pub fn id(&self) -> FootholdId {
        match *self {
            FootholdError::ZeroLength { id }
            | FootholdError::NonFinite { id }
            | FootholdError::DanglingLink { id, .. }
            | FootholdError::DuplicateId { id } => id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map {map_id} not found")]
    NotFound { map_id: MapId },
}
