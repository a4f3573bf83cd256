//! Adoption log entry.
//!
//! Entries are append-only: one per successful adoption, never edited.

use crate::model::adopter::AdopterId;
use crate::model::pet::PetId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type AdoptionId = u64;

/// Record of one completed adoption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adoption {
    pub id: AdoptionId,
    pub pet_id: PetId,
    pub adopter_id: AdopterId,
    /// Same value as the pet's `adoption_date`.
    pub date: NaiveDate,
}
