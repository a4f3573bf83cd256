//! Pet domain model.
//!
//! # Responsibility
//! - Define the persisted pet record and its adoption lifecycle.
//! - Define the creation input (`NewPet`) and its validation rules.
//!
//! # Invariants
//! - `id` is assigned by the roster service, never by callers.
//! - `adoption_date` and `adopter_id` are set iff `status == Adopted`.
//! - `Adopted` is terminal; no transition back to `Available` exists.

use crate::model::adopter::AdopterId;
use crate::model::validation::RecordValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sequential pet identifier (`count + 1` at creation).
pub type PetId = u64;

/// Lifecycle state of a pet in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetStatus {
    /// Listed and open for adoption.
    #[serde(alias = "待领养")]
    Available,
    /// Adopted; terminal state.
    #[serde(alias = "已领养")]
    Adopted,
}

impl PetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Adopted => "adopted",
        }
    }
}

/// Persisted pet record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub breed: String,
    /// Age in years. Whole ages are written as JSON integers.
    #[serde(serialize_with = "age_format::serialize")]
    pub age: f64,
    pub gender: String,
    pub size: String,
    /// Ordered temperament tags, e.g. `["gentle", "friendly"]`.
    pub temperament: Vec<String>,
    pub description: String,
    pub status: PetStatus,
    /// Calendar date of the adoption, serialized as `YYYY-MM-DD`.
    pub adoption_date: Option<NaiveDate>,
    pub adopter_id: Option<AdopterId>,
}

impl Pet {
    /// Builds an available pet from validated creation input.
    pub(crate) fn from_new(id: PetId, new_pet: NewPet) -> Self {
        Self {
            id,
            name: new_pet.name,
            species: new_pet.species,
            breed: new_pet.breed,
            age: new_pet.age,
            gender: new_pet.gender,
            size: new_pet.size,
            temperament: new_pet.temperament,
            description: new_pet.description,
            status: PetStatus::Available,
            adoption_date: None,
            adopter_id: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == PetStatus::Available
    }

    /// Applies the `Available -> Adopted` transition.
    ///
    /// Callers must check `is_available()` first; the roster service is the
    /// only caller.
    pub(crate) fn mark_adopted(&mut self, adopter_id: AdopterId, date: NaiveDate) {
        self.status = PetStatus::Adopted;
        self.adoption_date = Some(date);
        self.adopter_id = Some(adopter_id);
    }
}

/// Creation input for `RosterService::add_pet`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: f64,
    pub gender: String,
    pub size: String,
    pub temperament: Vec<String>,
    pub description: String,
}

impl NewPet {
    /// Rejects ages that cannot be bucketed into an age group.
    ///
    /// Text fields are free-form; blank names and species are accepted.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !self.age.is_finite() || self.age < 0.0 {
            return Err(RecordValidationError::InvalidAge(self.age));
        }
        Ok(())
    }
}

mod age_format {
    use serde::Serializer;

    // Largest integer an f64 represents exactly.
    const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(age: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if age.fract() == 0.0 && age.abs() <= MAX_EXACT_INT {
            serializer.serialize_i64(*age as i64)
        } else {
            serializer.serialize_f64(*age)
        }
    }
}
