//! Adopter domain model.
//!
//! # Invariants
//! - Adopters are immutable after registration.
//! - An empty preference list means "no preference" for that attribute.

use crate::model::validation::RecordValidationError;
use serde::{Deserialize, Serialize};

/// Sequential adopter identifier (`count + 1` at registration).
pub type AdopterId = u64;

/// Acceptable values per pet attribute.
///
/// Lists keep caller order so persisted documents round-trip unchanged;
/// matching treats them as sets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub size: Vec<String>,
    /// Age group names (`juvenile|young|adult|senior`).
    #[serde(default)]
    pub age: Vec<String>,
    #[serde(default)]
    pub temperament: Vec<String>,
}

/// Persisted adopter record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adopter {
    pub id: AdopterId,
    pub name: String,
    pub contact: String,
    pub living_situation: String,
    pub experience: Vec<String>,
    pub preferences: Preferences,
}

impl Adopter {
    pub(crate) fn from_new(id: AdopterId, new_adopter: NewAdopter) -> Self {
        Self {
            id,
            name: new_adopter.name,
            contact: new_adopter.contact,
            living_situation: new_adopter.living_situation,
            experience: new_adopter.experience,
            preferences: new_adopter.preferences,
        }
    }
}

/// Registration input for `RosterService::register_adopter`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewAdopter {
    pub name: String,
    pub contact: String,
    pub living_situation: String,
    pub experience: Vec<String>,
    pub preferences: Preferences,
}

impl NewAdopter {
    /// Requires a non-blank `name` and `contact`.
    ///
    /// Duplicate names or contacts across adopters are allowed.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::EmptyField("name"));
        }
        if self.contact.trim().is_empty() {
            return Err(RecordValidationError::EmptyField("contact"));
        }
        Ok(())
    }
}
