//! Preference matching and browse filtering.
//!
//! # Responsibility
//! - Bucket numeric ages into age groups.
//! - Decide whether an available pet fits an adopter's preferences.
//!
//! # Invariants
//! - Age group boundaries are half-open: `[0,1) [1,3) [3,8) [8,inf)`.
//! - Species and size are hard filters; age group and temperament pass if
//!   either one fits.
//! - An empty preference list always fits.

use crate::model::adopter::Preferences;
use crate::model::pet::Pet;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Coarse age bucket derived from a pet's age in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Juvenile,
    Young,
    Adult,
    Senior,
}

impl AgeGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Juvenile => "juvenile",
            Self::Young => "young",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }
}

impl Display for AgeGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an age in years to its age group.
pub fn age_group(age: f64) -> AgeGroup {
    if age < 1.0 {
        AgeGroup::Juvenile
    } else if age < 3.0 {
        AgeGroup::Young
    } else if age < 8.0 {
        AgeGroup::Adult
    } else {
        AgeGroup::Senior
    }
}

/// Returns whether `pet` fits `preferences`, ignoring adoption status.
pub fn fits_preferences(pet: &Pet, preferences: &Preferences) -> bool {
    let species_match = accepts(&preferences.species, &pet.species);
    let size_match = accepts(&preferences.size, &pet.size);
    let age_match = accepts(&preferences.age, age_group(pet.age).as_str());
    let temperament_match = preferences.temperament.is_empty()
        || pet
            .temperament
            .iter()
            .any(|tag| preferences.temperament.contains(tag));

    species_match && size_match && (age_match || temperament_match)
}

fn accepts(wanted: &[String], value: &str) -> bool {
    wanted.is_empty() || wanted.iter().any(|candidate| candidate == value)
}

/// Exact-value browse filter over pets. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFilter {
    pub species: Option<String>,
    pub size: Option<String>,
    pub age_group: Option<AgeGroup>,
}

impl PetFilter {
    pub fn matches(&self, pet: &Pet) -> bool {
        self.species.as_ref().map_or(true, |species| &pet.species == species)
            && self.size.as_ref().map_or(true, |size| &pet.size == size)
            && self.age_group.map_or(true, |group| age_group(pet.age) == group)
    }
}
