//! Roster document: the single persisted unit.

use crate::model::adopter::{Adopter, AdopterId};
use crate::model::adoption::Adoption;
use crate::model::pet::{Pet, PetId};
use serde::{Deserialize, Serialize};

/// All roster collections, persisted together as one JSON object with
/// keys `pets`, `adopters` and `adoptions`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RosterDocument {
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub adopters: Vec<Adopter>,
    #[serde(default)]
    pub adoptions: Vec<Adoption>,
}

impl RosterDocument {
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty() && self.adopters.is_empty() && self.adoptions.is_empty()
    }

    pub fn find_pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    pub fn find_adopter(&self, id: AdopterId) -> Option<&Adopter> {
        self.adopters.iter().find(|adopter| adopter.id == id)
    }

    pub(crate) fn find_pet_mut(&mut self, id: PetId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.id == id)
    }

    pub(crate) fn next_pet_id(&self) -> PetId {
        next_id(self.pets.len())
    }

    pub(crate) fn next_adopter_id(&self) -> AdopterId {
        next_id(self.adopters.len())
    }

    pub(crate) fn next_adoption_id(&self) -> u64 {
        next_id(self.adoptions.len())
    }
}

fn next_id(count: usize) -> u64 {
    count as u64 + 1
}
