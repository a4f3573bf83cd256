//! Roster statistics projection.
//!
//! Pure aggregation over a `RosterDocument`; rendering belongs to callers.

use crate::model::pet::PetStatus;
use crate::model::roster::RosterDocument;
use crate::service::matching::{age_group, AgeGroup};
use std::collections::BTreeMap;

/// Counts derived from the current roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub available_pets: usize,
    pub adopted_pets: usize,
    pub adopters: usize,
    pub total_adoptions: usize,
    pub pets_by_species: BTreeMap<String, usize>,
    pub pets_by_status: BTreeMap<PetStatus, usize>,
    pub pets_by_age_group: BTreeMap<AgeGroup, usize>,
    /// Adoptions per calendar month, keyed `YYYY-MM`, ascending.
    pub adoptions_by_month: BTreeMap<String, usize>,
}

pub fn compute_stats(roster: &RosterDocument) -> RosterStats {
    let mut stats = RosterStats {
        adopters: roster.adopters.len(),
        total_adoptions: roster.adoptions.len(),
        ..RosterStats::default()
    };

    for pet in &roster.pets {
        match pet.status {
            PetStatus::Available => stats.available_pets += 1,
            PetStatus::Adopted => stats.adopted_pets += 1,
        }
        *stats.pets_by_species.entry(pet.species.clone()).or_default() += 1;
        *stats.pets_by_status.entry(pet.status).or_default() += 1;
        *stats.pets_by_age_group.entry(age_group(pet.age)).or_default() += 1;
    }

    for adoption in &roster.adoptions {
        let month = adoption.date.format("%Y-%m").to_string();
        *stats.adoptions_by_month.entry(month).or_default() += 1;
    }

    stats
}
