//! Demonstration pets for a fresh roster.

use crate::model::pet::NewPet;
use crate::service::roster_service::{RosterService, ServiceResult};
use crate::storage::RosterStorage;
use log::info;

struct SamplePet {
    name: &'static str,
    species: &'static str,
    breed: &'static str,
    age: f64,
    gender: &'static str,
    size: &'static str,
    temperament: &'static [&'static str],
    description: &'static str,
}

const SAMPLE_PETS: &[SamplePet] = &[
    SamplePet {
        name: "Sunny",
        species: "dog",
        breed: "Golden Retriever",
        age: 2.0,
        gender: "male",
        size: "medium-large",
        temperament: &["gentle", "friendly", "lively"],
        description: "Very affectionate and loves people. Best with a patient family.",
    },
    SamplePet {
        name: "Shadow",
        species: "cat",
        breed: "British Shorthair",
        age: 1.0,
        gender: "male",
        size: "small",
        temperament: &["independent", "quiet", "clingy"],
        description: "Calm and well-behaved. Happy alone during office hours.",
    },
    SamplePet {
        name: "Snowball",
        species: "dog",
        breed: "Toy Poodle",
        age: 3.0,
        gender: "female",
        size: "small",
        temperament: &["smart", "lively", "vocal"],
        description: "Clever and playful. Needs regular grooming.",
    },
    SamplePet {
        name: "Blossom",
        species: "cat",
        breed: "Ragdoll",
        age: 4.0,
        gender: "female",
        size: "medium",
        temperament: &["gentle", "clingy", "elegant"],
        description: "Graceful and docile. Enjoys being pampered.",
    },
    SamplePet {
        name: "Pepper",
        species: "cat",
        breed: "American Shorthair",
        age: 2.0,
        gender: "male",
        size: "medium",
        temperament: &["lively", "smart", "independent"],
        description: "Full of energy and loves to play. Suits an active household.",
    },
    SamplePet {
        name: "Biscuit",
        species: "dog",
        breed: "Corgi",
        age: 1.0,
        gender: "female",
        size: "small",
        temperament: &["friendly", "lively", "stubborn"],
        description: "Short legs, big personality. Loves outdoor walks.",
    },
];

/// Lists the demonstration pets when the roster has no pets yet.
///
/// Returns the number of pets added; `0` when pets already exist.
pub fn seed_sample_pets<S: RosterStorage>(service: &mut RosterService<S>) -> ServiceResult<usize> {
    if !service.roster().pets.is_empty() {
        return Ok(0);
    }

    for sample in SAMPLE_PETS {
        service.add_pet(NewPet {
            name: sample.name.to_string(),
            species: sample.species.to_string(),
            breed: sample.breed.to_string(),
            age: sample.age,
            gender: sample.gender.to_string(),
            size: sample.size.to_string(),
            temperament: sample.temperament.iter().map(|tag| tag.to_string()).collect(),
            description: sample.description.to_string(),
        })?;
    }

    info!(
        "event=roster_seed module=service status=ok pets={}",
        SAMPLE_PETS.len()
    );
    Ok(SAMPLE_PETS.len())
}
