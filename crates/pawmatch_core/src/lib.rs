//! Core engine for the PawMatch adoption roster.
//! Owns pet, adopter and adoption records, their JSON persistence, and the
//! adopter-to-pet matching rules.

pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::adopter::{Adopter, AdopterId, NewAdopter, Preferences};
pub use model::adoption::{Adoption, AdoptionId};
pub use model::pet::{NewPet, Pet, PetId, PetStatus};
pub use model::roster::RosterDocument;
pub use model::validation::RecordValidationError;
pub use service::matching::{age_group, fits_preferences, AgeGroup, PetFilter};
pub use service::roster_service::{AdoptionOutcome, RosterService, ServiceError, ServiceResult};
pub use service::seed::seed_sample_pets;
pub use service::stats::{compute_stats, RosterStats};
pub use storage::{
    load_roster, save_roster, CorruptDataError, InMemoryStorage, JsonFileStorage, LoadedRoster,
    RosterStorage, StorageError, StorageResult, DEFAULT_DATA_FILE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
