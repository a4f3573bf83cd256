//! Roster use-case service.
//!
//! # Responsibility
//! - Own the in-memory roster and its persistence port.
//! - Provide the create, match, adopt and list entry points for UI callers.
//!
//! # Invariants
//! - Every successful mutation rewrites the whole document before returning.
//! - A failed write is returned to the caller; the in-memory mutation is kept.
//! - Expected misses (unknown adopter/pet, already adopted) are outcomes,
//!   not errors.

use crate::model::adopter::{Adopter, AdopterId, NewAdopter};
use crate::model::adoption::Adoption;
use crate::model::pet::{NewPet, Pet, PetId, PetStatus};
use crate::model::roster::RosterDocument;
use crate::model::validation::RecordValidationError;
use crate::service::matching::{fits_preferences, PetFilter};
use crate::service::stats::{compute_stats, RosterStats};
use crate::storage::{
    load_roster, save_roster, CorruptDataError, LoadedRoster, RosterStorage, StorageError,
};
use chrono::{Local, NaiveDate};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of a roster use-case.
#[derive(Debug)]
pub enum ServiceError {
    /// Creation input was rejected before any mutation.
    Validation(RecordValidationError),
    /// The roster changed in memory but could not be persisted.
    PersistenceWrite(StorageError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid input: {err}"),
            Self::PersistenceWrite(err) => write!(f, "failed to persist roster: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::PersistenceWrite(err) => Some(err),
        }
    }
}

impl From<RecordValidationError> for ServiceError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::PersistenceWrite(value)
    }
}

/// Outcome of an adoption attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AdoptionOutcome {
    /// The pet moved to `Adopted`; carries the updated record.
    Success(Pet),
    AdopterNotFound,
    PetNotFound,
    AlreadyAdopted,
}

impl AdoptionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::AdopterNotFound => "adopter_not_found",
            Self::PetNotFound => "pet_not_found",
            Self::AlreadyAdopted => "already_adopted",
        }
    }
}

impl Display for AdoptionOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success(pet) => write!(f, "adopted pet: {}", pet.name),
            Self::AdopterNotFound => f.write_str("adopter not found"),
            Self::PetNotFound => f.write_str("pet not found"),
            Self::AlreadyAdopted => f.write_str("pet has already been adopted"),
        }
    }
}

/// Roster facade over a persistence port.
pub struct RosterService<S: RosterStorage> {
    storage: S,
    roster: RosterDocument,
}

impl<S: RosterStorage> RosterService<S> {
    /// Loads the roster from `storage`.
    ///
    /// Returns the service and, when the persisted document had to be
    /// discarded, the reason. The service is usable either way.
    pub fn open(storage: S) -> (Self, Option<CorruptDataError>) {
        let LoadedRoster {
            document,
            corruption,
        } = load_roster(&storage);
        (
            Self {
                storage,
                roster: document,
            },
            corruption,
        )
    }

    /// Rewrites the full roster document.
    pub fn save(&mut self) -> ServiceResult<()> {
        save_roster(&mut self.storage, &self.roster)?;
        Ok(())
    }

    /// Lists a new pet as available.
    ///
    /// # Contract
    /// - `id = pet count + 1`, `status = Available`, no adoption fields.
    /// - Invalid input returns `ServiceError::Validation` without persisting.
    pub fn add_pet(&mut self, new_pet: NewPet) -> ServiceResult<Pet> {
        new_pet.validate()?;

        let pet = Pet::from_new(self.roster.next_pet_id(), new_pet);
        self.roster.pets.push(pet.clone());
        info!("event=pet_add module=service status=ok pet_id={}", pet.id);
        self.save()?;
        Ok(pet)
    }

    /// Registers an adopter with `id = adopter count + 1`.
    pub fn register_adopter(&mut self, new_adopter: NewAdopter) -> ServiceResult<Adopter> {
        new_adopter.validate()?;

        let adopter = Adopter::from_new(self.roster.next_adopter_id(), new_adopter);
        self.roster.adopters.push(adopter.clone());
        info!(
            "event=adopter_register module=service status=ok adopter_id={}",
            adopter.id
        );
        self.save()?;
        Ok(adopter)
    }

    /// Returns available pets fitting the adopter's preferences, in roster
    /// order. Unknown adopters get an empty list.
    pub fn match_pets(&self, adopter_id: AdopterId) -> Vec<&Pet> {
        let Some(adopter) = self.roster.find_adopter(adopter_id) else {
            warn!(
                "event=pet_match module=service status=miss adopter_id={}",
                adopter_id
            );
            return Vec::new();
        };

        let matched: Vec<&Pet> = self
            .roster
            .pets
            .iter()
            .filter(|pet| pet.is_available() && fits_preferences(pet, &adopter.preferences))
            .collect();
        info!(
            "event=pet_match module=service status=ok adopter_id={} matched={}",
            adopter_id,
            matched.len()
        );
        matched
    }

    /// Adopts a pet, dated with today's local calendar date.
    pub fn adopt_pet(
        &mut self,
        adopter_id: AdopterId,
        pet_id: PetId,
    ) -> ServiceResult<AdoptionOutcome> {
        self.adopt_pet_on(adopter_id, pet_id, Local::now().date_naive())
    }

    /// Adopts a pet with an explicit adoption date.
    ///
    /// # Contract
    /// - Checks adopter, then pet, then availability; the first miss is
    ///   returned as the outcome and nothing changes.
    /// - On success the pet is marked adopted, one `Adoption` with
    ///   `id = adoption count + 1` is appended, and the roster is persisted.
    pub fn adopt_pet_on(
        &mut self,
        adopter_id: AdopterId,
        pet_id: PetId,
        date: NaiveDate,
    ) -> ServiceResult<AdoptionOutcome> {
        let outcome = self.apply_adoption(adopter_id, pet_id, date);
        info!(
            "event=pet_adopt module=service status={} adopter_id={} pet_id={}",
            outcome.code(),
            adopter_id,
            pet_id
        );

        if outcome.is_success() {
            self.save()?;
        }
        Ok(outcome)
    }

    fn apply_adoption(
        &mut self,
        adopter_id: AdopterId,
        pet_id: PetId,
        date: NaiveDate,
    ) -> AdoptionOutcome {
        if self.roster.find_adopter(adopter_id).is_none() {
            return AdoptionOutcome::AdopterNotFound;
        }

        let adoption_id = self.roster.next_adoption_id();
        let Some(pet) = self.roster.find_pet_mut(pet_id) else {
            return AdoptionOutcome::PetNotFound;
        };
        if !pet.is_available() {
            return AdoptionOutcome::AlreadyAdopted;
        }

        pet.mark_adopted(adopter_id, date);
        let adopted = pet.clone();
        self.roster.adoptions.push(Adoption {
            id: adoption_id,
            pet_id,
            adopter_id,
            date,
        });
        AdoptionOutcome::Success(adopted)
    }

    /// Lists pets in insertion order, optionally restricted to one status.
    pub fn list_pets(&self, status: Option<PetStatus>) -> Vec<&Pet> {
        self.roster
            .pets
            .iter()
            .filter(|pet| status.map_or(true, |wanted| pet.status == wanted))
            .collect()
    }

    /// Lists available pets passing `filter`, in insertion order.
    pub fn browse_pets(&self, filter: &PetFilter) -> Vec<&Pet> {
        self.roster
            .pets
            .iter()
            .filter(|pet| pet.is_available() && filter.matches(pet))
            .collect()
    }

    pub fn get_pet(&self, id: PetId) -> Option<&Pet> {
        self.roster.find_pet(id)
    }

    pub fn get_adopter(&self, id: AdopterId) -> Option<&Adopter> {
        self.roster.find_adopter(id)
    }

    pub fn list_adopters(&self) -> &[Adopter] {
        &self.roster.adopters
    }

    pub fn list_adoptions(&self) -> &[Adoption] {
        &self.roster.adoptions
    }

    /// Aggregated counts for dashboards.
    pub fn stats(&self) -> RosterStats {
        compute_stats(&self.roster)
    }

    pub fn roster(&self) -> &RosterDocument {
        &self.roster
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Releases the persistence port, e.g. to reopen it.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
