use chrono::NaiveDate;
use pawmatch_core::{
    AdoptionOutcome, InMemoryStorage, NewAdopter, NewPet, PetStatus, Preferences,
    RecordValidationError, RosterService, ServiceError,
};

fn open_empty() -> RosterService<InMemoryStorage> {
    let (service, corruption) = RosterService::open(InMemoryStorage::new());
    assert!(corruption.is_none());
    service
}

fn new_pet(name: &str, species: &str, size: &str, age: f64, temperament: &[&str]) -> NewPet {
    NewPet {
        name: name.to_string(),
        species: species.to_string(),
        breed: "mixed".to_string(),
        age,
        gender: "female".to_string(),
        size: size.to_string(),
        temperament: temperament.iter().map(|tag| tag.to_string()).collect(),
        description: String::new(),
    }
}

fn new_adopter(preferences: Preferences) -> NewAdopter {
    NewAdopter {
        name: "Robin".to_string(),
        contact: "robin@example.com".to_string(),
        living_situation: "apartment".to_string(),
        experience: vec!["first pet".to_string()],
        preferences,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).unwrap()
}

#[test]
fn add_pet_assigns_sequential_ids_and_available_status() {
    let mut service = open_empty();

    let first = service
        .add_pet(new_pet("Rex", "dog", "large", 4.0, &[]))
        .unwrap();
    let second = service
        .add_pet(new_pet("Tom", "cat", "small", 1.0, &[]))
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(second.status, PetStatus::Available);
    assert_eq!(second.adoption_date, None);
    assert_eq!(second.adopter_id, None);
    assert_eq!(service.storage().write_count(), 2);
}

#[test]
fn add_pet_rejects_negative_age_without_persisting() {
    let mut service = open_empty();

    let err = service
        .add_pet(new_pet("Rex", "dog", "large", -2.0, &[]))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(RecordValidationError::InvalidAge(age)) if age == -2.0
    ));
    assert!(service.list_pets(None).is_empty());
    assert_eq!(service.storage().write_count(), 0);
}

#[test]
fn add_pet_accepts_blank_text_fields() {
    let mut service = open_empty();

    let pet = service.add_pet(new_pet("", "", "", 1.0, &[])).unwrap();
    assert_eq!(pet.id, 1);
    assert_eq!(service.storage().write_count(), 1);
}

#[test]
fn register_adopter_allows_duplicates_and_requires_contact() {
    let mut service = open_empty();

    let first = service
        .register_adopter(new_adopter(Preferences::default()))
        .unwrap();
    let second = service
        .register_adopter(new_adopter(Preferences::default()))
        .unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.name, second.name);

    let mut missing_contact = new_adopter(Preferences::default());
    missing_contact.contact = String::new();
    let err = service.register_adopter(missing_contact).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(RecordValidationError::EmptyField("contact"))
    ));
    assert_eq!(service.list_adopters().len(), 2);
}

#[test]
fn species_only_preference_matches_only_that_species() {
    let mut service = open_empty();
    service
        .add_pet(new_pet("Rex", "dog", "large", 4.0, &["calm"]))
        .unwrap();
    service
        .add_pet(new_pet("Tom", "cat", "small", 1.0, &["calm"]))
        .unwrap();
    let adopter = service
        .register_adopter(new_adopter(Preferences {
            species: strings(&["dog"]),
            ..Preferences::default()
        }))
        .unwrap();

    let matched = service.match_pets(adopter.id);
    let names: Vec<&str> = matched.iter().map(|pet| pet.name.as_str()).collect();
    assert_eq!(names, vec!["Rex"]);
}

#[test]
fn match_pets_keeps_roster_order_and_skips_adopted_pets() {
    let mut service = open_empty();
    service
        .add_pet(new_pet("Alpha", "dog", "small", 0.5, &[]))
        .unwrap();
    service
        .add_pet(new_pet("Bravo", "dog", "small", 9.0, &[]))
        .unwrap();
    service
        .add_pet(new_pet("Charlie", "dog", "small", 2.0, &[]))
        .unwrap();
    let adopter = service
        .register_adopter(new_adopter(Preferences::default()))
        .unwrap();

    let ids: Vec<u64> = service.match_pets(adopter.id).iter().map(|pet| pet.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    service
        .adopt_pet_on(adopter.id, 2, day(2024, 5, 1))
        .unwrap();
    let ids: Vec<u64> = service.match_pets(adopter.id).iter().map(|pet| pet.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn match_pets_applies_age_or_temperament_soft_filter() {
    let mut service = open_empty();
    service
        .add_pet(new_pet("Old", "cat", "small", 10.0, &["calm"]))
        .unwrap();
    service
        .add_pet(new_pet("Kit", "cat", "small", 0.5, &["playful"]))
        .unwrap();
    service
        .add_pet(new_pet("Mid", "cat", "small", 4.0, &["shy"]))
        .unwrap();
    let adopter = service
        .register_adopter(new_adopter(Preferences {
            species: strings(&["cat"]),
            age: strings(&["senior"]),
            temperament: strings(&["playful"]),
            ..Preferences::default()
        }))
        .unwrap();

    let names: Vec<&str> = service
        .match_pets(adopter.id)
        .iter()
        .map(|pet| pet.name.as_str())
        .collect();
    assert_eq!(names, vec!["Old", "Kit"]);
}

#[test]
fn match_pets_for_unknown_adopter_is_empty() {
    let mut service = open_empty();
    service
        .add_pet(new_pet("Rex", "dog", "large", 4.0, &[]))
        .unwrap();
    assert!(service.match_pets(42).is_empty());
}

#[test]
fn adopting_twice_succeeds_once_and_logs_one_adoption() {
    let mut service = open_empty();
    let pet = service
        .add_pet(new_pet("Rex", "dog", "large", 4.0, &[]))
        .unwrap();
    let adopter = service
        .register_adopter(new_adopter(Preferences::default()))
        .unwrap();
    let date = day(2024, 3, 15);

    let first = service.adopt_pet_on(adopter.id, pet.id, date).unwrap();
    let adopted = match first {
        AdoptionOutcome::Success(pet) => pet,
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(adopted.status, PetStatus::Adopted);
    assert_eq!(adopted.adoption_date, Some(date));
    assert_eq!(adopted.adopter_id, Some(adopter.id));

    let second = service.adopt_pet_on(adopter.id, pet.id, date).unwrap();
    assert_eq!(second, AdoptionOutcome::AlreadyAdopted);

    let adoptions = service.list_adoptions();
    assert_eq!(adoptions.len(), 1);
    assert_eq!(adoptions[0].id, 1);
    assert_eq!(adoptions[0].pet_id, pet.id);
    assert_eq!(adoptions[0].adopter_id, adopter.id);
    assert_eq!(adoptions[0].date, date);
}

#[test]
fn adopt_with_unknown_adopter_leaves_pet_available() {
    let mut service = open_empty();
    let pet = service
        .add_pet(new_pet("Rex", "dog", "large", 4.0, &[]))
        .unwrap();
    let writes_before = service.storage().write_count();

    let outcome = service.adopt_pet(999, pet.id).unwrap();
    assert_eq!(outcome, AdoptionOutcome::AdopterNotFound);
    assert_eq!(service.get_pet(pet.id).unwrap().status, PetStatus::Available);
    assert!(service.list_adoptions().is_empty());
    assert_eq!(service.storage().write_count(), writes_before);
}

#[test]
fn adopt_with_unknown_pet_reports_pet_not_found() {
    let mut service = open_empty();
    let adopter = service
        .register_adopter(new_adopter(Preferences::default()))
        .unwrap();

    let outcome = service.adopt_pet(adopter.id, 7).unwrap();
    assert_eq!(outcome, AdoptionOutcome::PetNotFound);
    assert!(!outcome.is_success());
}

#[test]
fn adopt_pet_uses_todays_date() {
    let mut service = open_empty();
    let pet = service
        .add_pet(new_pet("Rex", "dog", "large", 4.0, &[]))
        .unwrap();
    let adopter = service
        .register_adopter(new_adopter(Preferences::default()))
        .unwrap();

    let before = chrono::Local::now().date_naive();
    let outcome = service.adopt_pet(adopter.id, pet.id).unwrap();
    let after = chrono::Local::now().date_naive();

    let AdoptionOutcome::Success(adopted) = outcome else {
        panic!("expected success");
    };
    let date = adopted.adoption_date.unwrap();
    assert!(date == before || date == after);
}

#[test]
fn list_pets_filters_by_status_in_insertion_order() {
    let mut service = open_empty();
    for name in ["A", "B", "C"] {
        service
            .add_pet(new_pet(name, "dog", "small", 1.0, &[]))
            .unwrap();
    }
    let adopter = service
        .register_adopter(new_adopter(Preferences::default()))
        .unwrap();
    service
        .adopt_pet_on(adopter.id, 2, day(2024, 1, 2))
        .unwrap();

    let all: Vec<&str> = service
        .list_pets(None)
        .iter()
        .map(|pet| pet.name.as_str())
        .collect();
    let available: Vec<&str> = service
        .list_pets(Some(PetStatus::Available))
        .iter()
        .map(|pet| pet.name.as_str())
        .collect();
    let adopted: Vec<&str> = service
        .list_pets(Some(PetStatus::Adopted))
        .iter()
        .map(|pet| pet.name.as_str())
        .collect();

    assert_eq!(all, vec!["A", "B", "C"]);
    assert_eq!(available, vec!["A", "C"]);
    assert_eq!(adopted, vec!["B"]);
}

#[test]
fn adoption_outcome_messages_are_user_facing() {
    assert_eq!(
        AdoptionOutcome::AlreadyAdopted.to_string(),
        "pet has already been adopted"
    );
    assert_eq!(
        AdoptionOutcome::AdopterNotFound.to_string(),
        "adopter not found"
    );
}
