//! Roster domain model.
//!
//! # Responsibility
//! - Define the pet, adopter and adoption records and their wire shape.
//! - Define the roster document that groups all three collections.
//!
//! # Invariants
//! - Record ids are sequential per collection and never reused.
//! - Records are never deleted; pets only move `Available -> Adopted`.

pub mod adopter;
pub mod adoption;
pub mod pet;
pub mod roster;
pub mod validation;
