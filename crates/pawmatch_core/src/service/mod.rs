//! Roster use-case services.
//!
//! # Responsibility
//! - Orchestrate roster mutations and their persistence.
//! - Keep matching and statistics independent from storage details.

pub mod matching;
pub mod roster_service;
pub mod seed;
pub mod stats;
