//! Numerology Search - Pythagorean numerology engine and master-number name search
//!
//! The engine turns a full name and a birth date into four metrics (life
//! path, soul urge, expression, personality). The search walks first ×
//! middle name combinations for a fixed last name and keeps the ones that
//! produce the master numbers 11, 22 or 33.

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_profile, life_path, reduce, CandidateSearch, SearchOutcome};
pub use error::{NumerologyError, RequestError};
pub use models::{BirthDate, Component, Gender, MasterNumber, NumerologyProfile, SearchCriteria, SearchRequest, SearchResult};
pub use services::{NameLists, NameSource};
