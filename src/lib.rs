//! Doctor Finder - maps free-text symptoms to specialists and ranks them by distance
//!
//! The reference dataset (symptom map and doctor roster) is loaded once and
//! shared read-only; every search resolves specializations, filters the roster
//! and sorts the matches nearest-first.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{DoctorMatcher, DoctorQuery, MatchError, MatchResult, distance::haversine_distance};
pub use crate::models::{Doctor, MatchedDoctor, SymptomMap, FindDoctorsRequest, FindDoctorsResponse};
pub use crate::services::{DataLoadError, ReferenceData};
