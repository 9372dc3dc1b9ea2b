// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod symptoms;

pub use distance::{distance_km, haversine_distance, round_km};
pub use filters::{matches_city, matches_specialization, normalize_city};
pub use matcher::{DoctorMatcher, DoctorQuery, MatchError, MatchResult, UNRECOGNIZED_SYMPTOMS_MESSAGE};
pub use symptoms::{resolve_specializations, tokenize_symptoms, Specializations};
