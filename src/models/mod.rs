// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinates, Doctor, MatchedDoctor, SymptomMap};
pub use requests::FindDoctorsRequest;
pub use responses::{ErrorResponse, FindDoctorsResponse, HealthResponse};
