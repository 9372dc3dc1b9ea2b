use serde::{Deserialize, Serialize};
use crate::models::domain::MatchedDoctor;

/// Response for the find doctors endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindDoctorsResponse {
    pub specialization: String,
    pub doctors: Vec<MatchedDoctor>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub doctors: usize,
    pub symptoms: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
