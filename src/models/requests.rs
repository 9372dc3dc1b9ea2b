use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find doctors for a set of symptoms
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindDoctorsRequest {
    pub symptoms: String,
    #[serde(default)]
    pub city: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default, alias = "lon", alias = "longitude")]
    pub lng: Option<f64>,
}
