use crate::core::{
    distance::distance_km,
    filters::{matches_city, matches_specialization, normalize_city},
    symptoms::resolve_specializations,
};
use crate::models::{Coordinates, FindDoctorsRequest, MatchedDoctor};
use crate::services::ReferenceData;
use std::sync::Arc;
use thiserror::Error;

/// Message returned when no specialization can be resolved
pub const UNRECOGNIZED_SYMPTOMS_MESSAGE: &str =
    "Symptoms not recognized. Please enter valid medical symptoms.";

/// Client-facing errors of the matching engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("{}", UNRECOGNIZED_SYMPTOMS_MESSAGE)]
    UnrecognizedSymptoms,
}

/// A validated doctor search
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorQuery {
    pub symptoms: String,
    pub city: Option<String>,
    pub origin: Option<Coordinates>,
}

impl DoctorQuery {
    /// Build a query, rejecting a half-specified or out-of-range location
    pub fn new(
        symptoms: impl Into<String>,
        city: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Self, MatchError> {
        let origin = match (lat, lng) {
            (Some(lat), Some(lng)) => {
                if !lat.is_finite() || !lng.is_finite() {
                    return Err(MatchError::InvalidQuery(
                        "lat and lng must be finite numbers".to_string(),
                    ));
                }
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                    return Err(MatchError::InvalidQuery(
                        "lat must be within [-90, 90] and lng within [-180, 180]".to_string(),
                    ));
                }
                Some(Coordinates { lat, lng })
            }
            (None, None) => None,
            _ => {
                return Err(MatchError::InvalidQuery(
                    "lat and lng must be supplied together".to_string(),
                ))
            }
        };

        Ok(Self {
            symptoms: symptoms.into(),
            city,
            origin,
        })
    }
}

impl TryFrom<FindDoctorsRequest> for DoctorQuery {
    type Error = MatchError;

    fn try_from(req: FindDoctorsRequest) -> Result<Self, Self::Error> {
        DoctorQuery::new(req.symptoms, req.city, req.lat, req.lng)
    }
}

/// Result of a doctor search
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub specialization: String,
    pub doctors: Vec<MatchedDoctor>,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Resolve specializations from the symptom text
/// 2. Filter the roster by specialization and city
/// 3. Attach distances from the requester
/// 4. Sort nearest-first
///
/// The roster is shared read-only; each search works on its own copies.
#[derive(Debug, Clone)]
pub struct DoctorMatcher {
    data: Arc<ReferenceData>,
}

impl DoctorMatcher {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.data
    }

    /// Find doctors for a query
    ///
    /// When the query carries coordinates, doctors without coordinates are
    /// dropped and the rest are ordered by distance. Without coordinates the
    /// roster order is kept and no distance is reported.
    pub fn find_doctors(&self, query: &DoctorQuery) -> Result<MatchResult, MatchError> {
        let specializations = resolve_specializations(&self.data.symptom_map, &query.symptoms);
        if specializations.is_empty() {
            tracing::debug!("No specialization resolved from symptoms: {:?}", query.symptoms);
            return Err(MatchError::UnrecognizedSymptoms);
        }

        let specialization = specializations.display();
        let city = normalize_city(query.city.as_deref());

        tracing::debug!(
            "Resolved specializations [{}], city filter: {:?}",
            specialization,
            city
        );

        let candidates = self
            .data
            .doctors
            .iter()
            // Stage 2: specialization + city
            .filter(|doctor| matches_specialization(doctor, &specializations))
            .filter(|doctor| matches_city(doctor, city.as_deref()));

        let doctors = match query.origin {
            Some(origin) => {
                // Stage 3: distances, skipping doctors we cannot place
                let mut located: Vec<MatchedDoctor> = candidates
                    .filter_map(|doctor| {
                        let at = doctor.coordinates()?;
                        Some(MatchedDoctor::from_doctor(doctor, Some(distance_km(origin, at))))
                    })
                    .collect();

                // Stage 4: stable sort keeps roster order on ties
                located.sort_by(|a, b| {
                    a.distance_km
                        .partial_cmp(&b.distance_km)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                located
            }
            None => candidates
                .map(|doctor| MatchedDoctor::from_doctor(doctor, None))
                .collect(),
        };

        tracing::info!(
            "Matched {} doctors for [{}]",
            doctors.len(),
            specialization
        );

        Ok(MatchResult {
            specialization,
            doctors,
        })
    }
}
