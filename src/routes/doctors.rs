use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{DoctorMatcher, DoctorQuery, MatchError};
use crate::models::{FindDoctorsRequest, FindDoctorsResponse, HealthResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: DoctorMatcher,
}

/// Configure all doctor search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/health", web::get().to(health_check))
        .route("/find-doctors", web::post().to(find_doctors));
}

async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Doctor Finder Backend is running!")
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let data = state.matcher.reference_data();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        doctors: data.doctors.len(),
        symptoms: data.symptom_map.len(),
    })
}

/// Find doctors endpoint
///
/// POST /find-doctors
///
/// Request body:
/// ```json
/// {
///   "symptoms": "headache and fever",
///   "city": "pune",
///   "lat": 18.52,
///   "lng": 73.85
/// }
/// ```
async fn find_doctors(
    state: web::Data<AppState>,
    req: web::Json<FindDoctorsRequest>,
) -> Result<HttpResponse, MatchError> {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_doctors request: {}", errors);
        return Err(MatchError::InvalidQuery(errors.to_string()));
    }

    let query = DoctorQuery::try_from(req)?;

    tracing::info!(
        "Finding doctors for symptoms: {:?}, city: {:?}, located: {}",
        query.symptoms,
        query.city,
        query.origin.is_some()
    );

    let result = state.matcher.find_doctors(&query)?;

    Ok(HttpResponse::Ok().json(FindDoctorsResponse {
        specialization: result.specialization,
        doctors: result.doctors,
    }))
}
