use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use crate::core::MatchError;
use crate::models::ErrorResponse;

impl error::ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::InvalidQuery(_) | MatchError::UnrecognizedSymptoms => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Handle JSON payload errors
///
/// Missing fields and wrongly typed values surface here before the handler runs.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    MatchError::InvalidQuery(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UNRECOGNIZED_SYMPTOMS_MESSAGE;
    use actix_web::ResponseError;

    #[test]
    fn test_client_errors_are_bad_request() {
        assert_eq!(MatchError::UnrecognizedSymptoms.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            MatchError::InvalidQuery("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unrecognized_message() {
        assert_eq!(MatchError::UnrecognizedSymptoms.to_string(), UNRECOGNIZED_SYMPTOMS_MESSAGE);
    }
}
