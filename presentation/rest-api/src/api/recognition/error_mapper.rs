use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recognition::errors::RecognitionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecognitionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RecognitionError::Decode(_) | RecognitionError::Geometry { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UnprocessableImage",
                "recognition.unprocessable_image",
            ),
            RecognitionError::Extraction(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "RecognitionServiceUnavailable",
                "recognition.service_unavailable",
            ),
            RecognitionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "recognition.catalog_unavailable",
            ),
            RecognitionError::Worker(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "recognition.worker_failed",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_decode_and_geometry_to_unprocessable_entity() {
        let (decode_status, decode_json) =
            RecognitionError::Decode("bad magic".to_string()).into_error_response();
        let (geometry_status, _) = RecognitionError::Geometry {
            width: 0,
            height: 0,
        }
        .into_error_response();

        assert_eq!(decode_status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(geometry_status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(decode_json.0.message, "recognition.unprocessable_image");
    }

    #[test]
    fn should_map_extraction_to_service_unavailable() {
        let (status, json) =
            RecognitionError::Extraction("timeout".to_string()).into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.name, "RecognitionServiceUnavailable");
    }

    #[test]
    fn should_map_repository_to_internal_error_without_driver_detail() {
        let (status, json) = RecognitionError::Repository(RepositoryError::DatabaseError(
            "password authentication failed".to_string(),
        ))
        .into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "recognition.catalog_unavailable");
    }

    #[test]
    fn should_map_worker_failure_to_internal_error() {
        let (status, json) =
            RecognitionError::Worker("task cancelled".to_string()).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "recognition.worker_failed");
    }
}
