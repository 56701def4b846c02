use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recognition::errors::RecognitionError;
use business::domain::recognition::matcher::MatchResult;
use business::domain::recognition::use_cases::recognize::{
    RecognizeProductParams, RecognizeProductUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recognition::dto::{RecognitionResponse, RecognizeProductRequest};
use crate::api::tags::ApiTags;

pub struct RecognitionApi {
    recognize_use_case: Arc<dyn RecognizeProductUseCase>,
}

impl RecognitionApi {
    pub fn new(recognize_use_case: Arc<dyn RecognizeProductUseCase>) -> Self {
        Self { recognize_use_case }
    }
}

/// Product recognition API
///
/// Identifies catalog products from photographs of their packaging.
#[OpenApi]
impl RecognitionApi {
    /// Recognize a product from an image
    ///
    /// Normalizes the uploaded photograph, reads its printed text and returns
    /// the catalog product whose name or description matches best.
    ///
    /// ## Responses
    /// - `200`: matched product with the extracted text and score
    /// - `404`: no product scored above the match threshold
    /// - `422`: the upload is not a usable image
    /// - `503`: the OCR engine failed
    #[oai(
        path = "/api/recognition/recognize",
        method = "post",
        tag = "ApiTags::Recognition"
    )]
    async fn recognize_product(&self, form: RecognizeProductRequest) -> RecognizeProductResponse {
        let image = match form.file.into_vec().await {
            Ok(bytes) => bytes,
            Err(_) => {
                return RecognizeProductResponse::UnprocessableEntity(Json(ErrorResponse::new(
                    "UnprocessableImage",
                    "recognition.upload_unreadable",
                )));
            }
        };

        match self
            .recognize_use_case
            .execute(RecognizeProductParams { image })
            .await
        {
            Ok(outcome) if outcome.result == MatchResult::NoMatch => {
                RecognizeProductResponse::NotFound(Json(ErrorResponse::new(
                    "NotFound",
                    "recognition.no_match",
                )))
            }
            Ok(outcome) => RecognizeProductResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let respond: fn(Json<ErrorResponse>) -> RecognizeProductResponse = match &err {
                    RecognitionError::Decode(_) | RecognitionError::Geometry { .. } => {
                        RecognizeProductResponse::UnprocessableEntity
                    }
                    RecognitionError::Extraction(_) => RecognizeProductResponse::ServiceUnavailable,
                    RecognitionError::Repository(_) | RecognitionError::Worker(_) => {
                        RecognizeProductResponse::InternalError
                    }
                };
                let (_, json) = err.into_error_response();
                respond(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecognizeProductResponse {
    #[oai(status = 200)]
    Ok(Json<RecognitionResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
