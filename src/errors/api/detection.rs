use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Errors surfaced by the detect-item endpoint
#[derive(ApiResponse, Debug)]
pub enum DetectionError {
    /// The supplied data URI is not a decodable image payload
    #[oai(status = 400)]
    InvalidImage(Json<ErrorResponse>),

    /// The classification call failed; the client gets the generic
    /// product message, the cause goes to the log only
    #[oai(status = 502)]
    DetectionFailed(Json<ErrorResponse>),

    /// No API key is configured for the classification model
    #[oai(status = 503)]
    NotConfigured(Json<ErrorResponse>),
}

impl DetectionError {
    /// Create an InvalidImage error
    pub fn invalid_image(message: String) -> Self {
        DetectionError::InvalidImage(Json(ErrorResponse {
            error: "invalid_image".to_string(),
            message,
            status_code: 400,
        }))
    }

    /// Create a DetectionFailed error with the generic user-facing text
    pub fn detection_failed() -> Self {
        DetectionError::DetectionFailed(Json(ErrorResponse {
            error: "detection_failed".to_string(),
            message: "Falha ao detectar o item. Por favor, tente novamente.".to_string(),
            status_code: 502,
        }))
    }

    /// Create a NotConfigured error
    pub fn not_configured() -> Self {
        DetectionError::NotConfigured(Json(ErrorResponse {
            error: "detector_not_configured".to_string(),
            message: "O detector de itens não está configurado".to_string(),
            status_code: 503,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            DetectionError::InvalidImage(json) => json.0.message.clone(),
            DetectionError::DetectionFailed(json) => json.0.message.clone(),
            DetectionError::NotConfigured(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
