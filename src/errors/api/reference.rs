use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Errors surfaced by the reference-data endpoints
#[derive(ApiResponse, Debug)]
pub enum ReferenceError {
    /// No reference-data base URL is configured
    #[oai(status = 503)]
    NotConfigured(Json<ErrorResponse>),

    /// The upstream fetch failed; the client should disable the
    /// dependent selector and offer retry
    #[oai(status = 502)]
    FetchFailed(Json<ErrorResponse>),
}

impl ReferenceError {
    /// Create a NotConfigured error
    pub fn not_configured() -> Self {
        ReferenceError::NotConfigured(Json(ErrorResponse {
            error: "reference_not_configured".to_string(),
            message: "A fonte de dados de regiões não está configurada".to_string(),
            status_code: 503,
        }))
    }

    /// Create a FetchFailed error
    pub fn fetch_failed() -> Self {
        ReferenceError::FetchFailed(Json(ErrorResponse {
            error: "reference_fetch_failed".to_string(),
            message: "Não foi possível carregar as regiões. Tente novamente.".to_string(),
            status_code: 502,
        }))
    }

    pub fn message(&self) -> String {
        match self {
            ReferenceError::NotConfigured(json) => json.0.message.clone(),
            ReferenceError::FetchFailed(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
