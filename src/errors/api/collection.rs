use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::collection::{FieldError, ValidationErrorResponse};
use crate::types::dto::common::ErrorResponse;
use crate::types::internal::WizardStep;

/// Errors surfaced by the collection-wizard endpoints
#[derive(ApiResponse, Debug)]
pub enum CollectionError {
    /// One or more details fields failed validation
    #[oai(status = 422)]
    ValidationFailed(Json<ValidationErrorResponse>),

    /// No wizard session exists for the given id
    #[oai(status = 404)]
    SessionNotFound(Json<ErrorResponse>),

    /// The requested transition is not allowed from the current step
    #[oai(status = 409)]
    InvalidTransition(Json<ErrorResponse>),
}

impl CollectionError {
    /// Create a ValidationFailed error with one entry per invalid field
    pub fn validation_failed(fields: Vec<FieldError>) -> Self {
        CollectionError::ValidationFailed(Json(ValidationErrorResponse {
            error: "validation_failed".to_string(),
            message: "Verifique os campos destacados".to_string(),
            status_code: 422,
            fields,
        }))
    }

    /// Create a SessionNotFound error
    pub fn session_not_found(session_id: &str) -> Self {
        CollectionError::SessionNotFound(Json(ErrorResponse {
            error: "session_not_found".to_string(),
            message: format!("Sessão de recolha não encontrada: {}", session_id),
            status_code: 404,
        }))
    }

    /// Create an InvalidTransition error for an operation attempted in
    /// the wrong step
    pub fn invalid_transition(step: WizardStep, message: &str) -> Self {
        CollectionError::InvalidTransition(Json(ErrorResponse {
            error: "invalid_transition".to_string(),
            message: format!("{} (passo atual: {:?})", message, step),
            status_code: 409,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            CollectionError::ValidationFailed(json) => json.0.message.clone(),
            CollectionError::SessionNotFound(json) => json.0.message.clone(),
            CollectionError::InvalidTransition(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
