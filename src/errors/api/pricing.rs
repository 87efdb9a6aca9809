use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Errors surfaced by the quote endpoints
#[derive(ApiResponse, Debug)]
pub enum PricingError {
    /// Quantity outside the accepted input bounds
    #[oai(status = 400)]
    InvalidQuantity(Json<ErrorResponse>),
}

impl PricingError {
    /// Create an InvalidQuantity error
    pub fn invalid_quantity(message: String) -> Self {
        PricingError::InvalidQuantity(Json(ErrorResponse {
            error: "invalid_quantity".to_string(),
            message,
            status_code: 400,
        }))
    }

    pub fn message(&self) -> String {
        match self {
            PricingError::InvalidQuantity(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
