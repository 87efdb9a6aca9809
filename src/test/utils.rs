// Shared builders for unit tests

use chrono::NaiveDate;

use crate::services::CollectionValidator;
use crate::types::dto::collection::CollectionDetailsRequest;
use crate::types::internal::CollectionDetails;

/// Fixed "today" so date rules are deterministic in tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 15).expect("valid date")
}

/// A details request that passes every validation rule
pub fn valid_details_request() -> CollectionDetailsRequest {
    CollectionDetailsRequest {
        first_name: "João".to_string(),
        last_name: "Silva".to_string(),
        phone: "+244 923 456 789".to_string(),
        email: "joao.silva@email.com".to_string(),
        address: "Rua Exemplo, Bairro Azul, Casa 123".to_string(),
        collection_date: "2024-07-16".to_string(),
        collection_time: "09:00 - 10:00".to_string(),
        waste_types: vec!["plastico".to_string(), "vidro".to_string()],
        quantity_kg: 5.5,
        notes: Some("Deixar na portaria".to_string()),
    }
}

/// The validated form of `valid_details_request`
pub fn valid_details() -> CollectionDetails {
    CollectionValidator::new()
        .validate(&valid_details_request(), today())
        .expect("fixture request should validate")
}
