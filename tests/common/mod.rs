// Shared helpers for integration tests

use applixo_backend::services::CollectionValidator;
use applixo_backend::types::dto::collection::CollectionDetailsRequest;
use applixo_backend::types::internal::CollectionDetails;
use chrono::NaiveDate;

/// Fixed "today" so date rules are deterministic
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
        collection_time: "14:00 - 15:00".to_string(),
        waste_types: vec!["plastico".to_string(), "papel".to_string()],
        quantity_kg: 5.5,
        notes: None,
    }
}

/// The validated form of `valid_details_request`
pub fn valid_details() -> CollectionDetails {
    CollectionValidator::new()
        .validate(&valid_details_request(), today())
        .expect("fixture request should validate")
}
