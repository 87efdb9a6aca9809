use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::{CollectionDetails, PaymentMethod, WasteType, WizardStep};

/// Request model for the details step of the collection wizard
///
/// Free-form fields arrive as strings so validation can answer with one
/// message per field instead of failing deserialization wholesale.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct CollectionDetailsRequest {
    /// Requester first name
    pub first_name: String,

    /// Requester last name
    pub last_name: String,

    /// Angolan mobile or fixed-line phone number
    pub phone: String,

    /// Contact email address
    pub email: String,

    /// Free-text collection address
    pub address: String,

    /// Collection date in `YYYY-MM-DD` format; must not precede today
    pub collection_date: String,

    /// One of the fixed one-hour collection slots
    pub collection_time: String,

    /// Material category ids (`plastico`, `papel`, `eletronicos`,
    /// `vidro`, `outros`); at least one required
    pub waste_types: Vec<String>,

    /// Estimated waste weight in kilograms (0.1 to 1000)
    pub quantity_kg: f64,

    /// Optional free-text notes for the collection team
    pub notes: Option<String>,
}

/// One field that failed validation
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending request field
    pub field: String,

    /// User-facing message for this field
    pub message: String,
}

/// Error response carrying per-field validation messages
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    /// Error type or category
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// One entry per invalid field
    pub fields: Vec<FieldError>,
}

/// Request model for selecting a payment method
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct PaymentSelectionRequest {
    /// Chosen payment method
    pub method: PaymentMethod,
}

/// Snapshot of the collection details held by a wizard session
#[derive(Object, Debug)]
pub struct CollectionDetailsView {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,

    /// Collection date in `YYYY-MM-DD` format
    pub collection_date: String,

    pub collection_time: String,
    pub waste_types: Vec<WasteType>,

    /// Display labels matching `waste_types`
    pub waste_type_labels: Vec<String>,

    pub quantity_kg: f64,
    pub notes: Option<String>,
}

impl From<&CollectionDetails> for CollectionDetailsView {
    fn from(details: &CollectionDetails) -> Self {
        Self {
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            phone: details.phone.clone(),
            email: details.email.clone(),
            address: details.address.clone(),
            collection_date: details.collection_date.format("%Y-%m-%d").to_string(),
            collection_time: details.collection_time.clone(),
            waste_types: details.waste_types.clone(),
            waste_type_labels: details
                .waste_types
                .iter()
                .map(|t| t.label().to_string())
                .collect(),
            quantity_kg: details.quantity_kg,
            notes: details.notes.clone(),
        }
    }
}

/// Response model describing a wizard session
#[derive(Object, Debug)]
pub struct CollectionSessionResponse {
    /// Session identifier (UUID)
    pub session_id: String,

    /// Current wizard step
    pub step: WizardStep,

    /// Collection details as currently entered
    pub details: CollectionDetailsView,

    /// Selected payment method, if any
    pub payment_method: Option<PaymentMethod>,

    /// Estimated cost in AOA, recomputed from the current quantity
    pub cost_kz: f64,

    /// Estimated cost formatted for display
    pub cost_display: String,

    /// Confirmation or cancellation message on terminal steps
    pub status_message: Option<String>,
}
