use chrono::NaiveDate;
use regex::Regex;

use crate::services::pricing::{MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use crate::types::dto::collection::CollectionDetailsRequest;
use crate::types::internal::{CollectionDetails, WasteType, TIME_SLOTS};

/// Accepts international (+244) mobile numbers, local 10-digit mobile
/// numbers and 9-digit fixed lines, with optional space/hyphen
/// separators, as shipped in the product form.
const PHONE_PATTERN: &str =
    r"^\+?244[ -]?(\d[ -]?){9}$|^9[1-59][0-9]([ -]?\d){7}$|^(2\d{2})([ -]?\d){6}$";

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// One field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validates the details step of the collection wizard
///
/// Collects every violation instead of failing fast so the client can
/// surface one message per invalid field. A request only turns into a
/// `CollectionDetails` when every rule passes.
pub struct CollectionValidator {
    phone: Regex,
    email: Regex,
}

impl CollectionValidator {
    pub fn new() -> Self {
        Self {
            phone: Regex::new(PHONE_PATTERN).expect("phone pattern is valid"),
            email: Regex::new(EMAIL_PATTERN).expect("email pattern is valid"),
        }
    }

    /// Validate a details request against all field rules
    ///
    /// # Arguments
    /// * `request` - The submitted details
    /// * `today` - Current day; the collection date must not precede it
    ///
    /// # Returns
    /// * `Ok(CollectionDetails)` - Every field validates
    /// * `Err(Vec<FieldViolation>)` - One entry per invalid field
    pub fn validate(
        &self,
        request: &CollectionDetailsRequest,
        today: NaiveDate,
    ) -> Result<CollectionDetails, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if request.first_name.is_empty() {
            violations.push(FieldViolation::new(
                "first_name",
                "Primeiro nome é obrigatório",
            ));
        }

        if request.last_name.is_empty() {
            violations.push(FieldViolation::new(
                "last_name",
                "Último nome é obrigatório",
            ));
        }

        if request.phone.len() < 9 {
            violations.push(FieldViolation::new(
                "phone",
                "Telefone deve ter pelo menos 9 dígitos",
            ));
        } else if !self.phone.is_match(&request.phone) {
            violations.push(FieldViolation::new(
                "phone",
                "Formato de telefone angolano inválido",
            ));
        }

        if !self.email.is_match(&request.email) {
            violations.push(FieldViolation::new("email", "Email inválido"));
        }

        if request.address.len() < 5 {
            violations.push(FieldViolation::new("address", "Endereço é obrigatório"));
        }

        let collection_date = match NaiveDate::parse_from_str(&request.collection_date, "%Y-%m-%d")
        {
            Ok(date) if date < today => {
                violations.push(FieldViolation::new(
                    "collection_date",
                    "Data da recolha não pode ser anterior a hoje",
                ));
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(FieldViolation::new(
                    "collection_date",
                    "Data da recolha é obrigatória",
                ));
                None
            }
        };

        if request.collection_time.is_empty() {
            violations.push(FieldViolation::new(
                "collection_time",
                "Horário da recolha é obrigatório",
            ));
        } else if !TIME_SLOTS.contains(&request.collection_time.as_str()) {
            violations.push(FieldViolation::new(
                "collection_time",
                "Horário da recolha inválido",
            ));
        }

        let mut waste_types: Vec<WasteType> = Vec::new();
        for id in &request.waste_types {
            match WasteType::from_id(id) {
                Some(waste_type) if !waste_types.contains(&waste_type) => {
                    waste_types.push(waste_type);
                }
                Some(_) => {}
                None => {
                    violations.push(FieldViolation::new(
                        "waste_types",
                        "Tipo de resíduo inválido",
                    ));
                }
            }
        }
        if request.waste_types.is_empty() {
            violations.push(FieldViolation::new(
                "waste_types",
                "Selecione ao menos um tipo de resíduo",
            ));
        }

        if !request.quantity_kg.is_finite() || request.quantity_kg < MIN_WEIGHT_KG {
            violations.push(FieldViolation::new(
                "quantity_kg",
                "Quantidade deve ser maior que 0 Kg",
            ));
        } else if request.quantity_kg > MAX_WEIGHT_KG {
            violations.push(FieldViolation::new(
                "quantity_kg",
                "Quantidade máxima de 1000 Kg",
            ));
        }

        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(CollectionDetails {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            address: request.address.clone(),
            collection_date: collection_date.expect("no violations implies a parsed date"),
            collection_time: request.collection_time.clone(),
            waste_types,
            quantity_kg: request.quantity_kg,
            notes: request
                .notes
                .as_ref()
                .filter(|notes| !notes.is_empty())
                .cloned(),
        })
    }
}

impl Default for CollectionValidator {
    fn default() -> Self {
        Self::new()
    }
}
