use chrono::NaiveDate;
use poem_openapi::Enum;
use serde::{Deserialize, Serialize};

/// Address used to prefill the collection form, taken from the stored
/// profile of the demo account.
pub const USER_DEFAULT_ADDRESS: &str = "Zango 8000, Viana, Luanda";

/// One-hour collection windows offered by the scheduler
pub const TIME_SLOTS: [&str; 6] = [
    "09:00 - 10:00",
    "10:00 - 11:00",
    "11:00 - 12:00",
    "14:00 - 15:00",
    "15:00 - 16:00",
    "16:00 - 17:00",
];

/// Material categories a collection can contain
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WasteType {
    Plastico,
    Papel,
    Eletronicos,
    Vidro,
    Outros,
}

impl WasteType {
    pub const ALL: [WasteType; 5] = [
        WasteType::Plastico,
        WasteType::Papel,
        WasteType::Eletronicos,
        WasteType::Vidro,
        WasteType::Outros,
    ];

    /// Stable identifier used on the wire
    pub fn id(&self) -> &'static str {
        match self {
            WasteType::Plastico => "plastico",
            WasteType::Papel => "papel",
            WasteType::Eletronicos => "eletronicos",
            WasteType::Vidro => "vidro",
            WasteType::Outros => "outros",
        }
    }

    /// Display label as shown in the product
    pub fn label(&self) -> &'static str {
        match self {
            WasteType::Plastico => "Plásticos",
            WasteType::Papel => "Papel/Cartão",
            WasteType::Eletronicos => "Eletrônicos",
            WasteType::Vidro => "Vidro",
            WasteType::Outros => "Outros",
        }
    }

    pub fn from_id(id: &str) -> Option<WasteType> {
        WasteType::ALL.iter().copied().find(|t| t.id() == id)
    }
}

/// Payment options offered at the payment step
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    PrePago,
    Eletronico,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::PrePago => "Pré-pago",
            PaymentMethod::Eletronico => "Pagamento Eletrônico",
        }
    }
}

/// Steps of the collection-request wizard
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Details,
    Payment,
    Review,
    Confirmed,
    Cancelled,
}

/// A validated collection request
///
/// Only produced by `CollectionValidator::validate` or by
/// `CollectionDetails::defaults`; every instance either passed full
/// validation or carries the documented form defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub collection_date: NaiveDate,
    pub collection_time: String,
    pub waste_types: Vec<WasteType>,
    pub quantity_kg: f64,
    pub notes: Option<String>,
}

impl CollectionDetails {
    /// Initial form values: empty contact fields, the profile address,
    /// today's date, no slot, no materials, 1 kg.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: USER_DEFAULT_ADDRESS.to_string(),
            collection_date: today,
            collection_time: String::new(),
            waste_types: Vec::new(),
            quantity_kg: 1.0,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waste_type_ids_round_trip() {
        for waste_type in WasteType::ALL {
            assert_eq!(WasteType::from_id(waste_type.id()), Some(waste_type));
        }
        assert_eq!(WasteType::from_id("metal"), None);
    }

    #[test]
    fn defaults_match_the_shipped_form() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        let details = CollectionDetails::defaults(today);

        assert!(details.first_name.is_empty());
        assert_eq!(details.address, USER_DEFAULT_ADDRESS);
        assert_eq!(details.collection_date, today);
        assert!(details.waste_types.is_empty());
        assert_eq!(details.quantity_kg, 1.0);
    }
}
