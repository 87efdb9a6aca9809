use crate::services::pricing;
use crate::types::internal::{CollectionRecord, CollectionStatus};

/// Read-only store behind the collection-history view
///
/// Seeded at startup with the account's past collections, newest first.
/// No write path exists; a booked wizard request is not appended here
/// (the product mocks history the same way). Costs come from the
/// residential bag-tier table.
pub struct CollectionHistoryStore {
    records: Vec<CollectionRecord>,
}

impl CollectionHistoryStore {
    pub fn new() -> Self {
        Self {
            records: seed_records(),
        }
    }

    /// Past collections, newest first
    pub fn list(&self) -> &[CollectionRecord] {
        &self.records
    }
}

impl Default for CollectionHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_record(id: &str, date: &str, bags: u8, status: CollectionStatus, items: &[&str]) -> CollectionRecord {
    CollectionRecord {
        id: id.to_string(),
        date: date.to_string(),
        bags,
        cost_kz: pricing::price_for_bag_count(bags).expect("seed bag counts are within tiers"),
        status,
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

fn seed_records() -> Vec<CollectionRecord> {
    vec![
        seed_record(
            "col001",
            "15 de Julho, 2024",
            3,
            CollectionStatus::Concluida,
            &["Plásticos", "Papel"],
        ),
        seed_record(
            "col002",
            "02 de Julho, 2024",
            5,
            CollectionStatus::Concluida,
            &["Cartão", "Vidro", "Eletrônicos"],
        ),
        seed_record("col003", "20 de Junho, 2024", 2, CollectionStatus::Cancelada, &[]),
        seed_record(
            "col004",
            "05 de Junho, 2024",
            8,
            CollectionStatus::Concluida,
            &["Plásticos", "Papel", "Cartão"],
        ),
    ]
}
