use poem_openapi::Object;

use crate::types::internal::{CollectionRecord, CollectionStatus};

/// Response model for one past collection
#[derive(Object, Debug)]
pub struct CollectionRecordResponse {
    /// Collection identifier
    pub id: String,

    /// Collection date as displayed in the product
    pub date: String,

    /// Number of bags collected
    pub bags: u8,

    /// Flat tier cost in AOA
    pub cost_kz: u32,

    /// Cost label as displayed in the product
    pub cost_display: String,

    /// Final status of the collection
    pub status: CollectionStatus,

    /// Labels of the collected materials
    pub items: Vec<String>,
}

impl From<&CollectionRecord> for CollectionRecordResponse {
    fn from(record: &CollectionRecord) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date.clone(),
            bags: record.bags,
            cost_kz: record.cost_kz,
            cost_display: format!("{} KZ", record.cost_kz),
            status: record.status,
            items: record.items.clone(),
        }
    }
}
