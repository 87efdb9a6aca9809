use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::DetectionRecord;

/// Request model for the recyclable-item detector
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct DetectItemRequest {
    /// Photo of the item as a data URI with MIME type and base64
    /// payload, e.g. `data:image/jpeg;base64,...`
    pub photo_data_uri: String,
}

/// Response model with the structured classification result
///
/// Field names mirror the model's output schema (camelCase on the wire).
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct DetectionResultResponse {
    /// Common name of the primary item detected in the image
    pub item_name: String,

    /// General recycling category for this item
    pub item_category: String,

    /// Whether this item is commonly recyclable
    pub is_recyclable: bool,

    /// Brief advice on preparing the item for recycling
    pub recycling_advice: String,
}

impl From<DetectionRecord> for DetectionResultResponse {
    fn from(record: DetectionRecord) -> Self {
        Self {
            item_name: record.item_name,
            item_category: record.item_category,
            is_recyclable: record.is_recyclable,
            recycling_advice: record.recycling_advice,
        }
    }
}
