use serde::{Deserialize, Serialize};

/// Structured classification produced for one uploaded image
///
/// Field names follow the model's output schema, which is why the wire
/// format is camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    /// Common name of the primary item detected in the image
    pub item_name: String,

    /// General recycling category (e.g. Plastic, Glass, Unknown)
    pub item_category: String,

    /// Whether the item is commonly recyclable
    pub is_recyclable: bool,

    /// Brief advice on preparing the item for recycling
    pub recycling_advice: String,
}

impl DetectionRecord {
    /// Sentinel returned when the model ran but produced no usable
    /// payload. Returned as a success, never thrown; callers that need
    /// to tell "model produced nothing" from "classified as unknown"
    /// compare against this record.
    pub fn fallback() -> Self {
        Self {
            item_name: "Error in detection".to_string(),
            item_category: "Unknown".to_string(),
            is_recyclable: false,
            recycling_advice: "Could not process the image. Please try again with a clearer image."
                .to_string(),
        }
    }

    /// True when this record is the empty-payload sentinel
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_record_is_recognizable() {
        let record = DetectionRecord::fallback();

        assert!(record.is_fallback());
        assert_eq!(record.item_name, "Error in detection");
        assert_eq!(record.item_category, "Unknown");
        assert!(!record.is_recyclable);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let record = DetectionRecord {
            item_name: "Garrafa PET".to_string(),
            item_category: "Plastic".to_string(),
            is_recyclable: true,
            recycling_advice: "Empty and rinse. Remove cap.".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["itemName"], "Garrafa PET");
        assert_eq!(json["isRecyclable"], true);
    }
}
