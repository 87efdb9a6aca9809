use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::DetectorSettings;
use crate::errors::internal::DetectorError;
use crate::types::internal::DetectionRecord;

/// Instruction given to the classification model for every image
const DETECT_PROMPT: &str = "You are an expert in waste management and recycling, focusing on common household items. Analyze the provided image to identify the single, primary item shown.

Your tasks are:
1.  Identify the primary item in the image. If multiple items are present, focus on the most prominent one or the one most likely being queried for recycling.
2.  Determine if this item is commonly recyclable.
3.  Classify the item into one of the following categories: Plastic, Paper, Cardboard, Glass, Metal, Electronics, Organic, Textile, Not Recyclable, or Unknown.
4.  Provide brief, actionable advice (1-2 sentences) on how to prepare the item for recycling if it is recyclable. If it's not recyclable, briefly explain why or suggest alternative disposal. If the item or its recyclability is unknown, provide general good-practice recycling advice.

Provide your response in the structured format defined by the output schema.
If the image is unclear, or the item is not easily identifiable, make a best guess for itemName as \"Unclear Object\" or \"Multiple Items\", set isRecyclable to false, itemCategory to \"Unknown\", and provide general recycling tips as recyclingAdvice.";

/// A parsed `data:<mime>;base64,<payload>` image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Still base64-encoded; the model endpoint takes it as-is
    pub data: String,
}

/// Split and verify a data URI without decoding it twice
pub fn parse_data_uri(uri: &str) -> Result<ImagePayload, DetectorError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| DetectorError::InvalidDataUri("missing data: prefix".to_string()))?;

    let (mime_type, data) = rest
        .split_once(";base64,")
        .ok_or_else(|| DetectorError::InvalidDataUri("missing base64 payload".to_string()))?;

    if mime_type.is_empty() {
        return Err(DetectorError::InvalidDataUri(
            "missing MIME type".to_string(),
        ));
    }

    if data.is_empty() || BASE64.decode(data).is_err() {
        return Err(DetectorError::InvalidDataUri(
            "payload is not valid base64".to_string(),
        ));
    }

    Ok(ImagePayload {
        mime_type: mime_type.to_string(),
        data: data.to_string(),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Client for the hosted item-classification model
///
/// One prompt-template call with a fixed output schema. No retry, no
/// streaming; a dropped future abandons the pending call.
pub struct DetectorService {
    client: reqwest::Client,
    settings: DetectorSettings,
}

impl DetectorService {
    pub fn new(settings: DetectorSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    /// Classify the item in a data-URI image
    ///
    /// # Returns
    /// * `Ok(DetectionRecord)` - The classification, or the fallback
    ///   sentinel when the model produced no usable payload
    /// * `Err(DetectorError)` - The URI was invalid, the detector is
    ///   unconfigured, or the call itself failed
    pub async fn detect(&self, photo_data_uri: &str) -> Result<DetectionRecord, DetectorError> {
        let image = parse_data_uri(photo_data_uri)?;

        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(DetectorError::MissingApiKey)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.settings.api_base, self.settings.model, api_key
        );

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart {
                        text: Some(DETECT_PROMPT.to_string()),
                        inline_data: None,
                    },
                    RequestPart {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: image.mime_type,
                            data: image.data,
                        }),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Self::response_schema(),
            },
        };

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DetectorError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| DetectorError::MalformedResponse(e.to_string()))?;

        // An empty or undecodable structured payload is not a failure:
        // the caller gets the fixed sentinel record instead.
        Ok(Self::decode_payload(&envelope).unwrap_or_else(DetectionRecord::fallback))
    }

    /// Output schema the model is instructed to fill
    fn response_schema() -> serde_json::Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "itemName": { "type": "STRING" },
                "itemCategory": { "type": "STRING" },
                "isRecyclable": { "type": "BOOLEAN" },
                "recyclingAdvice": { "type": "STRING" }
            },
            "required": ["itemName", "itemCategory", "isRecyclable", "recyclingAdvice"]
        })
    }

    /// Extract the structured record from the response envelope
    fn decode_payload(envelope: &GenerateContentResponse) -> Option<DetectionRecord> {
        let text = envelope
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.text.as_deref())?;

        serde_json::from_str(text).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).expect("fixture should parse")
    }

    #[test]
    fn data_uri_round_trips() {
        let payload = parse_data_uri("data:image/png;base64,aGVsbG8=").unwrap();

        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, "aGVsbG8=");
    }

    #[test]
    fn data_uri_without_prefix_is_rejected() {
        let err = parse_data_uri("image/png;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, DetectorError::InvalidDataUri(_)));
    }

    #[test]
    fn data_uri_with_bad_base64_is_rejected() {
        let err = parse_data_uri("data:image/png;base64,not!!valid").unwrap_err();
        assert!(matches!(err, DetectorError::InvalidDataUri(_)));
    }

    #[test]
    fn data_uri_without_payload_marker_is_rejected() {
        let err = parse_data_uri("data:image/png,rawdata").unwrap_err();
        assert!(matches!(err, DetectorError::InvalidDataUri(_)));
    }

    #[test]
    fn structured_payload_is_decoded() {
        let envelope = envelope(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [{
                            "text": "{\"itemName\":\"Garrafa PET\",\"itemCategory\":\"Plastic\",\"isRecyclable\":true,\"recyclingAdvice\":\"Empty and rinse. Remove cap.\"}"
                        }]
                    }
                }]
            }"#,
        );

        let record = DetectorService::decode_payload(&envelope).unwrap();
        assert_eq!(record.item_name, "Garrafa PET");
        assert!(record.is_recyclable);
    }

    #[test]
    fn empty_candidate_list_yields_no_payload() {
        let envelope = envelope(r#"{"candidates": []}"#);
        assert!(DetectorService::decode_payload(&envelope).is_none());
    }

    #[test]
    fn missing_candidates_field_yields_no_payload() {
        let envelope = envelope(r#"{}"#);
        assert!(DetectorService::decode_payload(&envelope).is_none());
    }

    #[test]
    fn unparseable_payload_text_yields_no_payload() {
        let envelope = envelope(
            r#"{"candidates": [{"content": {"parts": [{"text": "not json"}]}}]}"#,
        );
        assert!(DetectorService::decode_payload(&envelope).is_none());
    }

    #[test]
    fn decode_failure_maps_to_the_sentinel() {
        let envelope = envelope(r#"{"candidates": []}"#);

        let record =
            DetectorService::decode_payload(&envelope).unwrap_or_else(DetectionRecord::fallback);
        assert!(record.is_fallback());
    }
}
