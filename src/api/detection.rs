use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::errors::internal::DetectorError;
use crate::errors::DetectionError;
use crate::services::DetectorService;
use crate::types::dto::detection::{DetectItemRequest, DetectionResultResponse};

/// Recyclable-item detector API endpoints
pub struct DetectionApi {
    detector: Arc<DetectorService>,
}

impl DetectionApi {
    pub fn new(detector: Arc<DetectorService>) -> Self {
        Self { detector }
    }
}

/// API tags for detection endpoints
#[derive(Tags)]
enum ApiTags {
    /// Recyclable-item detection endpoints
    Detection,
}

#[OpenApi]
impl DetectionApi {
    /// Classify a photographed item
    ///
    /// Accepts a `data:<mime>;base64,<payload>` image and returns the
    /// structured classification. A model run that produces no usable
    /// payload answers 200 with the fixed fallback record rather than
    /// an error.
    #[oai(path = "/detect-item", method = "post", tag = "ApiTags::Detection")]
    async fn detect_item(
        &self,
        body: Json<DetectItemRequest>,
    ) -> Result<Json<DetectionResultResponse>, DetectionError> {
        match self.detector.detect(&body.0.photo_data_uri).await {
            Ok(record) => Ok(Json(DetectionResultResponse::from(record))),
            Err(DetectorError::InvalidDataUri(reason)) => {
                Err(DetectionError::invalid_image(format!(
                    "Imagem inválida: {}",
                    reason
                )))
            }
            Err(DetectorError::MissingApiKey) => Err(DetectionError::not_configured()),
            Err(error) => {
                // The cause stays in the log; the client only ever sees
                // the generic message.
                tracing::error!("item detection failed: {}", error);
                Err(DetectionError::detection_failed())
            }
        }
    }
}
