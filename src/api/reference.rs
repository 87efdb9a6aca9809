use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::errors::internal::ReferenceFetchError;
use crate::errors::ReferenceError;
use crate::services::ReferenceDataClient;
use crate::types::dto::reference::RegionRecord;

/// Administrative-region reference API endpoints
pub struct ReferenceApi {
    reference: Arc<ReferenceDataClient>,
}

impl ReferenceApi {
    pub fn new(reference: Arc<ReferenceDataClient>) -> Self {
        Self { reference }
    }
}

/// API tags for reference-data endpoints
#[derive(Tags)]
enum ApiTags {
    /// Administrative-region pickers
    Reference,
}

#[OpenApi]
impl ReferenceApi {
    /// List provinces
    #[oai(path = "/reference/provinces", method = "get", tag = "ApiTags::Reference")]
    async fn provinces(&self) -> Result<Json<Vec<RegionRecord>>, ReferenceError> {
        self.reference
            .provinces()
            .await
            .map(Json)
            .map_err(map_fetch_error)
    }

    /// List the municipalities of one province
    #[oai(
        path = "/reference/provinces/:province_id/municipalities",
        method = "get",
        tag = "ApiTags::Reference"
    )]
    async fn municipalities(
        &self,
        province_id: Path<u32>,
    ) -> Result<Json<Vec<RegionRecord>>, ReferenceError> {
        self.reference
            .municipalities(province_id.0)
            .await
            .map(Json)
            .map_err(map_fetch_error)
    }
}

fn map_fetch_error(error: ReferenceFetchError) -> ReferenceError {
    match error {
        ReferenceFetchError::BaseUrlNotConfigured => ReferenceError::not_configured(),
        error => {
            tracing::error!("reference-data fetch failed: {}", error);
            ReferenceError::fetch_failed()
        }
    }
}
