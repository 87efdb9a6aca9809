use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::stores::CollectionHistoryStore;
use crate::types::dto::history::CollectionRecordResponse;

/// Collection-history API
pub struct HistoryApi {
    history: Arc<CollectionHistoryStore>,
}

impl HistoryApi {
    pub fn new(history: Arc<CollectionHistoryStore>) -> Self {
        Self { history }
    }
}

/// API tags for history endpoints
#[derive(Tags)]
enum ApiTags {
    /// Past-collection endpoints
    History,
}

#[OpenApi]
impl HistoryApi {
    /// List past collections, newest first
    #[oai(path = "/collection-history", method = "get", tag = "ApiTags::History")]
    async fn list(&self) -> Json<Vec<CollectionRecordResponse>> {
        Json(
            self.history
                .list()
                .iter()
                .map(CollectionRecordResponse::from)
                .collect(),
        )
    }
}
