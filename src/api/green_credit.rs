use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::stores::GreenCreditStore;
use crate::types::dto::green_credit::GreenCreditResponse;

/// Green-credit rewards API
pub struct GreenCreditApi {
    green_credit: Arc<GreenCreditStore>,
}

impl GreenCreditApi {
    pub fn new(green_credit: Arc<GreenCreditStore>) -> Self {
        Self { green_credit }
    }
}

/// API tags for green-credit endpoints
#[derive(Tags)]
enum ApiTags {
    /// Rewards program endpoints
    GreenCredit,
}

#[OpenApi]
impl GreenCreditApi {
    /// Fetch the rewards-program summary
    ///
    /// Includes per-reward redeemability and progress toward the next
    /// tier, both computed from the current balance
    #[oai(path = "/green-credit", method = "get", tag = "ApiTags::GreenCredit")]
    async fn summary(&self) -> Json<GreenCreditResponse> {
        Json(GreenCreditResponse::from(self.green_credit.profile()))
    }
}
