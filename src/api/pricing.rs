use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};

use crate::errors::PricingError;
use crate::services::pricing;
use crate::types::dto::pricing::{BagQuoteResponse, QuoteResponse};

/// Pricing quote API endpoints
pub struct PricingApi;

/// API tags for pricing endpoints
#[derive(Tags)]
enum ApiTags {
    /// Quote endpoints for both collection plans
    Pricing,
}

#[OpenApi]
impl PricingApi {
    /// Commercial plan quote for a weight in kilograms
    ///
    /// Cost is a pure function of the weight at the fixed per-kg rate
    #[oai(path = "/pricing/quote", method = "get", tag = "ApiTags::Pricing")]
    async fn quote(&self, weight_kg: Query<f64>) -> Result<Json<QuoteResponse>, PricingError> {
        if !pricing::weight_in_bounds(weight_kg.0) {
            return Err(PricingError::invalid_quantity(format!(
                "Quantidade deve estar entre {} e {} Kg",
                pricing::MIN_WEIGHT_KG,
                pricing::MAX_WEIGHT_KG
            )));
        }

        let cost_kz = pricing::cost_for_weight(weight_kg.0);

        Ok(Json(QuoteResponse {
            weight_kg: weight_kg.0,
            unit_price_kz: pricing::PRICE_PER_KG,
            cost_kz,
            cost_display: pricing::format_kz(cost_kz),
        }))
    }

    /// Residential plan quote for a bag count
    ///
    /// Flat tier prices over 1-3, 4-7 and 8-10 bags
    #[oai(path = "/pricing/bag-quote", method = "get", tag = "ApiTags::Pricing")]
    async fn bag_quote(&self, bags: Query<u8>) -> Result<Json<BagQuoteResponse>, PricingError> {
        let cost_kz = pricing::price_for_bag_count(bags.0).ok_or_else(|| {
            PricingError::invalid_quantity(format!(
                "Número de sacolas deve estar entre 1 e {}",
                pricing::MAX_BAGS
            ))
        })?;

        Ok(Json(BagQuoteResponse {
            bags: bags.0,
            cost_kz,
            cost_display: pricing::format_kz(f64::from(cost_kz)),
        }))
    }
}
