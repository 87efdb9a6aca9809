use poem_openapi::Object;

/// Response model for a commercial-plan (per-kilogram) quote
#[derive(Object, Debug)]
pub struct QuoteResponse {
    /// Quoted weight in kilograms
    pub weight_kg: f64,

    /// Commercial plan rate per kilogram in AOA
    pub unit_price_kz: f64,

    /// Total estimated cost in AOA
    pub cost_kz: f64,

    /// Cost formatted for display
    pub cost_display: String,
}

/// Response model for a residential-plan (bag tier) quote
#[derive(Object, Debug)]
pub struct BagQuoteResponse {
    /// Number of bags quoted (1 to 10)
    pub bags: u8,

    /// Flat tier price in AOA
    pub cost_kz: u32,

    /// Cost formatted for display
    pub cost_display: String,
}
