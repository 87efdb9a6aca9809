// API layer - HTTP endpoints

pub mod collection;
pub mod detection;
pub mod green_credit;
pub mod health;
pub mod history;
pub mod notifications;
pub mod pricing;
pub mod reference;

pub use collection::CollectionApi;
pub use detection::DetectionApi;
pub use green_credit::GreenCreditApi;
pub use health::HealthApi;
pub use history::HistoryApi;
pub use notifications::NotificationsApi;
pub use pricing::PricingApi;
pub use reference::ReferenceApi;
