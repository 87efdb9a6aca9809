use std::sync::Arc;

use crate::config::AppSettings;
use crate::services::{DetectorService, ReferenceDataClient};
use crate::stores::{CollectionHistoryStore, GreenCreditStore, NotificationStore, SessionStore};

/// Centralized application data following the main-owned stores pattern
///
/// All stores and external-service clients are created once in `main`
/// and shared across the API structs via `Arc`, so every endpoint sees
/// the same session map and seeded read models.
pub struct AppData {
    pub settings: AppSettings,
    pub sessions: Arc<SessionStore>,
    pub history: Arc<CollectionHistoryStore>,
    pub notifications: Arc<NotificationStore>,
    pub green_credit: Arc<GreenCreditStore>,
    pub detector: Arc<DetectorService>,
    pub reference: Arc<ReferenceDataClient>,
}

impl AppData {
    /// Initialize all application data from loaded settings
    pub fn init(settings: AppSettings) -> Self {
        tracing::info!("Initializing application data");

        if settings.detector.api_key.is_none() {
            tracing::warn!("no detector API key configured; /detect-item will answer 503");
        }
        if settings.reference_base_url.is_none() {
            tracing::warn!("no reference-data base URL configured; /reference will answer 503");
        }

        let detector = Arc::new(DetectorService::new(settings.detector.clone()));
        let reference = Arc::new(ReferenceDataClient::new(settings.reference_base_url.clone()));

        Self {
            settings,
            sessions: Arc::new(SessionStore::new()),
            history: Arc::new(CollectionHistoryStore::new()),
            notifications: Arc::new(NotificationStore::new()),
            green_credit: Arc::new(GreenCreditStore::new()),
            detector,
            reference,
        }
    }
}
