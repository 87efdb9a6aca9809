use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::stores::NotificationStore;
use crate::types::dto::notifications::NotificationResponse;

/// Notifications API
pub struct NotificationsApi {
    notifications: Arc<NotificationStore>,
}

impl NotificationsApi {
    pub fn new(notifications: Arc<NotificationStore>) -> Self {
        Self { notifications }
    }
}

/// API tags for notification endpoints
#[derive(Tags)]
enum ApiTags {
    /// Notification inbox endpoints
    Notifications,
}

#[OpenApi]
impl NotificationsApi {
    /// List notifications, newest first
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn list(&self) -> Json<Vec<NotificationResponse>> {
        Json(
            self.notifications
                .list()
                .iter()
                .map(NotificationResponse::from)
                .collect(),
        )
    }
}
