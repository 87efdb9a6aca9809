use poem_openapi::Object;

use crate::types::internal::{Notification, NotificationKind};

/// Response model for one notification
#[derive(Object, Debug)]
pub struct NotificationResponse {
    /// Notification identifier
    pub id: String,

    /// Notification category
    pub kind: NotificationKind,

    /// Icon name resolved from the category
    pub icon: String,

    /// Short title
    pub title: String,

    /// Notification body
    pub message: String,

    /// Date label as displayed in the product
    pub date: String,

    /// Whether the notification has been read
    pub read: bool,
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.clone(),
            kind: notification.kind,
            icon: notification.kind.icon().to_string(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            date: notification.date.clone(),
            read: notification.read,
        }
    }
}
