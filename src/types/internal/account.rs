use poem_openapi::Enum;
use serde::{Deserialize, Serialize};

/// Final status of a past collection
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionStatus {
    #[oai(rename = "Concluída")]
    #[serde(rename = "Concluída")]
    Concluida,

    #[oai(rename = "Cancelada")]
    #[serde(rename = "Cancelada")]
    Cancelada,
}

/// One entry of the collection history (residential bag-priced plan)
#[derive(Debug, Clone)]
pub struct CollectionRecord {
    pub id: String,
    pub date: String,
    pub bags: u8,
    pub cost_kz: u32,
    pub status: CollectionStatus,
    pub items: Vec<String>,
}

/// Notification categories; rendering is a closed lookup, not a
/// hierarchy.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

impl NotificationKind {
    /// Icon name the client renders for this kind
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "alert-triangle",
        }
    }
}

/// One notification shown in the inbox view
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: String,
    pub read: bool,
}

/// A reward that can be redeemed with green-credit points
#[derive(Debug, Clone)]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub points_needed: u32,
    pub icon: &'static str,
}

/// One line of recent green-credit activity
#[derive(Debug, Clone)]
pub struct CreditActivity {
    pub date: String,
    pub description: String,
    pub points: String,
}

/// The green-credit rewards profile of the demo account
#[derive(Debug, Clone)]
pub struct GreenCreditProfile {
    pub points: u32,
    pub tier: String,
    pub next_tier_name: String,
    pub next_tier_points: u32,
    pub rewards: Vec<Reward>,
    pub recent_activity: Vec<CreditActivity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_icons_cover_every_kind() {
        assert_eq!(NotificationKind::Success.icon(), "check-circle");
        assert_eq!(NotificationKind::Info.icon(), "info");
        assert_eq!(NotificationKind::Warning.icon(), "alert-triangle");
    }
}
