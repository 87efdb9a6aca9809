use crate::types::internal::{Notification, NotificationKind};

/// Read-only store behind the notifications view, seeded at startup
pub struct NotificationStore {
    notifications: Vec<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            notifications: seed_notifications(),
        }
    }

    /// Notifications, newest first
    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_notification(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    date: &str,
    read: bool,
) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        date: date.to_string(),
        read,
    }
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        seed_notification(
            "notif001",
            NotificationKind::Success,
            "Recolha Confirmada!",
            "Sua recolha #001 está confirmada para 16 de Julho, entre 14:00-16:00.",
            "15 de Julho, 2024",
            false,
        ),
        seed_notification(
            "notif002",
            NotificationKind::Info,
            "Novo Ponto de Recolha",
            "Adicionamos um novo ponto de recolha de eletrônicos no Bairro Azul.",
            "14 de Julho, 2024",
            true,
        ),
        seed_notification(
            "notif003",
            NotificationKind::Warning,
            "Manutenção Programada",
            "O app estará em manutenção no dia 20 de Julho, das 02:00 às 04:00.",
            "12 de Julho, 2024",
            false,
        ),
        seed_notification(
            "notif004",
            NotificationKind::Success,
            "Créditos Verdes Adicionados",
            "Você recebeu 50 Créditos Verdes pela sua última recolha!",
            "10 de Julho, 2024",
            true,
        ),
    ]
}
