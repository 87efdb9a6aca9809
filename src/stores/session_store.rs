use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::services::wizard::WizardSession;

/// In-memory store for wizard sessions
///
/// Sessions are UUID-keyed and live for the process lifetime; nothing
/// is persisted, matching the transient lifecycle of a collection
/// request. Mutations run inside the lock so transitions on one session
/// are serialized.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, WizardSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a session at the details step with the form defaults
    pub fn create(&self, today: NaiveDate) -> (Uuid, WizardSession) {
        let session = WizardSession::new(today);
        let id = Uuid::new_v4();

        self.sessions
            .write()
            .expect("session map lock poisoned")
            .insert(id, session.clone());

        (id, session)
    }

    /// Snapshot of one session
    pub fn get(&self, id: &Uuid) -> Option<WizardSession> {
        self.sessions
            .read()
            .expect("session map lock poisoned")
            .get(id)
            .cloned()
    }

    /// Run a mutation against one session under the write lock
    ///
    /// Returns `None` when the session does not exist; otherwise the
    /// closure result together with a snapshot of the session after the
    /// mutation.
    pub fn with_session<T>(
        &self,
        id: &Uuid,
        op: impl FnOnce(&mut WizardSession) -> T,
    ) -> Option<(T, WizardSession)> {
        let mut sessions = self.sessions.write().expect("session map lock poisoned");
        let session = sessions.get_mut(id)?;
        let result = op(session);
        Some((result, session.clone()))
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .expect("session map lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::{today, valid_details};
    use crate::types::internal::WizardStep;

    #[test]
    fn created_sessions_are_retrievable() {
        let store = SessionStore::new();
        let (id, session) = store.create(today());

        assert_eq!(session.step(), WizardStep::Details);
        assert!(store.get(&id).is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn mutations_are_visible_to_later_reads() {
        let store = SessionStore::new();
        let (id, _) = store.create(today());

        let (result, snapshot) = store
            .with_session(&id, |session| session.submit_details(valid_details()))
            .expect("session exists");

        assert!(result.is_ok());
        assert_eq!(snapshot.step(), WizardStep::Payment);
        assert_eq!(store.get(&id).unwrap().step(), WizardStep::Payment);
    }

    #[test]
    fn unknown_session_yields_none() {
        let store = SessionStore::new();

        assert!(store.get(&Uuid::new_v4()).is_none());
        assert!(store
            .with_session(&Uuid::new_v4(), |session| session.step())
            .is_none());
    }
}
