//! Per-client session state keyed by network address.

use std::collections::HashMap;

use tokio::sync::RwLock;

/// The last fault assigned to one client address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSession {
    pub damaged_system: Option<String>,
}

impl ClientSession {
    pub fn assigned(fault_id: impl Into<String>) -> Self {
        Self {
            damaged_system: Some(fault_id.into()),
        }
    }
}

/// Process-wide map from client address to [`ClientSession`].
///
/// Entries are replaced wholesale and never removed. Concurrent writes to the
/// same address resolve last-write-wins.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, ClientSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite the session for `client`.
    pub async fn assign(&self, client: &str, session: ClientSession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(client.to_string(), session);
    }

    pub async fn get(&self, client: &str) -> Option<ClientSession> {
        self.sessions.read().await.get(client).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_client_has_no_session() {
        let store = SessionStore::new();
        assert!(store.get("10.0.0.1").await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_assign_overwrites() {
        let store = SessionStore::new();
        store
            .assign("10.0.0.1", ClientSession::assigned("engines"))
            .await;
        store
            .assign("10.0.0.1", ClientSession::assigned("navigation"))
            .await;

        let session = store.get("10.0.0.1").await.unwrap();
        assert_eq!(session.damaged_system.as_deref(), Some("navigation"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_clients_are_isolated() {
        let store = SessionStore::new();
        store
            .assign("10.0.0.1", ClientSession::assigned("engines"))
            .await;
        store
            .assign("10.0.0.2", ClientSession::assigned("life_support"))
            .await;

        assert_eq!(
            store.get("10.0.0.1").await,
            Some(ClientSession::assigned("engines"))
        );
        assert_eq!(
            store.get("10.0.0.2").await,
            Some(ClientSession::assigned("life_support"))
        );
        assert!(store.get("10.0.0.3").await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_assignments_leave_whole_entries() {
        let store = Arc::new(SessionStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let fault = if i % 2 == 0 { "engines" } else { "navigation" };
                store
                    .assign("10.0.0.1", ClientSession::assigned(fault))
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let session = store.get("10.0.0.1").await.unwrap();
        let fault = session.damaged_system.unwrap();
        assert!(fault == "engines" || fault == "navigation");
        assert_eq!(store.len().await, 1);
    }
}
