use std::collections::HashMap;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::{event, Level};

use crate::core::models::PendingAuthorization;
use crate::core::types::{Expire, Expiry, SessionId};

use super::{Session, Store};

#[derive(Debug)]
struct Entry<T> {
    value: T,
    expiry: Expiry,
}

impl<T: Expire> Entry<T> {
    fn new(value: T, now: Instant) -> Self {
        Self {
            value,
            expiry: T::expiry_from(now),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    pending: RwLock<HashMap<SessionId, Entry<PendingAuthorization>>>,
    sessions: RwLock<HashMap<SessionId, Entry<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn take_pending_at(&self, id: &SessionId, now: Instant) -> Option<PendingAuthorization> {
        let entry = self.pending.write().await.remove(id)?;
        if entry.expiry.is_past(now) {
            return None;
        }
        Some(entry.value)
    }

    async fn get_session_at(&self, id: &SessionId, now: Instant) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let entry = sessions.get(id)?;
        if entry.expiry.is_past(now) {
            return None;
        }
        Some(entry.value.clone())
    }

    pub async fn clean_up_at(&self, now: Instant) {
        let mut pending = self.pending.write().await;
        let before = pending.len();
        pending.retain(|_, e| !e.expiry.is_past(now));
        let pending_evicted = before - pending.len();
        drop(pending);

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, e| !e.expiry.is_past(now));
        let sessions_evicted = before - sessions.len();

        if pending_evicted + sessions_evicted > 0 {
            event!(
                Level::DEBUG,
                pending_evicted,
                sessions_evicted,
                "Evicted expired session state"
            );
        }
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn put_pending(&self, id: SessionId, pending: PendingAuthorization) {
        let entry = Entry::new(pending, Instant::now());
        self.pending.write().await.insert(id, entry);
    }

    async fn take_pending(&self, id: &SessionId) -> Option<PendingAuthorization> {
        self.take_pending_at(id, Instant::now()).await
    }

    async fn put_session(&self, id: SessionId, session: Session) {
        let entry = Entry::new(session, Instant::now());
        self.sessions.write().await.insert(id, entry);
    }

    async fn get_session(&self, id: &SessionId) -> Option<Session> {
        self.get_session_at(id, Instant::now()).await
    }

    async fn clean_up(&self) {
        self.clean_up_at(Instant::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{pkce, TokenResponse};
    use crate::core::types::State;
    use std::time::Duration;

    fn pending(state: &str) -> PendingAuthorization {
        PendingAuthorization {
            state: State(state.to_string()),
            verifier: pkce::Verifier {
                value: "v".to_string(),
            },
        }
    }

    fn id(s: &str) -> SessionId {
        SessionId(s.to_string())
    }

    #[tokio::test]
    async fn pending_authorization_is_single_use() {
        let store = MemoryStore::new();
        store.put_pending(id("a"), pending("s1")).await;

        let taken = store.take_pending(&id("a")).await;
        assert_eq!(taken.map(|p| p.state), Some(State("s1".to_string())));
        assert!(store.take_pending(&id("a")).await.is_none());
    }

    #[tokio::test]
    async fn expired_pending_authorization_is_not_returned() {
        let store = MemoryStore::new();
        store.put_pending(id("a"), pending("s1")).await;

        let later = Instant::now() + Duration::from_secs(6 * 60);
        assert!(store.take_pending_at(&id("a"), later).await.is_none());
    }

    #[tokio::test]
    async fn sessions_are_readable_until_they_expire() {
        let store = MemoryStore::new();
        let tokens = TokenResponse {
            access_token: Some("T".to_string()),
            ..TokenResponse::default()
        };
        store.put_session(id("a"), Session { tokens }).await;

        let session = store.get_session(&id("a")).await;
        assert_eq!(
            session.and_then(|s| s.tokens.access_token),
            Some("T".to_string())
        );

        let later = Instant::now() + Duration::from_secs(2 * 60 * 60);
        assert!(store.get_session_at(&id("a"), later).await.is_none());
    }

    #[tokio::test]
    async fn clean_up_evicts_only_expired_entries() {
        let store = MemoryStore::new();
        store.put_pending(id("a"), pending("s1")).await;
        store
            .put_session(
                id("b"),
                Session {
                    tokens: TokenResponse::default(),
                },
            )
            .await;

        store
            .clean_up_at(Instant::now() + Duration::from_secs(10 * 60))
            .await;

        assert!(store.pending.read().await.is_empty());
        assert_eq!(store.sessions.read().await.len(), 1);
    }
}
