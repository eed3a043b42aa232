//! Server-side state for logins bound to a browser session.

mod memory;

pub use memory::MemoryStore;

use crate::auth::TokenResponse;
use crate::core::models::PendingAuthorization;
use crate::core::types::{Expire, SessionId};

pub const SESSION_COOKIE: &str = "kagi_session";

/// Tokens obtained for a session.
#[derive(Debug, Clone)]
pub struct Session {
    pub tokens: TokenResponse,
}

impl Expire for Session {
    const EXPIRES_IN_SECS: u64 = 60 * 60;
}

#[async_trait::async_trait]
pub trait Store {
    async fn put_pending(&self, id: SessionId, pending: PendingAuthorization);
    /// Removes the entry; a pending authorization is usable once.
    async fn take_pending(&self, id: &SessionId) -> Option<PendingAuthorization>;
    async fn put_session(&self, id: SessionId, session: Session);
    async fn get_session(&self, id: &SessionId) -> Option<Session>;
    async fn clean_up(&self);
}
