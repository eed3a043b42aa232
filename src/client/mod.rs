pub mod authorization;
pub mod error;
pub mod token;

pub use authorization::LoginRedirect;
pub use token::CallbackParams;

use crate::auth::TokenResponse;
use crate::core::models::ClientConfig;
use crate::core::types::SessionId;
use crate::session::{MemoryStore, Store};

use error::Error;

/// The relying party: builds authorization redirects and redeems codes at
/// the provider's token endpoint.
#[derive(Debug)]
pub struct OAuth2Client {
    config: ClientConfig,
    http: reqwest::Client,
    store: MemoryStore,
}

impl OAuth2Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self {
            config,
            http,
            store: MemoryStore::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn session_tokens(&self, session: Option<SessionId>) -> Result<TokenResponse, Error> {
        if !self.config.bind_session {
            return Err(Error::SessionBindingDisabled);
        }

        let session = session.ok_or(Error::NoSession)?;
        self.store
            .get_session(&session)
            .await
            .map(|s| s.tokens)
            .ok_or(Error::NoSession)
    }

    pub async fn start_clean_up_worker(&self) {
        use std::time::Duration;
        use tokio::time::interval;

        let mut interval = interval(Duration::from_secs(15));

        loop {
            interval.tick().await;
            self.store.clean_up().await;
        }
    }
}
