use std::time::Duration;

use tracing::{event, Level};
use url::Url;

use crate::auth::pkce;
use crate::client::error::{EndpointKind, Error};

use super::types::*;

pub const DEFAULT_SCOPE: &str = "openid";
pub const DEFAULT_STATE: &str = "xyz123";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
pub const CALLBACK_PATH: &str = "callback";

/// Everything the client needs to talk to the identity provider. Built once
/// at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_endpoint: String,
    pub token_endpoint: String,
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub redirect_uri: RedirectUri,
    pub scope: Scope,
    /// Sent as `state` when logins are not bound to a session.
    pub state: State,
    pub request_timeout: Duration,
    pub bind_session: bool,
}

impl ClientConfig {
    pub fn new(
        base_url: &str,
        auth_endpoint: &str,
        token_endpoint: &str,
        client_id: ClientId,
        client_secret: ClientSecret,
    ) -> Self {
        Self {
            base_url: base_url.to_string(),
            auth_endpoint: auth_endpoint.to_string(),
            token_endpoint: token_endpoint.to_string(),
            client_id,
            client_secret,
            redirect_uri: Self::callback_uri(base_url),
            scope: Scope::from_delimited_parts(DEFAULT_SCOPE),
            state: State(DEFAULT_STATE.to_string()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            bind_session: false,
        }
    }

    pub fn callback_uri(base_url: &str) -> RedirectUri {
        RedirectUri(format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            CALLBACK_PATH
        ))
    }

    pub fn auth_url(&self) -> Result<Url, Error> {
        Url::parse(&self.auth_endpoint).map_err(|e| Error::Configuration(EndpointKind::Authorization, e))
    }

    pub fn token_url(&self) -> Result<Url, Error> {
        Url::parse(&self.token_endpoint).map_err(|e| Error::Configuration(EndpointKind::Token, e))
    }

    /// Checks the endpoints once at startup so a typo fails fast instead of
    /// on the first login.
    pub fn validate(&self) -> Result<(), Error> {
        Url::parse(&self.base_url).map_err(|e| Error::Configuration(EndpointKind::Base, e))?;
        self.auth_url()?;
        self.token_url()?;

        let expected = Self::callback_uri(&self.base_url);
        if self.redirect_uri != expected {
            event!(
                Level::WARN,
                redirect_uri = %self.redirect_uri,
                expected = %expected,
                "Redirect URI does not point at this server's callback"
            );
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PendingAuthorization {
    pub state: State,
    pub verifier: pkce::Verifier,
}

impl Expire for PendingAuthorization {
    const EXPIRES_IN_SECS: u64 = 5 * 60;
}
