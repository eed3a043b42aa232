use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;

use crate::core::models::{ClientConfig, DEFAULT_SCOPE, DEFAULT_STATE};
use crate::core::types::{ClientId, ClientSecret, RedirectUri, Scope, State};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";
pub const DEFAULT_AUTH_ENDPOINT: &str =
    "http://localhost:8080/realms/poc-app/protocol/openid-connect/auth";
pub const DEFAULT_TOKEN_ENDPOINT: &str =
    "http://localhost:8080/realms/poc-app/protocol/openid-connect/token";
pub const DEFAULT_CLIENT_ID: &str = "code-flow-client";

#[derive(Debug, Parser)]
#[clap(
    name = "kagid",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
pub struct Options {
    /// Public URL of this server
    #[clap(long, env = "KAGI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    #[clap(long, env = "KAGI_AUTH_ENDPOINT", default_value = DEFAULT_AUTH_ENDPOINT)]
    pub auth_endpoint: String,
    #[clap(long, env = "KAGI_TOKEN_ENDPOINT", default_value = DEFAULT_TOKEN_ENDPOINT)]
    pub token_endpoint: String,
    #[clap(long, env = "KAGI_CLIENT_ID", default_value = DEFAULT_CLIENT_ID)]
    pub client_id: ClientId,
    #[clap(long, env = "KAGI_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: ClientSecret,
    /// Defaults to <base-url>/callback
    #[clap(long, env = "KAGI_REDIRECT_URI")]
    pub redirect_uri: Option<String>,
    #[clap(long, env = "KAGI_SCOPE", default_value = DEFAULT_SCOPE)]
    pub scope: Scope,
    /// `state` sent when logins are not bound to a session
    #[clap(long, env = "KAGI_STATE", default_value = DEFAULT_STATE)]
    pub state: String,
    #[clap(long, env = "KAGI_REQUEST_TIMEOUT_SECS", default_value = "5")]
    pub request_timeout_secs: u64,
    /// Random state, PKCE and a session cookie for every login
    #[clap(long, env = "KAGI_BIND_SESSION")]
    pub bind_session: bool,
    #[clap(long, env = "KAGI_LISTEN_ADDR", default_value = "0.0.0.0")]
    pub listen_addr: IpAddr,
    #[clap(long, env = "KAGI_PORT", default_value = "8081")]
    pub port: u16,
}

impl Options {
    pub fn client_config(&self) -> ClientConfig {
        let redirect_uri = match &self.redirect_uri {
            Some(uri) => RedirectUri(uri.to_string()),
            None => ClientConfig::callback_uri(&self.base_url),
        };

        ClientConfig {
            redirect_uri,
            scope: self.scope.clone(),
            state: State(self.state.to_string()),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            bind_session: self.bind_session,
            ..ClientConfig::new(
                &self.base_url,
                &self.auth_endpoint,
                &self.token_endpoint,
                self.client_id.clone(),
                self.client_secret.clone(),
            )
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_local_keycloak_setup() {
        let opts = Options::try_parse_from(&["kagid", "--client-secret", "s3cret"]).unwrap();
        let config = opts.client_config();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.auth_endpoint, DEFAULT_AUTH_ENDPOINT);
        assert_eq!(config.token_endpoint, DEFAULT_TOKEN_ENDPOINT);
        assert_eq!(config.client_id, ClientId("code-flow-client".to_string()));
        assert_eq!(
            config.redirect_uri,
            RedirectUri("http://localhost:8081/callback".to_string())
        );
        assert_eq!(config.state, State("xyz123".to_string()));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(!config.bind_session);
        assert_eq!(opts.listen_addr().to_string(), "0.0.0.0:8081");
    }

    #[test]
    fn explicit_options_override_defaults() {
        let opts = Options::try_parse_from(&[
            "kagid",
            "--client-secret",
            "s3cret",
            "--base-url",
            "https://app.example.com",
            "--scope",
            "openid profile",
            "--request-timeout-secs",
            "2",
            "--bind-session",
            "--port",
            "9000",
        ])
        .unwrap();
        let config = opts.client_config();

        assert_eq!(
            config.redirect_uri,
            RedirectUri("https://app.example.com/callback".to_string())
        );
        assert_eq!(config.scope.as_joined(), "openid profile");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert!(config.bind_session);
        assert_eq!(opts.listen_addr().port(), 9000);
    }

    #[test]
    fn client_secret_is_required() {
        assert!(Options::try_parse_from(&["kagid"]).is_err());
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let opts = Options::try_parse_from(&["kagid", "--client-secret", "s3cret"]).unwrap();
        assert!(!format!("{:?}", opts).contains("s3cret"));
    }
}
