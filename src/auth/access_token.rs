use crate::auth::pkce;
use crate::core::models::ClientConfig;
use crate::core::types::{AuthCode, ClientId, ClientSecret, GrantType, RedirectUri};

/// Form body posted to the token endpoint.
#[derive(Debug)]
#[derive(serde::Serialize)]
pub struct TokenRequest {
    pub grant_type: GrantType,
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub code: AuthCode,
    pub redirect_uri: RedirectUri,
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkce_verifier: Option<pkce::Verifier>,
}

impl TokenRequest {
    pub fn authorization_code(
        config: &ClientConfig,
        code: AuthCode,
        pkce_verifier: Option<pkce::Verifier>,
    ) -> Self {
        Self {
            grant_type: GrantType::AuthorizationCode,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            code,
            redirect_uri: config.redirect_uri.clone(),
            pkce_verifier,
        }
    }
}

/// Token endpoint answer. Every field is optional so partial answers still
/// decode; absent fields are left out when echoed back.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct TokenResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
