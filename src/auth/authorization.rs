use crate::auth::pkce;
use crate::core::models::ClientConfig;
use crate::core::types::{ClientId, RedirectUri, ResponseType, Scope, State};

/// Query parameters sent to the authorization endpoint.
#[derive(Debug, Clone)]
#[derive(serde::Serialize)]
pub struct AuthorizationRequest {
    pub client_id: ClientId,
    pub response_type: ResponseType,
    pub redirect_uri: RedirectUri,
    pub scope: Scope,
    pub state: State,
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkce_challenge: Option<pkce::Challenge>,
}

impl AuthorizationRequest {
    pub fn new(config: &ClientConfig, state: State) -> Self {
        Self {
            client_id: config.client_id.clone(),
            response_type: ResponseType::Code,
            redirect_uri: config.redirect_uri.clone(),
            scope: config.scope.clone(),
            state,
            pkce_challenge: None,
        }
    }

    pub fn with_challenge(mut self, challenge: pkce::Challenge) -> Self {
        self.pkce_challenge = Some(challenge);
        self
    }
}
