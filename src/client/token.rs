use tracing::{event, Level};

use crate::auth::error::AccessTokenError;
use crate::auth::{pkce, TokenRequest, TokenResponse};
use crate::core::types::{AuthCode, SessionId};
use crate::session::{Session, Store};

use super::{error::Error, OAuth2Client};

/// Query string the provider sends back to the redirect URI.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl OAuth2Client {
    #[tracing::instrument(skip_all)]
    pub async fn callback(
        &self,
        params: CallbackParams,
        session: Option<SessionId>,
    ) -> Result<TokenResponse, Error> {
        let code = match params.code.filter(|c| !c.is_empty()) {
            Some(code) => AuthCode(code),
            None => {
                if let Some(error) = &params.error {
                    event!(
                        Level::WARN,
                        error = %error,
                        description = ?params.error_description,
                        "Provider redirected back without a code"
                    );
                }
                return Err(Error::MissingCode);
            }
        };

        if !self.config.bind_session {
            return self.exchange_code(code, None).await;
        }

        let session = session.ok_or(Error::MissingSession)?;
        let pending = self
            .store
            .take_pending(&session)
            .await
            .ok_or(Error::MissingSession)?;

        if params.state.as_deref() != Some(pending.state.as_ref()) {
            event!(Level::WARN, "Callback state does not match the session");
            return Err(Error::StateMismatch);
        }

        let tokens = self.exchange_code(code, Some(pending.verifier)).await?;
        self.store
            .put_session(
                session,
                Session {
                    tokens: tokens.clone(),
                },
            )
            .await;

        Ok(tokens)
    }

    /// Redeems `code` at the token endpoint. A single attempt is made.
    pub async fn exchange_code(
        &self,
        code: AuthCode,
        pkce_verifier: Option<pkce::Verifier>,
    ) -> Result<TokenResponse, Error> {
        let token_url = self.config.token_url()?;
        let req = TokenRequest::authorization_code(&self.config, code, pkce_verifier);

        event!(
            Level::INFO,
            client_id = ?self.config.client_id,
            token_endpoint = %token_url,
            "Exchanging authorization code"
        );

        let response = self
            .http
            .post(token_url)
            .form(&req)
            .send()
            .await
            .map_err(|e| {
                event!(Level::WARN, error = %e, "Token endpoint unreachable");
                Error::Unreachable(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::ReadBody)?;

        decode_token_response(status, &body).map_err(|e| {
            event!(Level::WARN, error = %e, "Token exchange failed");
            e
        })
    }
}

fn decode_token_response(status: reqwest::StatusCode, body: &[u8]) -> Result<TokenResponse, Error> {
    if status.is_success() {
        return Ok(serde_json::from_slice(body)?);
    }

    // Anything that is not JSON is undecodable whatever the status.
    let error = match serde_json::from_slice::<AccessTokenError>(body) {
        Ok(error) => Some(error),
        Err(_) => {
            serde_json::from_slice::<serde_json::Value>(body)?;
            None
        }
    };
    Err(Error::Rejected {
        status: status.as_u16(),
        error,
    })
}
