use tracing::{event, Level};
use url::Url;

use crate::auth::{pkce, AuthorizationRequest, Redirect};
use crate::core::models::PendingAuthorization;
use crate::core::types::{SessionId, State};
use crate::session::Store;
use crate::util::random::FromRandom;

use super::{error::Error, OAuth2Client};

#[derive(Debug)]
pub struct LoginRedirect {
    pub location: Url,
    /// Set when the login is bound to a browser session.
    pub session: Option<SessionId>,
}

impl OAuth2Client {
    #[tracing::instrument(skip_all)]
    pub async fn authorization_redirect(&self) -> Result<LoginRedirect, Error> {
        let auth_url = self.config.auth_url()?;

        if !self.config.bind_session {
            let req = AuthorizationRequest::new(&self.config, self.config.state.clone());
            let location = Redirect::new(auth_url, req).location()?;

            event!(
                Level::DEBUG,
                client_id = ?self.config.client_id,
                "Issuing authorization redirect"
            );
            return Ok(LoginRedirect {
                location,
                session: None,
            });
        }

        let state = State::from_random();
        let verifier = pkce::Verifier::from_random();
        let req = AuthorizationRequest::new(&self.config, state.clone())
            .with_challenge(verifier.challenge());
        let location = Redirect::new(auth_url, req).location()?;

        let session = SessionId::from_random();
        self.store
            .put_pending(session.clone(), PendingAuthorization { state, verifier })
            .await;

        event!(
            Level::DEBUG,
            client_id = ?self.config.client_id,
            "Issuing session-bound authorization redirect"
        );
        Ok(LoginRedirect {
            location,
            session: Some(session),
        })
    }
}
