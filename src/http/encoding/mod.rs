pub mod error;
pub mod reply;

use std::sync::Arc;

use crate::client::OAuth2Client;
use crate::core::types::SessionId;
use crate::session::SESSION_COOKIE;
use warp::Filter;

pub fn with_client(
    client: Arc<OAuth2Client>,
) -> impl Filter<Extract = (Arc<OAuth2Client>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || client.clone())
}

/// The session cookie, if the browser sent a non-empty one.
pub fn session(
) -> impl Filter<Extract = (Option<SessionId>,), Error = std::convert::Infallible> + Clone {
    warp::cookie::optional::<String>(SESSION_COOKIE)
        .map(|c: Option<String>| c.filter(|s| !s.is_empty()).map(SessionId))
}
