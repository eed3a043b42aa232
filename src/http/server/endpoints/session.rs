use std::sync::Arc;

use warp::Filter;

use crate::client::OAuth2Client;
use crate::core::types::SessionId;
use crate::http::encoding::{self, reply};

pub fn session_endpoint(
    client: Arc<OAuth2Client>,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("session")
        .and(warp::get())
        .and(encoding::with_client(client))
        .and(encoding::session())
        .and_then(|client: Arc<OAuth2Client>, session: Option<SessionId>| async move {
            reply::json_encode(client.session_tokens(session).await)
        })
}
