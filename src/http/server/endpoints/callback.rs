use std::sync::Arc;

use warp::Filter;

use crate::client::{CallbackParams, OAuth2Client};
use crate::core::types::SessionId;
use crate::http::encoding::{self, reply};

// Either the token JSON or a plain-text error
pub fn callback_endpoint(
    client: Arc<OAuth2Client>,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("callback")
        .and(warp::get())
        .and(encoding::with_client(client))
        .and(warp::query::<CallbackParams>())
        .and(encoding::session())
        .and_then(
            |client: Arc<OAuth2Client>, params: CallbackParams, session: Option<SessionId>| async move {
                reply::json_encode(client.callback(params, session).await)
            },
        )
}
