use std::sync::Arc;

use warp::Filter;

use crate::client::OAuth2Client;
use crate::http::encoding::{self, reply};

pub fn login_endpoint(
    client: Arc<OAuth2Client>,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("login")
        .and(warp::get())
        .and(encoding::with_client(client))
        .and_then(|client: Arc<OAuth2Client>| async move {
            reply::reply(client.authorization_redirect().await)
        })
}
