use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{event, Level};
use warp::Filter;

use crate::client::OAuth2Client;

mod endpoints;

use endpoints::{callback::callback_endpoint, login::login_endpoint, session::session_endpoint};

use super::encoding::error::handle_reject;

#[derive(Debug)]
pub struct Server {
    client: Arc<OAuth2Client>,
}

impl Server {
    pub fn new(client: Arc<OAuth2Client>) -> Self {
        Self {
            client: Arc::clone(&client),
        }
    }

    pub fn routes(
        &self,
    ) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let client = self.client.clone();

        let login = login_endpoint(client.clone());
        let callback = callback_endpoint(client.clone());
        let session = session_endpoint(client);

        login
            .or(callback)
            .or(session)
            .recover(handle_reject)
            .with(warp::log("kagi::http"))
    }

    /// Binds `addr` and serves until the process is stopped.
    pub async fn serve(self, addr: SocketAddr) -> Result<(), warp::Error> {
        let routes = self.routes();
        let (bound, server) = warp::serve(routes).try_bind_ephemeral(addr)?;

        if self.client.config().bind_session {
            let client = self.client.clone();
            tokio::spawn(async move { client.start_clean_up_worker().await });
        }

        event!(
            Level::INFO,
            addr = %bound,
            bind_session = self.client.config().bind_session,
            "Server started"
        );
        server.await;

        Ok(())
    }
}
