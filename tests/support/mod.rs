#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use kagi::client::OAuth2Client;
use kagi::core::models::ClientConfig;
use kagi::core::types::{ClientId, ClientSecret};
use kagi::http::server::Server;
use warp::http::StatusCode;
use warp::Filter;

pub const AUTH_ENDPOINT: &str = "http://localhost:8080/realms/poc-app/protocol/openid-connect/auth";
pub const CLIENT_ID: &str = "code-flow-client";
pub const CLIENT_SECRET: &str = "test-secret";

pub type Form = HashMap<String, String>;

/// Stand-in for the identity provider's token endpoint. Answers every
/// form POST with a canned response and records what it received.
pub struct MockProvider {
    addr: SocketAddr,
    forms: Arc<Mutex<Vec<Form>>>,
}

impl MockProvider {
    pub fn start(status: StatusCode, body: &'static str) -> Self {
        let forms = Arc::new(Mutex::new(Vec::new()));
        let recorded = forms.clone();

        let token = warp::path("token")
            .and(warp::post())
            .and(warp::header::exact(
                "content-type",
                "application/x-www-form-urlencoded",
            ))
            .and(warp::body::form::<Form>())
            .map(move |form: Form| {
                recorded.lock().unwrap().push(form);
                warp::reply::with_status(
                    warp::reply::with_header(body, "content-type", "application/json"),
                    status,
                )
            });

        let (addr, server) = warp::serve(token).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self { addr, forms }
    }

    /// Accepts the exchange but only answers after `delay`.
    pub fn start_slow(delay: Duration) -> Self {
        let forms = Arc::new(Mutex::new(Vec::new()));

        let token = warp::path("token")
            .and(warp::post())
            .and_then(move || async move {
                tokio::time::sleep(delay).await;
                Ok::<_, warp::Rejection>(warp::reply::json(&serde_json::json!({
                    "access_token": "late"
                })))
            });

        let (addr, server) = warp::serve(token).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self { addr, forms }
    }

    pub fn token_endpoint(&self) -> String {
        format!("http://{}/token", self.addr)
    }

    pub fn forms(&self) -> Vec<Form> {
        self.forms.lock().unwrap().clone()
    }
}

/// A token endpoint nothing listens on.
pub fn unreachable_token_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/token", addr)
}

pub fn config(token_endpoint: &str) -> ClientConfig {
    ClientConfig::new(
        "http://localhost:8081",
        AUTH_ENDPOINT,
        token_endpoint,
        ClientId(CLIENT_ID.to_string()),
        ClientSecret(CLIENT_SECRET.to_string()),
    )
}

pub fn server(config: ClientConfig) -> Server {
    Server::new(Arc::new(OAuth2Client::new(config).unwrap()))
}

pub fn body_text(response: &warp::http::Response<warp::hyper::body::Bytes>) -> String {
    String::from_utf8_lossy(response.body()).into_owned()
}
