mod support;

use std::collections::HashMap;

use kagi::core::models::ClientConfig;
use url::Url;
use warp::http::StatusCode;

use support::{body_text, config, server, MockProvider};

fn location(response: &warp::http::Response<warp::hyper::body::Bytes>) -> String {
    response.headers()["location"].to_str().unwrap().to_string()
}

#[tokio::test]
async fn login_redirects_to_the_authorization_endpoint() {
    let provider = MockProvider::start(StatusCode::OK, "{}");
    let routes = server(config(&provider.token_endpoint())).routes();

    let response = warp::test::request().path("/login").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let target = Url::parse(&location(&response)).unwrap();
    assert_eq!(target.host_str(), Some("localhost"));
    assert_eq!(target.port(), Some(8080));
    assert_eq!(target.path(), "/realms/poc-app/protocol/openid-connect/auth");

    let query: HashMap<String, String> = target.query_pairs().into_owned().collect();
    let expected: HashMap<String, String> = vec![
        ("client_id", "code-flow-client"),
        ("response_type", "code"),
        ("redirect_uri", "http://localhost:8081/callback"),
        ("scope", "openid"),
        ("state", "xyz123"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(query, expected);

    assert!(provider.forms().is_empty());
}

#[tokio::test]
async fn repeated_logins_redirect_to_the_same_url() {
    let routes = server(config("http://localhost:8080/token")).routes();

    let first = warp::test::request().path("/login").reply(&routes).await;
    let second = warp::test::request().path("/login").reply(&routes).await;

    assert_eq!(location(&first), location(&second));
    assert!(first.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn configured_scope_and_state_are_sent() {
    let config = ClientConfig {
        scope: "openid profile email".parse().unwrap(),
        state: kagi::core::types::State("fixed".to_string()),
        ..config("http://localhost:8080/token")
    };
    let routes = server(config).routes();

    let response = warp::test::request().path("/login").reply(&routes).await;
    let target = Url::parse(&location(&response)).unwrap();
    let query: HashMap<String, String> = target.query_pairs().into_owned().collect();

    assert_eq!(query["scope"], "email openid profile");
    assert_eq!(query["state"], "fixed");
}

#[tokio::test]
async fn malformed_auth_endpoint_is_a_server_error() {
    let config = ClientConfig {
        auth_endpoint: "not a url".to_string(),
        ..config("http://localhost:8080/token")
    };
    let routes = server(config).routes();

    let response = warp::test::request().path("/login").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(&response).starts_with("parse auth endpoint error"));
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let routes = server(config("http://localhost:8080/token")).routes();

    let response = warp::test::request().path("/logout").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
