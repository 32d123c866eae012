mod support;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fleetwire::auth::{AuthError, OAuthTokenClient};

use support::test_env;

fn basic_header() -> String {
    format!("Basic {}", STANDARD.encode("client-id:client-secret"))
}

fn token_body() -> serde_json::Value {
    json!({
        "access_token": "access-1",
        "refresh_token": "refresh-1",
        "expires_in": 3600,
        "scope": "users.read vehicles.read",
        "token_type": "bearer"
    })
}

#[tokio::test]
async fn exchange_code_posts_form_with_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("authorization", basic_header()))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=ABC"))
        .and(body_string_contains(
            "redirect_uri=myapp%3A%2F%2Foauth%2Fcallback",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OAuthTokenClient::new(&test_env(&server.uri()));
    let token = client
        .exchange_code("ABC", "myapp://oauth/callback")
        .await
        .expect("exchange");

    assert_eq!(token.access_token, "access-1");
    assert_eq!(token.refresh_token, "refresh-1");
    assert_eq!(token.expires_in, 3600);
}

#[tokio::test]
async fn exchange_code_rejection_carries_parsed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Code expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OAuthTokenClient::new(&test_env(&server.uri()));
    let result = client.exchange_code("STALE", "myapp://oauth/callback").await;

    match result {
        Err(AuthError::TokenEndpoint { status, error }) => {
            assert_eq!(status, 400);
            assert_eq!(error.error.as_deref(), Some("invalid_grant"));
        }
        other => panic!("expected token endpoint error, got {other:?}"),
    }
}

#[tokio::test]
async fn refresh_returns_raw_response_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("authorization", basic_header()))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=refresh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OAuthTokenClient::new(&test_env(&server.uri()));
    let response = client
        .refresh_token_response("refresh-1")
        .await
        .expect("refresh");

    assert!(response.is_success());
    let token: fleetwire::auth::Token = response.json().expect("token body");
    assert_eq!(token.access_token, "access-1");
}

#[tokio::test]
async fn refresh_returns_raw_response_on_rejection_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_grant"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OAuthTokenClient::new(&test_env(&server.uri()));
    let response = client
        .refresh_token_response("refresh-1")
        .await
        .expect("refresh call itself succeeds");

    assert!(!response.is_success());
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response.api_error().error.as_deref(), Some("invalid_grant"));
}

#[tokio::test]
async fn revoke_sends_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/revoke"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = OAuthTokenClient::new(&test_env(&server.uri()));
    client.revoke("access-1").await.expect("revoke");
}

#[tokio::test]
async fn revoke_rejection_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/revoke"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = OAuthTokenClient::new(&test_env(&server.uri()));
    let result = client.revoke("access-1").await;
    assert!(
        matches!(result, Err(AuthError::InvalidResponse(message)) if message.contains("status 500"))
    );
}
