//! Authenticated request dispatch.
//!
//! Every request reads the current token from the store and carries it as
//! a bearer header. A 401 whose body is the API's expired-token payload
//! triggers one synchronous refresh and one replay of the original
//! request; any other failure passes through untouched.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::auth::oauth::OAuthTokenClient;
use crate::auth::session::Session;
use crate::auth::token::Token;
use crate::error::{parse_error_body, ApiError, FleetwireError};

/// HTTP response with its body captured eagerly.
///
/// A wire body can only be read once; capturing it up front lets both the
/// expiry classifier and the response decoder see it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    body: String,
}

impl HttpResponse {
    pub(crate) async fn capture(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let body = response.text().await?;
        Ok(Self { status, body })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Parse the body as the API error payload.
    pub fn api_error(&self) -> ApiError {
        parse_error_body(&self.body)
    }
}

/// Replayable request description.
///
/// The recovery path rebuilds the request from this instead of cloning a
/// consumed one.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn queries(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Dispatches API requests with the stored bearer token and the one-shot
/// refresh-and-replay recovery.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
    oauth: OAuthTokenClient,
    refresh_gate: Mutex<()>,
}

impl ApiClient {
    pub fn new(session: Arc<Session>) -> Self {
        let env = session.environment();
        Self {
            http: env.http_client(),
            base_url: env.base_url().to_string(),
            oauth: OAuthTokenClient::new(env),
            session,
            refresh_gate: Mutex::new(()),
        }
    }

    /// Send a request, recovering once from an expired access token.
    ///
    /// Non-2xx responses other than the expired-token 401 come back as-is;
    /// classification into errors belongs to the facade.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<HttpResponse, FleetwireError> {
        let token = self.current_token()?;
        let response = self.dispatch(&request, &token.access_token).await?;
        if response.is_success() {
            return Ok(response);
        }
        if response.status() == StatusCode::UNAUTHORIZED && response.api_error().is_token_expired()
        {
            if let Some(replayed) = self.refresh_and_replay(&request, &token).await? {
                return Ok(replayed);
            }
        }
        Ok(response)
    }

    fn current_token(&self) -> Result<Token, FleetwireError> {
        self.session
            .store()
            .get()
            .map_err(FleetwireError::from)?
            .ok_or_else(|| {
                FleetwireError::InvalidState(
                    "no token in store; connect the user first".to_string(),
                )
            })
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        access_token: &str,
    ) -> Result<HttpResponse, FleetwireError> {
        debug!(method = %request.method, path = %request.path, "dispatching API request");
        let mut builder = self
            .http
            .request(request.method.clone(), format!("{}{}", self.base_url, request.path))
            .header(AUTHORIZATION, format!("Bearer {access_token}"));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        Ok(HttpResponse::capture(response).await?)
    }

    /// One-shot recovery for an expired access token.
    ///
    /// Refreshes behind a single-flight gate: concurrent expiries queue
    /// here and reuse the replacement token instead of racing their own
    /// refresh calls. Returns `None` when the refresh itself was rejected,
    /// leaving the caller to surface the original response.
    async fn refresh_and_replay(
        &self,
        request: &ApiRequest,
        stale: &Token,
    ) -> Result<Option<HttpResponse>, FleetwireError> {
        let _gate = self.refresh_gate.lock().await;
        let current = self.current_token()?;
        if current.access_token != stale.access_token {
            // another caller refreshed while we waited on the gate
            return self.dispatch(request, &current.access_token).await.map(Some);
        }
        let refreshed = self
            .oauth
            .refresh_token_response(&current.refresh_token)
            .await
            .map_err(FleetwireError::from)?;
        if !refreshed.is_success() {
            warn!(status = %refreshed.status(), "token refresh rejected");
            return Ok(None);
        }
        let token: Token = refreshed.json()?;
        self.session
            .store()
            .store(&token)
            .map_err(FleetwireError::from)?;
        debug!("access token refreshed, replaying original request");
        self.dispatch(request, &token.access_token).await.map(Some)
    }
}
