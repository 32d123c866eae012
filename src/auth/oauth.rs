//! OAuth2 token endpoint client: code exchange, refresh, revocation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use super::error::AuthError;
use super::token::Token;
use crate::client::HttpResponse;
use crate::config::Environment;
use crate::error::parse_error_body;

const ROUTE_TOKEN: &str = "oauth/token";
const ROUTE_REVOKE: &str = "oauth/revoke";

const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
const GRANT_REFRESH_TOKEN: &str = "refresh_token";

/// Client for the `oauth/token` and `oauth/revoke` endpoints.
///
/// Exchange and refresh authenticate with the Basic client-credential
/// header; revocation carries the user's bearer token.
pub struct OAuthTokenClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl OAuthTokenClient {
    pub fn new(env: &Environment) -> Self {
        let oauth = env.oauth();
        Self {
            http: env.http_client(),
            base_url: env.base_url().to_string(),
            client_id: oauth.client_id.clone(),
            client_secret: oauth.client_secret.clone(),
        }
    }

    fn basic_authorization(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(pair))
    }

    fn token_url(&self) -> String {
        format!("{}{ROUTE_TOKEN}", self.base_url)
    }

    /// Swap an authorization code for a token pair.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<Token, AuthError> {
        debug!("exchanging authorization code");
        let response = self
            .http
            .post(self.token_url())
            .header(AUTHORIZATION, self.basic_authorization())
            .form(&[
                ("grant_type", GRANT_AUTHORIZATION_CODE),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AuthError::TokenEndpoint {
                status: status.as_u16(),
                error: parse_error_body(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Refresh the token pair.
    ///
    /// Returns the captured raw response so the caller can branch on an
    /// unsuccessful refresh without an error path.
    pub async fn refresh_token_response(
        &self,
        refresh_token: &str,
    ) -> Result<HttpResponse, AuthError> {
        debug!("refreshing access token");
        let response = self
            .http
            .post(self.token_url())
            .header(AUTHORIZATION, self.basic_authorization())
            .form(&[
                ("grant_type", GRANT_REFRESH_TOKEN),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;
        Ok(HttpResponse::capture(response).await?)
    }

    /// Revoke the current token. Callers treat this as best-effort.
    pub async fn revoke(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .post(format!("{}{ROUTE_REVOKE}", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AuthError::InvalidResponse(format!(
                "Revoke failed with status {}",
                response.status()
            )));
        }
        Ok(())
    }
}
