//! Interactive authorization-code flow.
//!
//! The web surface that renders the authorization page is a host-supplied
//! capability ([`LoginSurface`]). The protocol logic here (building the
//! URL, watching navigations for the redirect, classifying the outcome)
//! stays independent of any UI.

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::error::AuthError;
use crate::config::Environment;

const ROUTE_AUTHORIZE: &str = "oauth/authorize";
const ROUTE_REGISTER: &str = "oauth/register";

const PARAM_CLIENT_ID: &str = "client_id";
const PARAM_RESPONSE_TYPE: &str = "response_type";
const PARAM_SCOPE: &str = "scope";
const PARAM_REDIRECT_URI: &str = "redirect_uri";
const PARAM_ERROR: &str = "error";
const PARAM_CODE: &str = "code";

const ACCESS_DENIED: &str = "access_denied";

/// Which authorization page the flow drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    /// Log an existing user in (`oauth/authorize`).
    Connect,
    /// Create an account, then log in (`oauth/register`).
    Register,
}

impl FlowKind {
    fn route(self) -> &'static str {
        match self {
            FlowKind::Connect => ROUTE_AUTHORIZE,
            FlowKind::Register => ROUTE_REGISTER,
        }
    }
}

/// Terminal result of an interactive flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The redirect carried an authorization code.
    Authorized { code: String, redirect_uri: String },
    /// The user refused the authorization request.
    Denied,
    /// The user backed out with no page history left.
    Cancelled,
    /// The server reported an error, or the page could not be loaded.
    Failed { reason: String },
}

/// Per-navigation classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Not the redirect; let the page load.
    Continue,
    /// Terminal: stop the surface and report.
    Complete(FlowOutcome),
}

/// Web view capability the host application provides.
///
/// The flow loads one URL and then inspects every navigation the page
/// attempts until a terminal outcome is reached.
#[async_trait]
pub trait LoginSurface: Send {
    /// Load the authorization page.
    async fn start(&mut self, url: &Url) -> Result<(), AuthError>;

    /// Next navigation the page attempts. `None` once the user backs out
    /// with no history left.
    async fn next_navigation(&mut self) -> Result<Option<String>, AuthError>;

    /// Drop cached page state; called once a code has been captured.
    fn clear_cache(&mut self) {}
}

/// Drives a [`LoginSurface`] through one authorization-code round.
#[derive(Debug, Clone)]
pub struct AuthorizationFlow {
    env: Environment,
    kind: FlowKind,
}

impl AuthorizationFlow {
    pub fn new(env: &Environment, kind: FlowKind) -> Self {
        Self {
            env: env.clone(),
            kind,
        }
    }

    /// Authorization page URL for this flow.
    ///
    /// Fails before any page is loaded when the configured host or
    /// redirect URI cannot form a valid URL.
    pub fn authorize_url(&self) -> Result<Url, AuthError> {
        let oauth = self.env.oauth();
        let base = Url::parse(self.env.base_url())
            .map_err(|err| AuthError::InvalidAuthorizeUrl(err.to_string()))?;
        let mut url = base
            .join(self.kind.route())
            .map_err(|err| AuthError::InvalidAuthorizeUrl(err.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(PARAM_CLIENT_ID, &oauth.client_id);
            if self.kind == FlowKind::Connect {
                query.append_pair(PARAM_RESPONSE_TYPE, "code");
            }
            query.append_pair(PARAM_SCOPE, &oauth.scopes.join(" "));
            if !oauth.redirect_uri.is_empty() {
                Url::parse(&oauth.redirect_uri).map_err(|err| {
                    AuthError::InvalidAuthorizeUrl(format!(
                        "redirect URI {:?}: {err}",
                        oauth.redirect_uri
                    ))
                })?;
                query.append_pair(PARAM_REDIRECT_URI, &oauth.redirect_uri);
            }
        }
        Ok(url)
    }

    /// Classify a navigation the surface observed.
    ///
    /// An `error` query parameter ends the flow; `access_denied` is kept
    /// distinct on the connect flow so callers can stay quiet about it.
    /// A `code` parameter is the captured authorization code. Anything
    /// else is an ordinary page load.
    pub fn classify(&self, navigation: &str) -> Navigation {
        let url = match Url::parse(navigation) {
            Ok(url) => url,
            Err(_) => return Navigation::Continue,
        };
        if let Some(error) = query_param(&url, PARAM_ERROR) {
            let outcome = match self.kind {
                FlowKind::Connect if error == ACCESS_DENIED => FlowOutcome::Denied,
                _ => FlowOutcome::Failed { reason: error },
            };
            return Navigation::Complete(outcome);
        }
        if let Some(code) = query_param(&url, PARAM_CODE) {
            return Navigation::Complete(FlowOutcome::Authorized {
                code,
                redirect_uri: self.env.oauth().redirect_uri.clone(),
            });
        }
        Navigation::Continue
    }

    /// Run the flow to a terminal outcome.
    ///
    /// Surface failures (page-load errors) become [`FlowOutcome::Failed`];
    /// a surface that runs out of navigations is a cancellation, not an
    /// error.
    pub async fn run<S: LoginSurface + ?Sized>(&self, surface: &mut S) -> FlowOutcome {
        let url = match self.authorize_url() {
            Ok(url) => url,
            Err(err) => {
                return FlowOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };
        debug!(kind = ?self.kind, %url, "loading authorization page");
        if let Err(err) = surface.start(&url).await {
            return FlowOutcome::Failed {
                reason: err.to_string(),
            };
        }
        loop {
            match surface.next_navigation().await {
                Ok(Some(navigation)) => {
                    if let Navigation::Complete(outcome) = self.classify(&navigation) {
                        if matches!(outcome, FlowOutcome::Authorized { .. }) {
                            surface.clear_cache();
                        }
                        return outcome;
                    }
                }
                Ok(None) => return FlowOutcome::Cancelled,
                Err(err) => {
                    return FlowOutcome::Failed {
                        reason: err.to_string(),
                    }
                }
            }
        }
    }
}

fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
