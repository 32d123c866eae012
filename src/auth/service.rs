//! Connect, register, and disconnect flows over a [`Session`].

use std::sync::Arc;

use tracing::{debug, warn};

use super::error::AuthError;
use super::flow::{AuthorizationFlow, FlowKind, FlowOutcome, LoginSurface};
use super::oauth::OAuthTokenClient;
use super::session::Session;
use super::token::Token;

/// Result of [`AuthService::connect`].
#[derive(Debug, Clone)]
pub enum ConnectOutcome {
    /// A token is in place (freshly exchanged or already stored).
    Connected { token: Token },
    /// The user refused the authorization request.
    Denied,
    /// The user backed out of the login page.
    Cancelled,
    /// The flow or the code exchange failed.
    Failed { error: AuthError },
}

/// Result of [`AuthService::register`].
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
    /// Account created and user logged in.
    Registered { token: Token },
    /// The user backed out of the registration page.
    Cancelled,
    /// The flow or the code exchange failed.
    Failed { error: AuthError },
}

/// Authentication facade: drives the interactive flows and owns the token
/// lifecycle around them.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use fleetwire::auth::{AuthService, FileTokenStore, Session};
/// use fleetwire::config::{Environment, OAuth2Config};
///
/// let env = Environment::new(OAuth2Config::new("id", "secret"));
/// let session = Session::new(env, Arc::new(FileTokenStore::new_default()));
/// let auth = AuthService::new(session);
/// assert!(!auth.logged());
/// ```
pub struct AuthService {
    session: Arc<Session>,
    oauth: OAuthTokenClient,
}

impl AuthService {
    pub fn new(session: Arc<Session>) -> Self {
        let oauth = OAuthTokenClient::new(session.environment());
        Self { session, oauth }
    }

    /// Whether a user is connected.
    pub fn logged(&self) -> bool {
        self.session.logged()
    }

    /// Connect the user.
    ///
    /// A stored token short-circuits the interactive flow; otherwise the
    /// surface is driven through the authorization page and the captured
    /// code exchanged for a token, which is persisted before returning.
    pub async fn connect<S: LoginSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<ConnectOutcome, AuthError> {
        if let Some(token) = self.session.store().get()? {
            self.session.set_logged(true);
            return Ok(ConnectOutcome::Connected { token });
        }
        let flow = AuthorizationFlow::new(self.session.environment(), FlowKind::Connect);
        match flow.run(surface).await {
            FlowOutcome::Authorized { code, redirect_uri } => {
                match self.exchange_and_store(&code, &redirect_uri).await {
                    Ok(token) => Ok(ConnectOutcome::Connected { token }),
                    Err(error) => Ok(ConnectOutcome::Failed { error }),
                }
            }
            FlowOutcome::Denied => Ok(ConnectOutcome::Denied),
            FlowOutcome::Cancelled => Ok(ConnectOutcome::Cancelled),
            FlowOutcome::Failed { reason } => Ok(ConnectOutcome::Failed {
                error: AuthError::Flow(reason),
            }),
        }
    }

    /// Register a new user, logging them in on success.
    pub async fn register<S: LoginSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<RegisterOutcome, AuthError> {
        let flow = AuthorizationFlow::new(self.session.environment(), FlowKind::Register);
        match flow.run(surface).await {
            FlowOutcome::Authorized { code, redirect_uri } => {
                match self.exchange_and_store(&code, &redirect_uri).await {
                    Ok(token) => Ok(RegisterOutcome::Registered { token }),
                    Err(error) => Ok(RegisterOutcome::Failed { error }),
                }
            }
            FlowOutcome::Denied => Ok(RegisterOutcome::Failed {
                error: AuthError::Flow("access_denied".to_string()),
            }),
            FlowOutcome::Cancelled => Ok(RegisterOutcome::Cancelled),
            FlowOutcome::Failed { reason } => Ok(RegisterOutcome::Failed {
                error: AuthError::Flow(reason),
            }),
        }
    }

    /// Disconnect the user.
    ///
    /// Revocation is best-effort: a failure is logged and swallowed, and
    /// the local session always ends.
    pub async fn disconnect(&self) -> Result<(), AuthError> {
        if self.session.logged() {
            if let Some(token) = self.session.store().get()? {
                match self.oauth.revoke(&token.access_token).await {
                    Ok(()) => debug!("token revoked"),
                    Err(err) => warn!(error = %err, "token could not be revoked"),
                }
            }
        }
        self.session.set_logged(false);
        self.session.store().clear()?;
        Ok(())
    }

    async fn exchange_and_store(&self, code: &str, redirect_uri: &str) -> Result<Token, AuthError> {
        let token = self.oauth.exchange_code(code, redirect_uri).await?;
        self.session.store().store(&token)?;
        self.session.set_logged(true);
        Ok(token)
    }
}
