#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Url;

use fleetwire::auth::{
    AuthError, AuthService, ConnectOutcome, LoginSurface, Session, Token, TokenStore,
};
use fleetwire::config::{Environment, OAuth2Config};

#[derive(Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<Token>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, token: Token) {
        *self.token.lock().expect("store lock poisoned") = Some(token);
    }

    pub fn current(&self) -> Option<Token> {
        self.token.lock().expect("store lock poisoned").clone()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get(&self) -> Result<Option<Token>, AuthError> {
        Ok(self.current())
    }

    fn store(&self, token: &Token) -> Result<(), AuthError> {
        *self.token.lock().expect("store lock poisoned") = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.token.lock().expect("store lock poisoned") = None;
        Ok(())
    }
}

pub fn token(access: &str, refresh: &str) -> Token {
    Token {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        expires_in: 3600,
        scope: "users.read vehicles.read".to_string(),
        token_type: "bearer".to_string(),
    }
}

pub fn test_env(base_url: &str) -> Environment {
    let oauth = OAuth2Config::new("client-id", "client-secret")
        .redirect_uri("myapp://oauth/callback")
        .scopes(["users.read", "vehicles.read"]);
    Environment::new(oauth).with_base_url(base_url)
}

/// Connect a session whose store was seeded beforehand; no network needed.
pub async fn connect_seeded(session: &Arc<Session>) {
    let auth = AuthService::new(session.clone());
    let mut surface = ScriptedSurface::new([]);
    match auth.connect(&mut surface).await.expect("connect") {
        ConnectOutcome::Connected { .. } => {}
        other => panic!("expected connected, got {other:?}"),
    }
}

/// Login surface that replays a scripted list of navigations.
pub struct ScriptedSurface {
    navigations: VecDeque<Option<String>>,
    pub started_url: Option<String>,
    pub cache_cleared: bool,
    pub fail_start: Option<String>,
}

impl ScriptedSurface {
    pub fn new<I>(navigations: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            navigations: navigations.into_iter().collect(),
            started_url: None,
            cache_cleared: false,
            fail_start: None,
        }
    }

    /// Surface that lands straight on the given redirect.
    pub fn landing(url: &str) -> Self {
        Self::new([Some(url.to_string())])
    }

    /// Surface whose initial page load fails.
    pub fn failing(reason: &str) -> Self {
        let mut surface = Self::new([]);
        surface.fail_start = Some(reason.to_string());
        surface
    }
}

#[async_trait]
impl LoginSurface for ScriptedSurface {
    async fn start(&mut self, url: &Url) -> Result<(), AuthError> {
        if let Some(reason) = &self.fail_start {
            return Err(AuthError::Flow(reason.clone()));
        }
        self.started_url = Some(url.to_string());
        Ok(())
    }

    async fn next_navigation(&mut self) -> Result<Option<String>, AuthError> {
        Ok(self.navigations.pop_front().unwrap_or(None))
    }

    fn clear_cache(&mut self) {
        self.cache_cleared = true;
    }
}
