use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::store::TokenStore;
use crate::config::Environment;

/// Explicit user session shared by the auth service and the API facade.
///
/// One session per logged-in user context; owned by the host application
/// and handed around via `Arc` instead of process-global state.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use fleetwire::auth::{FileTokenStore, Session};
/// use fleetwire::config::{Environment, OAuth2Config};
///
/// let env = Environment::new(OAuth2Config::new("id", "secret"));
/// let session = Session::new(env, Arc::new(FileTokenStore::new_default()));
/// assert!(!session.logged());
/// ```
pub struct Session {
    env: Environment,
    store: Arc<dyn TokenStore>,
    logged: AtomicBool,
}

impl Session {
    pub fn new(env: Environment, store: Arc<dyn TokenStore>) -> Arc<Self> {
        Arc::new(Self {
            env,
            store,
            logged: AtomicBool::new(false),
        })
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Whether a user is connected.
    pub fn logged(&self) -> bool {
        self.logged.load(Ordering::Acquire)
    }

    pub(crate) fn set_logged(&self, logged: bool) {
        self.logged.store(logged, Ordering::Release);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("env", &self.env)
            .field("store", &"..")
            .field("logged", &self.logged())
            .finish()
    }
}
