//! SDK environment and OAuth2 client configuration.

use std::time::Duration;

/// Host the SDK talks to when none is configured.
pub const DEFAULT_HOST: &str = "api.fleetwire.io";

/// Default connect and read timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// OAuth2 client credentials and grant parameters.
///
/// Immutable once built; owned by the [`Environment`] for the life of the
/// process.
///
/// # Example
/// ```
/// use fleetwire::config::OAuth2Config;
///
/// let oauth = OAuth2Config::new("client-id", "client-secret")
///     .redirect_uri("myapp://oauth/callback")
///     .scope("users.read");
/// assert_eq!(oauth.scopes, vec!["users.read".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct OAuth2Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

impl OAuth2Config {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: String::new(),
            scopes: Vec::new(),
        }
    }

    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = uri.into();
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    pub fn scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }
}

/// Deployment environment: host, timeouts, and the OAuth2 client.
#[derive(Debug, Clone)]
pub struct Environment {
    oauth: OAuth2Config,
    host: String,
    base_url: String,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl Environment {
    pub fn new(oauth: OAuth2Config) -> Self {
        Self {
            oauth,
            host: DEFAULT_HOST.to_string(),
            base_url: format!("https://{DEFAULT_HOST}/"),
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self.base_url = format!("https://{}/", self.host);
        self
    }

    /// Point the SDK at a full base URL (test servers speak plain HTTP).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self.read_timeout = timeout;
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    pub fn oauth(&self) -> &OAuth2Config {
        &self.oauth
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Base URL with a trailing slash, ready for route concatenation.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub(crate) fn http_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.read_timeout)
            .build()
            .expect("Failed to build HTTP client")
    }
}
