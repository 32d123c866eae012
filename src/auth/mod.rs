//! OAuth2 authorization-code flow, token storage, and session state.

pub mod error;
pub mod flow;
pub mod oauth;
pub mod service;
pub mod session;
pub mod store;
pub mod token;

pub use error::AuthError;
pub use flow::{AuthorizationFlow, FlowKind, FlowOutcome, LoginSurface};
pub use oauth::OAuthTokenClient;
pub use service::{AuthService, ConnectOutcome, RegisterOutcome};
pub use session::Session;
pub use store::{FileTokenStore, TokenStore};
pub use token::Token;
