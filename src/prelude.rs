//! Convenience re-exports for common use.

pub use crate::api::{FleetApi, HistoryQuery};
pub use crate::auth::{
    AuthError, AuthService, ConnectOutcome, FileTokenStore, FlowOutcome, LoginSurface,
    RegisterOutcome, Session, Token, TokenStore,
};
pub use crate::config::{Environment, OAuth2Config};
pub use crate::error::{ApiError, FleetwireError, Result};
