use serde::{Deserialize, Serialize};

/// Token pair returned by the token endpoint and persisted by a
/// [`TokenStore`](super::TokenStore).
///
/// A successful exchange or refresh fully replaces any prior token.
///
/// # Example
/// ```
/// use fleetwire::auth::Token;
///
/// let token = Token {
///     access_token: "access".to_string(),
///     refresh_token: "refresh".to_string(),
///     expires_in: 3600,
///     scope: "users.read vehicles.read".to_string(),
///     token_type: "bearer".to_string(),
/// };
/// assert_eq!(token.expires_in, 3600);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub scope: String,
    pub token_type: String,
}
