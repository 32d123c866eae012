//! Fleetwire — Rust client SDK for the Fleetwire vehicle-telemetry API.
//!
//! The SDK authenticates a user through the OAuth2 authorization-code flow
//! (driven through a pluggable [`LoginSurface`](auth::LoginSurface)),
//! persists the token pair durably, and exposes a domain facade whose
//! requests carry a bearer token and transparently survive access-token
//! expiry with a one-shot refresh-and-replay.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use fleetwire::auth::{FileTokenStore, Session};
//! use fleetwire::config::{Environment, OAuth2Config};
//! use fleetwire::FleetApi;
//!
//! # async fn example() -> fleetwire::error::Result<()> {
//! let oauth = OAuth2Config::new("client-id", "client-secret")
//!     .redirect_uri("myapp://oauth/callback")
//!     .scope("users.read")
//!     .scope("vehicles.read");
//! let env = Environment::new(oauth);
//! let session = Session::new(env, Arc::new(FileTokenStore::new_default()));
//! let api = FleetApi::new(session);
//! let me = api.user().await?;
//! println!("hello {:?}", me.first_name);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod util;

pub use api::FleetApi;
pub use auth::AuthService;
