//! Domain facade over the authenticated request pipeline.
//!
//! Every call gates on the session flag before touching the network and
//! normalizes non-2xx responses into the structured API error.

mod fleets;
mod trips;
mod users;
mod vehicles;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::auth::session::Session;
use crate::client::{ApiClient, ApiRequest, HttpResponse};
use crate::error::{FleetwireError, Result};
use crate::util::dates::format_api_date;

/// Domain API facade. Every call requires a connected session.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use fleetwire::auth::{FileTokenStore, Session};
/// use fleetwire::config::{Environment, OAuth2Config};
/// use fleetwire::FleetApi;
///
/// # async fn example() -> fleetwire::error::Result<()> {
/// let env = Environment::new(OAuth2Config::new("id", "secret"));
/// let session = Session::new(env, Arc::new(FileTokenStore::new_default()));
/// let api = FleetApi::new(session);
/// let vehicles = api.user_vehicles().await?;
/// # Ok(())
/// # }
/// ```
pub struct FleetApi {
    session: Arc<Session>,
    client: ApiClient,
}

impl FleetApi {
    pub fn new(session: Arc<Session>) -> Self {
        let client = ApiClient::new(session.clone());
        Self { session, client }
    }

    /// Whether a user is connected.
    pub fn logged(&self) -> bool {
        self.session.logged()
    }

    fn guard(&self) -> Result<()> {
        if self.session.logged() {
            Ok(())
        } else {
            Err(FleetwireError::NotConnected)
        }
    }

    pub(crate) async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        self.guard()?;
        let response = self.client.execute(request).await?;
        decode(response)
    }

    pub(crate) async fn call_unit(&self, request: ApiRequest) -> Result<()> {
        self.guard()?;
        let response = self.client.execute(request).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(normalize(response))
        }
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    if response.is_success() {
        Ok(response.json()?)
    } else {
        Err(normalize(response))
    }
}

/// Turn a non-2xx response into the structured API failure.
fn normalize(response: HttpResponse) -> FleetwireError {
    FleetwireError::api(response.status().as_u16(), response.body())
}

/// Optional time-window parameters accepted by history endpoints.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub signals: Option<String>,
}

impl HistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Comma-separated signal names to filter on.
    pub fn signals(mut self, signals: impl Into<String>) -> Self {
        self.signals = Some(signals.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = &self.from {
            pairs.push(("from".to_string(), format_api_date(from)));
        }
        if let Some(to) = &self.to {
            pairs.push(("to".to_string(), format_api_date(to)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(signals) = &self.signals {
            pairs.push(("signals".to_string(), signals.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn history_query_formats_dates_and_skips_absent_fields() {
        let query = HistoryQuery::new()
            .from(Utc.with_ymd_and_hms(2017, 5, 2, 14, 3, 22).unwrap())
            .limit(10);
        let pairs = query.to_query();
        assert_eq!(
            pairs,
            vec![
                ("from".to_string(), "2017-05-02T14:03:22Z".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn empty_history_query_produces_no_pairs() {
        assert!(HistoryQuery::new().to_query().is_empty());
    }
}
