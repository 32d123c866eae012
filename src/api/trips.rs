//! Trip endpoints.

use super::{FleetApi, HistoryQuery};
use crate::client::ApiRequest;
use crate::error::Result;
use crate::model::{Location, Signal, Trip};

impl FleetApi {
    /// Trip by id.
    pub async fn trip(&self, trip_id: &str) -> Result<Trip> {
        self.call(ApiRequest::get(format!("trips/{trip_id}"))).await
    }

    /// Signal history within a trip.
    pub async fn trip_signals(&self, trip_id: &str, query: &HistoryQuery) -> Result<Vec<Signal>> {
        self.call(ApiRequest::get(format!("trips/{trip_id}/signals")).queries(query.to_query()))
            .await
    }

    /// Location history within a trip.
    pub async fn trip_locations(
        &self,
        trip_id: &str,
        query: &HistoryQuery,
    ) -> Result<Vec<Location>> {
        self.call(ApiRequest::get(format!("trips/{trip_id}/locations")).queries(query.to_query()))
            .await
    }
}
