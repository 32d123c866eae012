//! Fleet endpoints.

use super::{FleetApi, HistoryQuery};
use crate::client::ApiRequest;
use crate::error::Result;
use crate::model::{Fleet, Loan, User, Vehicle};

impl FleetApi {
    /// Fleets the current user belongs to.
    pub async fn my_fleets(&self) -> Result<Vec<Fleet>> {
        self.call(ApiRequest::get("fleets/mine")).await
    }

    /// Drivers of a fleet.
    pub async fn fleet_drivers(&self, fleet_id: &str) -> Result<Vec<User>> {
        self.call(ApiRequest::get(format!("fleets/{fleet_id}/drivers")))
            .await
    }

    /// Vehicles of a fleet.
    pub async fn fleet_vehicles(&self, fleet_id: &str) -> Result<Vec<Vehicle>> {
        self.call(ApiRequest::get(format!("fleets/{fleet_id}/vehicles")))
            .await
    }

    /// Loans of a fleet vehicle.
    pub async fn fleet_vehicle_loans(
        &self,
        fleet_id: &str,
        vehicle_id: &str,
        query: &HistoryQuery,
    ) -> Result<Vec<Loan>> {
        self.call(
            ApiRequest::get(format!("fleets/{fleet_id}/vehicles/{vehicle_id}/loans"))
                .queries(query.to_query()),
        )
        .await
    }
}
