//! Vehicle endpoints.

use super::{FleetApi, HistoryQuery};
use crate::client::ApiRequest;
use crate::error::Result;
use crate::model::{Accelerometer, Location, Privacy, Signal, Status, Trip, Vehicle};

impl FleetApi {
    /// Vehicle by id.
    pub async fn vehicle(&self, vehicle_id: &str) -> Result<Vehicle> {
        self.call(ApiRequest::get(format!("vehicles/{vehicle_id}")))
            .await
    }

    /// Update a vehicle.
    pub async fn update_vehicle(&self, vehicle_id: &str, vehicle: &Vehicle) -> Result<Vehicle> {
        let body = serde_json::to_value(vehicle)?;
        self.call(ApiRequest::patch(format!("vehicles/{vehicle_id}")).json(body))
            .await
    }

    /// Unpair the device from a vehicle.
    pub async fn dissociate_vehicle(&self, vehicle_id: &str) -> Result<()> {
        self.call_unit(ApiRequest::delete(format!("vehicles/{vehicle_id}/device")))
            .await
    }

    /// Latest known state of a vehicle.
    pub async fn vehicle_status(&self, vehicle_id: &str) -> Result<Status> {
        self.call(ApiRequest::get(format!("vehicles/{vehicle_id}/status")))
            .await
    }

    /// Trips recorded for a vehicle.
    pub async fn vehicle_trips(&self, vehicle_id: &str) -> Result<Vec<Trip>> {
        self.call(ApiRequest::get(format!("vehicles/{vehicle_id}/trips")))
            .await
    }

    /// Signal history for a vehicle.
    pub async fn vehicle_signals(
        &self,
        vehicle_id: &str,
        query: &HistoryQuery,
    ) -> Result<Vec<Signal>> {
        self.call(
            ApiRequest::get(format!("vehicles/{vehicle_id}/signals")).queries(query.to_query()),
        )
        .await
    }

    /// Location history for a vehicle.
    pub async fn vehicle_locations(
        &self,
        vehicle_id: &str,
        query: &HistoryQuery,
    ) -> Result<Vec<Location>> {
        self.call(
            ApiRequest::get(format!("vehicles/{vehicle_id}/locations")).queries(query.to_query()),
        )
        .await
    }

    /// Accelerometer history for a vehicle.
    pub async fn vehicle_accelerometers(
        &self,
        vehicle_id: &str,
        query: &HistoryQuery,
    ) -> Result<Vec<Accelerometer>> {
        self.call(
            ApiRequest::get(format!("vehicles/{vehicle_id}/accelerometers"))
                .queries(query.to_query()),
        )
        .await
    }

    /// Privacy sessions of a vehicle.
    pub async fn vehicle_privacies(
        &self,
        vehicle_id: &str,
        query: &HistoryQuery,
    ) -> Result<Vec<Privacy>> {
        self.call(
            ApiRequest::get(format!("vehicles/{vehicle_id}/privacies")).queries(query.to_query()),
        )
        .await
    }

    /// Start a privacy session on a vehicle.
    pub async fn enable_privacy(&self, vehicle_id: &str) -> Result<Privacy> {
        self.call(ApiRequest::post(format!("vehicles/{vehicle_id}/privacies")))
            .await
    }

    /// Stop a running privacy session.
    pub async fn disable_privacy(&self, privacy_id: &str) -> Result<Privacy> {
        self.call(ApiRequest::put(format!("privacies/{privacy_id}")))
            .await
    }
}
