//! User endpoints.

use super::FleetApi;
use crate::client::ApiRequest;
use crate::error::Result;
use crate::model::{Authorization, User, Vehicle};

impl FleetApi {
    /// Current authenticated user.
    pub async fn user(&self) -> Result<User> {
        self.call(ApiRequest::get("users/me")).await
    }

    /// User by id (`me` is also acceptable).
    pub async fn user_by_id(&self, user_id: &str) -> Result<User> {
        self.call(ApiRequest::get(format!("users/{user_id}"))).await
    }

    /// Update the current user.
    pub async fn update_user(&self, user: &User) -> Result<User> {
        let body = serde_json::to_value(user)?;
        self.call(ApiRequest::patch("users/me").json(body)).await
    }

    /// Vehicles of the current user.
    pub async fn user_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.user_vehicles_of("me").await
    }

    /// Vehicles of the given user.
    pub async fn user_vehicles_of(&self, user_id: &str) -> Result<Vec<Vehicle>> {
        self.call(ApiRequest::get(format!("users/{user_id}/vehicles")))
            .await
    }

    /// Pair a vehicle to the current user with a device id and pin.
    pub async fn associate_vehicle(&self, device_id: &str, device_pin: &str) -> Result<Vehicle> {
        let body = serde_json::json!({
            "deviceId": device_id,
            "devicePin": device_pin,
        });
        self.call(ApiRequest::post("users/me/vehicles").json(body))
            .await
    }

    /// Third-party grants on the current user's account.
    pub async fn authorizations(&self) -> Result<Vec<Authorization>> {
        self.call(ApiRequest::get("users/me/authorizations")).await
    }

    /// Revoke a third-party grant.
    pub async fn revoke_authorization(&self, authorization_id: &str) -> Result<()> {
        self.call_unit(ApiRequest::delete(format!(
            "authorizations/{authorization_id}"
        )))
        .await
    }
}
