use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::dates;

/// Vehicle paired to a user through a telemetry device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "licensePlate")]
    pub license_plate: Option<String>,
    pub device: Option<Device>,
    #[serde(rename = "createdAt", default, with = "dates::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, with = "dates::optional")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Telemetry dongle installed in a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,
}

/// Privacy session during which no data is recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Privacy {
    pub id: String,
    #[serde(rename = "startedAt", default, with = "dates::optional")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "endedAt", default, with = "dates::optional")]
    pub ended_at: Option<DateTime<Utc>>,
}
