use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::dates;

/// Single named value sampled from the vehicle bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    pub value: serde_json::Value,
    #[serde(default, with = "dates::optional")]
    pub date: Option<DateTime<Utc>>,
}

/// GPS fix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub heading: f64,
    #[serde(default, with = "dates::optional")]
    pub date: Option<DateTime<Utc>>,
}

/// Accelerometer sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accelerometer {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default, with = "dates::optional")]
    pub date: Option<DateTime<Utc>>,
}

/// Latest known state of a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,
    pub location: Option<Location>,
    pub accelerometer: Option<Accelerometer>,
    pub signals: Option<Vec<Signal>>,
    #[serde(rename = "createdAt", default, with = "dates::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, with = "dates::optional")]
    pub updated_at: Option<DateTime<Utc>>,
}
