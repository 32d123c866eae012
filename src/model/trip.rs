use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::dates;

use super::telemetry::Location;

/// Journey between an engine start and stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub mileage: Option<Mileage>,
    #[serde(rename = "usedTime")]
    pub used_time: Option<UsedTime>,
    #[serde(rename = "startLocation")]
    pub start_location: Option<Location>,
    #[serde(rename = "endLocation")]
    pub end_location: Option<Location>,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,
    #[serde(rename = "createdAt", default, with = "dates::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, with = "dates::optional")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mileage {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsedTime {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub unit: String,
}
