use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::dates;

use super::vehicle::Vehicle;

/// Fleet the current user belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fleet {
    pub id: String,
    pub name: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "joinedAt", default, with = "dates::optional")]
    pub joined_at: Option<DateTime<Utc>>,
}

/// Loan of a fleet vehicle to a driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    #[serde(rename = "startedAt", default, with = "dates::optional")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "endedAt", default, with = "dates::optional")]
    pub ended_at: Option<DateTime<Utc>>,
    pub vehicle: Option<Vehicle>,
}
