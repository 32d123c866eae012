use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::dates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

/// Account holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    #[serde(rename = "createdAt", default, with = "dates::optional")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, with = "dates::optional")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Grant a third-party client holds on the user's account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorization {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub scopes: Option<Vec<String>>,
    #[serde(rename = "createdAt", default, with = "dates::optional")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_wire_names_and_dates() {
        let body = r#"{
            "id": "u-1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "gender": "FEMALE",
            "createdAt": "2017-05-02T14:03:22Z",
            "updatedAt": "2017-05-02T14:03:22.123Z"
        }"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.gender, Some(Gender::Female));
        assert!(user.created_at.is_some());
        assert!(user.updated_at.is_some());
    }
}
