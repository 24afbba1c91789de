use super::null_as_default;
use super::user::{UserId, UserRef};
use serde::{Deserialize, Serialize};

/// Unique identifier for a saved search alert.
pub type AlertId = i64;

/// A saved search: the backend notifies the owner when a new listing matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year_min: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year_max: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_min: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_max: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mileage_max: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fuel_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transmission: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_defects: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
    /// Server-assigned creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
}

impl Alert {
    pub fn owner_id(&self) -> Option<UserId> {
        self.user_id.or_else(|| self.user.map(|u| u.id))
    }

    /// Criteria carried by this alert, without the server-assigned id and timestamp.
    pub fn to_draft(&self) -> AlertDraft {
        AlertDraft {
            location: self.location.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            year_min: self.year_min,
            year_max: self.year_max,
            price_min: self.price_min,
            price_max: self.price_max,
            mileage_max: self.mileage_max,
            fuel_type: self.fuel_type.clone(),
            transmission: self.transmission.clone(),
            has_defects: self.has_defects,
            active: self.active,
            user: self.owner_id().map(|id| UserRef { id }),
        }
    }
}

/// Alert fields sent on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AlertDraft {
    pub location: String,
    pub brand: String,
    pub model: String,
    pub year_min: i32,
    pub year_max: i32,
    pub price_min: f64,
    pub price_max: f64,
    pub mileage_max: i64,
    pub fuel_type: String,
    pub transmission: String,
    pub has_defects: bool,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
}

impl AlertDraft {
    /// Same criteria, ignoring the owner reference.
    pub fn same_criteria(&self, other: &AlertDraft) -> bool {
        let mut a = self.clone();
        let mut b = other.clone();
        a.user = None;
        b.user = None;
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_owner_from_either_field() {
        let a: Alert = serde_json::from_str(r#"{"id": 1, "userId": 9}"#).unwrap();
        assert_eq!(a.owner_id(), Some(9));
        let b: Alert = serde_json::from_str(r#"{"id": 2, "user": {"id": 4}}"#).unwrap();
        assert_eq!(b.owner_id(), Some(4));
    }

    #[test]
    fn draft_round_trip_ignores_server_fields() {
        let json = r#"{
            "id": 11,
            "location": "Casablanca",
            "brand": "Toyota",
            "model": "Yaris",
            "year_min": 2015,
            "year_max": 2020,
            "price_min": 50000,
            "price_max": 120000,
            "mileage_max": 90000,
            "fuel_type": "hybrid",
            "transmission": "automatic",
            "has_defects": false,
            "active": true,
            "created_at": "2024-01-02T10:00:00",
            "userId": 3
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        let expected = AlertDraft {
            location: "Casablanca".into(),
            brand: "Toyota".into(),
            model: "Yaris".into(),
            year_min: 2015,
            year_max: 2020,
            price_min: 50000.0,
            price_max: 120000.0,
            mileage_max: 90000,
            fuel_type: "hybrid".into(),
            transmission: "automatic".into(),
            has_defects: false,
            active: true,
            user: None,
        };
        assert!(alert.to_draft().same_criteria(&expected));
        assert_eq!(alert.to_draft().user, Some(UserRef { id: 3 }));
    }
}
