use super::alert::AlertId;
use super::listing::ListingId;
use super::null_as_default;
use serde::{Deserialize, Serialize};

pub type NotificationId = i64;

/// A message produced by the backend when an alert matched a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "alertId", default, skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<AlertId>,
    #[serde(rename = "annonceId", default, skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<ListingId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_back_references_are_optional() {
        let n: Notification = serde_json::from_str(
            r#"{"id": 1, "message": "New Yaris in Rabat", "date": "2024-05-01T08:00:00", "annonceId": 12}"#,
        )
        .unwrap();
        assert_eq!(n.listing_id, Some(12));
        assert_eq!(n.alert_id, None);
    }
}
