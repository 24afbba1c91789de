use super::null_as_default;
use serde::{Deserialize, Serialize};

/// Unique identifier for a user account.
pub type UserId = i64;

/// Signed-in user identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
}

impl User {
    /// Name shown in the navigation bar.
    pub fn display_name(&self) -> &str {
        if self.first_name.trim().is_empty() {
            "User"
        } else {
            &self.first_name
        }
    }
}

/// Owner reference as embedded in listings and alerts (`{"id": n}`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRef {
    pub id: UserId,
}

/// Body of `POST /user/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

/// Body of `POST /user/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Per-user counters from `GET /stats/all/{userId}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserStats {
    #[serde(rename = "nbrAnnonce", default)]
    pub listings: u64,
    #[serde(rename = "nbrAlert", default)]
    pub alerts: u64,
    #[serde(rename = "nbrNotification", default)]
    pub notifications: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_response_without_user() {
        let resp: SignInResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(resp.token, "abc");
        assert!(resp.user.is_none());
    }

    #[test]
    fn display_name_falls_back() {
        let mut user = User {
            id: 1,
            first_name: String::new(),
            last_name: "Alaoui".into(),
            email: "a@b.c".into(),
            phone_number: String::new(),
        };
        assert_eq!(user.display_name(), "User");
        user.first_name = "Sara".into();
        assert_eq!(user.display_name(), "Sara");
    }

    #[test]
    fn stats_use_backend_names() {
        let stats: UserStats =
            serde_json::from_str(r#"{"nbrAnnonce": 3, "nbrAlert": 2, "nbrNotification": 9}"#)
                .unwrap();
        assert_eq!(stats.listings, 3);
        assert_eq!(stats.alerts, 2);
        assert_eq!(stats.notifications, 9);
    }
}
