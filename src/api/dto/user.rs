//! DTOs for user endpoints, plus their entity conversions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUser, User};

/// Payload for `POST /users` and `PUT /users/{id}`.
///
/// Mirrors the upstream contract: unknown fields are ignored, missing fields
/// decode as empty/absent instead of rejecting the request, and no field
/// format is validated. The same shape drives both creation and full-replace
/// update.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub phone: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            email: request.email,
            password: request.password,
            username: request.username,
            phone: request.phone,
        }
    }
}

/// Outbound projection of a user.
///
/// Deliberately drops id and password; no response shape ever carries the
/// password. `createdAt` is camelCase on the wire per the upstream contract.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub email: String,
    pub username: String,
    pub phone: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            email: user.email,
            username: user.username,
            phone: user.phone,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_request_missing_fields_decode_as_empty() {
        let request: CreateUserRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();

        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.password, "");
        assert_eq!(request.username, "");
        assert_eq!(request.phone, None);
    }

    #[test]
    fn test_request_unknown_fields_ignored() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"email":"a@x.com","role":"admin"}"#).unwrap();

        assert_eq!(request.email, "a@x.com");
    }

    #[test]
    fn test_view_never_exposes_password() {
        let now = Utc::now();
        let user = User::new(
            1,
            "a@x.com".to_string(),
            "secret".to_string(),
            "alice".to_string(),
            None,
            now,
            now,
        );

        let value = serde_json::to_value(UserView::from(user)).unwrap();

        assert_eq!(value["email"], "a@x.com");
        assert!(value.get("password").is_none());
        assert!(value.get("id").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
