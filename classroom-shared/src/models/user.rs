use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the signed-in account, as returned by the auth endpoints.
///
/// The client treats it as opaque apart from display fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Login email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Whether the account may manage every course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub have_full_control: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Document revision counter kept by the backend.
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl User {
    /// Name shown in the header, falling back to a neutral label.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("User")
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    pub user: User,
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Successful `POST /auth/signup` response.
///
/// Registration does not sign the user in, so both fields are informational.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Successful `GET /auth/getCurrentAdmin` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentAdminResponse {
    pub admin: User,
}

/// Successful `POST /upload` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// Public URL of the stored file.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_backend_document() {
        let user: User = serde_json::from_value(json!({
            "_id": "64f1c2",
            "name": "Ada",
            "email": "ada@example.com",
            "haveFullControl": true,
            "createdAt": "2024-09-01T08:00:00.000Z",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(user.id.as_deref(), Some("64f1c2"));
        assert_eq!(user.have_full_control, Some(true));
        assert_eq!(user.version, Some(0));
        assert!(user.created_at.is_some());
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_user_serializes_backend_names() {
        let user = User {
            id: Some("u1".to_string()),
            have_full_control: Some(false),
            ..User::default()
        };
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["_id"], "u1");
        assert_eq!(value["haveFullControl"], false);
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_display_name_fallback() {
        let named = User {
            name: Some("Grace".to_string()),
            ..User::default()
        };
        let blank = User {
            name: Some("  ".to_string()),
            ..User::default()
        };

        assert_eq!(named.display_name(), "Grace");
        assert_eq!(blank.display_name(), "User");
        assert_eq!(User::default().display_name(), "User");
    }

    #[test]
    fn test_register_response_tolerates_missing_fields() {
        let response: RegisterResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response, RegisterResponse::default());
    }

    #[test]
    fn test_register_request_omits_empty_avatar() {
        let request = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            avatar: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("avatar").is_none());
    }
}
