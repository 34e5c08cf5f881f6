//! Authentication models

use serde::{Deserialize, Serialize};

/// Account returned by `/auth/me` and embedded in the login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// `admin` or `user`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of a successful `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_with_user() {
        let json = r#"{
            "access_token": "abc.def.ghi",
            "user": {"id": 1, "username": "admin", "email": null, "role": "admin", "created_at": "2026-01-05T10:00:00"}
        }"#;

        let resp: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.access_token, "abc.def.ghi");
        let user = resp.user.unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role.as_deref(), Some("admin"));
        assert!(user.email.is_none());
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user: User =
            serde_json::from_str(r#"{"id": 2, "username": "kassir", "theme": "dark"}"#).unwrap();
        assert_eq!(user.id, 2);
        assert!(user.role.is_none());
    }
}
