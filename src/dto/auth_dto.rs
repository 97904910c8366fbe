use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::User;
use crate::utils::validation::validate_password;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub whatsapp_consent: bool,
}

/// Intentionally lenient: missing fields become empty strings so the
/// handler can answer 400 instead of a serde rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Register/login response: profile fields plus a bearer token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub is_admin: bool,
    pub whatsapp_consent: bool,
    pub token: String,
}

impl AuthUserResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            is_admin: user.is_admin,
            whatsapp_consent: user.whatsapp_consent,
            token,
        }
    }
}

/// `/api/auth/me` response: same profile fields, no token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub is_admin: bool,
    pub whatsapp_consent: bool,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            is_admin: user.is_admin,
            whatsapp_consent: user.whatsapp_consent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "rider@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            phone: "+351111222333".to_string(),
            whatsapp_consent: true,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn auth_response_uses_camel_case_and_no_hash() {
        let response = AuthUserResponse::new(sample_user(), "tok".to_string());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"firstName\":\"Ana\""));
        assert!(json.contains("\"whatsappConsent\":true"));
        assert!(json.contains("\"isAdmin\":false"));
        assert!(json.contains("\"token\":\"tok\""));
        assert!(!json.contains("password"));
    }

    #[test]
    fn profile_response_has_no_token_field() {
        let response = UserProfileResponse::from(sample_user());
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("token").is_none());
        assert_eq!(json["email"], "rider@example.com");
    }

    #[test]
    fn register_payload_accepts_camel_case_input() {
        let payload: RegisterPayload = serde_json::from_value(serde_json::json!({
            "email": "rider@example.com",
            "password": "correct-horse",
            "firstName": "Ana",
            "lastName": "Silva",
            "phone": "+351111222333",
            "whatsappConsent": true
        }))
        .unwrap();
        assert_eq!(payload.first_name, "Ana");
        assert!(payload.whatsapp_consent);
    }

    #[test]
    fn register_payload_defaults_optional_fields() {
        let payload: RegisterPayload = serde_json::from_value(serde_json::json!({
            "email": "rider@example.com",
            "password": "correct-horse",
            "firstName": "Ana",
            "lastName": "Silva"
        }))
        .unwrap();
        assert_eq!(payload.phone, "");
        assert!(!payload.whatsapp_consent);
    }
}
