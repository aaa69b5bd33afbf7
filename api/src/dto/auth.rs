use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use order_core::services::LoginCredentials;

/// Body of `POST /api/v1/login`
///
/// Either `username` or `email` identifies the account; both may be sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 255, message = "The username may not be greater than 255 characters."))]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

/// Clients send every login field; an empty one means "not used"
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

impl From<LoginRequest> for LoginCredentials {
    fn from(request: LoginRequest) -> Self {
        Self {
            user_name: request.username,
            email: request.email,
            password: request.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_password_fails_validation() {
        let request: LoginRequest = serde_json::from_str(r#"{"username":"karim"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_blank_identifiers_are_absent() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username":"karim","email":"","password":"secret"}"#).unwrap();
        assert_eq!(request.email, None);
        assert!(request.validate().is_ok());

        let request: LoginRequest =
            serde_json::from_str(r#"{"username":"  ","email":null,"password":"secret"}"#).unwrap();
        assert_eq!(request.username, None);
        assert_eq!(request.email, None);
    }

    #[test]
    fn test_malformed_email_fails_validation() {
        let request = LoginRequest {
            email: Some("not-an-email".to_string()),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_credentials() {
        let credentials: LoginCredentials = LoginRequest {
            username: Some("karim".to_string()),
            email: None,
            password: "secret".to_string(),
        }
        .into();

        assert_eq!(credentials.user_name.as_deref(), Some("karim"));
        assert_eq!(credentials.password, "secret");
    }
}
