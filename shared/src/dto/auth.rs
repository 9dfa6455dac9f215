use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authentication response (login success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Refresh token request (also the logout body; the backend only needs
/// the refresh token to invalidate the session)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token refresh response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Granted role, with the backend's wire names.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "ROLE_CLIENT")]
    Client,
    #[serde(rename = "ROLE_EMPLOYE")]
    Employee,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    /// Roles introduced server-side after this client shipped.
    #[serde(rename = "ROLE_UNKNOWN")]
    Unknown,
}

// Hand-written so an unrecognized role never fails login deserialization;
// an unknown role simply grants nothing.
impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "ROLE_CLIENT" => Role::Client,
            "ROLE_EMPLOYE" => Role::Employee,
            "ROLE_ADMIN" => Role::Admin,
            _ => Role::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"ROLE_EMPLOYE\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"ROLE_ADMIN\"").unwrap(),
            Role::Admin
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"ROLE_AUDITOR\"").unwrap(),
            Role::Unknown
        );
    }

    #[test]
    fn test_auth_response_camel_case() {
        let json = r#"{
            "id": 7,
            "username": "agent",
            "email": "agent@bank.test",
            "roles": ["ROLE_EMPLOYE"],
            "accessToken": "aaa",
            "tokenType": "Bearer",
            "refreshToken": "rrr"
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "aaa");
        assert_eq!(response.refresh_token.as_deref(), Some("rrr"));
        assert_eq!(response.roles, vec![Role::Employee]);
    }
}
