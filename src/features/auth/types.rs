//! Request and response types for the auth collaborator. These payloads carry
//! credentials and reset codes, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// The collaborator expects the original camelCase field names on the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub code: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Successful sign-in payload. Parsing this at the boundary is what makes the
/// access token non-optional downstream.
pub struct SignInResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_request_uses_camel_case_on_the_wire() {
        let request = ResetPasswordRequest {
            code: "483921".to_string(),
            new_password: "hunter42".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("\"newPassword\""));
        assert!(!json.contains("new_password"));
    }

    #[test]
    fn sign_in_response_requires_the_access_token() {
        let parsed: SignInResponse =
            serde_json::from_str(r#"{"access_token":"T"}"#).expect("Failed to deserialize");
        assert_eq!(parsed.access_token, "T");

        let missing = serde_json::from_str::<SignInResponse>("{}");
        assert!(missing.is_err());
    }

    #[test]
    fn credentials_serialize_with_plain_field_names() {
        let credentials = Credentials {
            email: "user@inbox.im".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_string(&credentials).expect("Failed to serialize");
        assert!(json.contains("\"email\":\"user@inbox.im\""));
        assert!(json.contains("\"password\":\"secret\""));
    }
}
