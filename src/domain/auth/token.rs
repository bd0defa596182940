//! Result shapes handed back to the transport layer

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Lifetime of an access token
pub const ACCESS_TOKEN_TTL: Duration = Duration::minutes(15);

/// Lifetime of a refresh token
pub const REFRESH_TOKEN_TTL: Duration = Duration::hours(24);

/// Access and refresh tokens issued together on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Acknowledgement returned by a successful signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupAck {
    pub success: bool,
}

impl SignupAck {
    pub fn created() -> Self {
        Self { success: true }
    }
}

/// New access token minted from an already authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedToken {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_shorter_than_refresh() {
        assert!(ACCESS_TOKEN_TTL < REFRESH_TOKEN_TTL);
        assert_eq!(ACCESS_TOKEN_TTL.num_seconds(), 900);
        assert_eq!(REFRESH_TOKEN_TTL.num_seconds(), 86_400);
    }

    #[test]
    fn test_token_pair_wire_names() {
        let pair = TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        };

        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["accessToken"], "a");
        assert_eq!(json["refreshToken"], "r");
    }

    #[test]
    fn test_signup_ack_wire_shape() {
        let json = serde_json::to_value(SignupAck::created()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn test_refreshed_token_wire_name() {
        let token = RefreshedToken {
            access_token: "a".to_string(),
        };

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json, serde_json::json!({ "accessToken": "a" }));
    }
}
