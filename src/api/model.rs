//! Wire types for the hosted backend and the payment service

use serde::{Deserialize, Serialize};

/// User object returned by the auth endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// `/auth/v1/token` and `/auth/v1/signup` response
///
/// Sign-up answers with only a user when email confirmation is pending.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
    /// Bare user fields when no session was issued
    #[serde(default)]
    pub id: Option<String>,
}

/// Error body shapes used by the hosted services
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    /// Most specific human-readable message present
    pub fn text(&self) -> Option<&str> {
        self.error_description
            .as_deref()
            .or(self.msg.as_deref())
            .or(self.message.as_deref())
            .or(self.error.as_deref())
    }
}

/// Credentials for the password grant and sign-up
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// One payable line of a payment preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceItem {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub title: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub currency_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payer {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// `POST /checkout/preferences` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceRequest {
    pub items: Vec<PreferenceItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_urls: Option<BackUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_return: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

/// Created preference
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preference {
    pub id: String,
    /// Redirect URL where the payer completes the order
    pub init_point: String,
    #[serde(default)]
    pub sandbox_init_point: Option<String>,
}

/// Remote table receiving one row per checkout
pub const ORDERS_TABLE: &str = "orders";

/// Row written to the `orders` table after checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub user_id: String,
    pub items: Vec<PreferenceItem>,
    pub total: f64,
    pub currency: String,
    pub preference_id: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_with_session() {
        let body = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": {"id": "u-1", "email": "ana@example.com", "role": "authenticated"}
        }"#;
        let resp: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.access_token.as_deref(), Some("jwt"));
        assert_eq!(resp.user.unwrap().email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn signup_without_session_is_bare_user() {
        let body = r#"{"id": "u-2", "email": "new@example.com", "confirmation_sent_at": "x"}"#;
        let resp: TokenResponse = serde_json::from_str(body).unwrap();
        assert!(resp.access_token.is_none());
        assert_eq!(resp.id.as_deref(), Some("u-2"));
    }

    #[test]
    fn api_error_prefers_description() {
        let err: ApiError = serde_json::from_str(
            r#"{"error": "invalid_grant", "error_description": "Invalid login credentials"}"#,
        )
        .unwrap();
        assert_eq!(err.text(), Some("Invalid login credentials"));

        let err: ApiError = serde_json::from_str(r#"{"message": "relation does not exist"}"#).unwrap();
        assert_eq!(err.text(), Some("relation does not exist"));
        assert_eq!(ApiError::default().text(), None);
    }

    #[test]
    fn preference_request_skips_empty_fields() {
        let request = PreferenceRequest {
            items: vec![PreferenceItem {
                id: None,
                title: "Patagonia Explorer".to_string(),
                quantity: 1,
                unit_price: 189_000.0,
                currency_id: "ARS".to_string(),
            }],
            payer: None,
            back_urls: None,
            auto_return: None,
            external_reference: Some("order-1".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{
                    "title": "Patagonia Explorer",
                    "quantity": 1,
                    "unit_price": 189000.0,
                    "currency_id": "ARS"
                }],
                "external_reference": "order-1"
            })
        );
    }

    #[test]
    fn preference_response_parses() {
        let pref: Preference = serde_json::from_str(
            r#"{"id": "123-abc", "init_point": "https://pay.example/checkout?pref_id=123-abc", "collector_id": 5}"#,
        )
        .unwrap();
        assert_eq!(pref.id, "123-abc");
        assert!(pref.init_point.ends_with("123-abc"));
        assert!(pref.sandbox_init_point.is_none());
    }
}
