//! Hosted backend client
//!
//! Thin wrapper over the REST surface of the backend-as-a-service:
//! table reads/writes under `/rest/v1` and password auth under `/auth/v1`.

use anyhow::{Context, Result, anyhow, bail};
use reqwest::{Client, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

use super::model::{ApiError, Credentials, TokenResponse};
use crate::features::session::Session;

const TIMEOUT: u64 = 30;

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .field("anon_key", &"<redacted>")
            .field("signed_in", &self.access_token.is_some())
            .finish()
    }
}

impl BackendClient {
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.trim().to_string(),
            access_token: None,
        })
    }

    /// Act on behalf of `session`, or anonymously for `None`
    pub fn with_session(mut self, session: Option<&Session>) -> Self {
        self.access_token = session.map(|s| s.access_token.clone());
        self
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn bearer(&self) -> String {
        format!(
            "Bearer {}",
            self.access_token.as_deref().unwrap_or(&self.anon_key)
        )
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header(header::AUTHORIZATION, self.bearer())
    }

    /// Read rows from `table`; `query` holds PostgREST filters such as `("category", "eq.cars")`
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let resp = self
            .request(reqwest::Method::GET, &self.rest_url(table))
            .query(&[("select", "*")])
            .query(query)
            .send()
            .await
            .with_context(|| format!("Request to table '{}' failed", table))?;

        let rows = check(resp)
            .await?
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("Unexpected rows from table '{}'", table))?;
        tracing::debug!("Selected {} rows from {}", rows.len(), table);
        Ok(rows)
    }

    /// Insert `row` into `table` and return the stored representation
    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<Vec<R>> {
        let resp = self
            .request(reqwest::Method::POST, &self.rest_url(table))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .with_context(|| format!("Insert into '{}' failed", table))?;

        check(resp)
            .await?
            .json::<Vec<R>>()
            .await
            .with_context(|| format!("Unexpected insert response from '{}'", table))
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let resp = self
            .request(reqwest::Method::POST, &self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&Credentials { email, password })
            .send()
            .await
            .context("Sign-in request failed")?;

        let token: TokenResponse = check(resp).await?.json().await?;
        session_from(token, email)?.ok_or_else(|| anyhow!("Sign-in returned no session"))
    }

    /// `Ok(None)` means the account exists but awaits email confirmation
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Option<Session>> {
        let resp = self
            .request(reqwest::Method::POST, &self.auth_url("signup"))
            .json(&Credentials { email, password })
            .send()
            .await
            .context("Sign-up request failed")?;

        let token: TokenResponse = check(resp).await?.json().await?;
        session_from(token, email)
    }

    pub async fn sign_out(&self, session: &Session) -> Result<()> {
        let resp = self
            .client
            .post(self.auth_url("logout"))
            .header("apikey", &self.anon_key)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", session.access_token),
            )
            .send()
            .await
            .context("Sign-out request failed")?;
        check(resp).await?;
        Ok(())
    }
}

/// Turn a token response into a session, if one was issued
///
/// Some sign-up responses carry the user fields at the top level instead of
/// under `user`.
pub fn session_from(token: TokenResponse, email: &str) -> Result<Option<Session>> {
    let Some(access_token) = token.access_token else {
        if let Some(id) = &token.id {
            tracing::info!("Account {} awaits email confirmation", id);
        }
        return Ok(None);
    };
    let (user_id, user_email) = match token.user {
        Some(user) => (user.id, user.email),
        None => (
            token
                .id
                .ok_or_else(|| anyhow!("Token response is missing the user"))?,
            None,
        ),
    };
    Ok(Some(Session {
        user_id,
        email: user_email.unwrap_or_else(|| email.to_string()),
        access_token,
    }))
}

/// Pass successful responses through, turn the rest into readable errors
pub(super) async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .ok()
        .and_then(|e| e.text().map(str::to_string))
        .unwrap_or(body);
    bail!("{} ({})", message.trim(), status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::AuthUser;

    #[test]
    fn urls_ignore_trailing_slash() {
        let client = BackendClient::new(" https://demo.supabase.co/ ", "anon").unwrap();
        assert_eq!(
            client.rest_url("offers"),
            "https://demo.supabase.co/rest/v1/offers"
        );
        assert_eq!(
            client.auth_url("token"),
            "https://demo.supabase.co/auth/v1/token"
        );
    }

    #[test]
    fn bearer_uses_session_token_when_present() {
        let client = BackendClient::new("https://demo.supabase.co", "anon").unwrap();
        assert_eq!(client.bearer(), "Bearer anon");

        let session = Session {
            user_id: "u".to_string(),
            email: "a@b.co".to_string(),
            access_token: "jwt".to_string(),
        };
        let client = client.with_session(Some(&session));
        assert_eq!(client.bearer(), "Bearer jwt");
        assert!(!format!("{:?}", client).contains("anon\""));
    }

    #[test]
    fn session_from_token_falls_back_to_typed_email() {
        let token = TokenResponse {
            access_token: Some("jwt".to_string()),
            user: Some(AuthUser {
                id: "u-1".to_string(),
                email: None,
            }),
            id: None,
        };
        let session = session_from(token, "ana@example.com").unwrap().unwrap();
        assert_eq!(session.email, "ana@example.com");
        assert_eq!(session.user_id, "u-1");
    }

    #[test]
    fn session_from_token_without_access_token_is_pending() {
        let token = TokenResponse {
            access_token: None,
            user: None,
            id: Some("u-2".to_string()),
        };
        assert_eq!(session_from(token, "x@y.z").unwrap(), None);
    }

    #[test]
    fn session_from_token_without_user_is_error() {
        let token = TokenResponse {
            access_token: Some("jwt".to_string()),
            user: None,
            id: None,
        };
        assert!(session_from(token, "x@y.z").is_err());
    }

    #[test]
    fn session_from_token_uses_top_level_user_id() {
        let token = TokenResponse {
            access_token: Some("jwt".to_string()),
            user: None,
            id: Some("u-3".to_string()),
        };
        let session = session_from(token, "bo@example.com").unwrap().unwrap();
        assert_eq!(session.user_id, "u-3");
        assert_eq!(session.email, "bo@example.com");
    }
}
