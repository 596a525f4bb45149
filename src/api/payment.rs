//! Payment preference client
//!
//! Creates a payable order from cart lines and hands back the URL where the
//! payer completes it.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

use super::backend::check;
use super::model::{BackUrls, Payer, Preference, PreferenceItem, PreferenceRequest};
use crate::features::settings::PaymentSettings;

const TIMEOUT: u64 = 30;

#[derive(Clone)]
pub struct PaymentClient {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl fmt::Debug for PaymentClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentClient")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl PaymentClient {
    pub fn new(endpoint: &str, access_token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            access_token: access_token.trim().to_string(),
        })
    }

    pub fn preferences_url(&self) -> String {
        format!("{}/checkout/preferences", self.endpoint)
    }

    pub async fn create_preference(&self, request: &PreferenceRequest) -> Result<Preference> {
        if request.items.is_empty() {
            bail!("Cannot create a payment for an empty order");
        }

        let resp = self
            .client
            .post(self.preferences_url())
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await
            .context("Payment preference request failed")?;

        let preference: Preference = check(resp)
            .await?
            .json()
            .await
            .context("Unexpected payment preference response")?;
        tracing::info!("Created payment preference {}", preference.id);
        Ok(preference)
    }
}

/// Assemble a preference body from cart lines and payment settings
pub fn build_request(
    items: Vec<PreferenceItem>,
    payer_email: Option<&str>,
    settings: &PaymentSettings,
    reference: &str,
) -> PreferenceRequest {
    let back_urls = (settings.success_url.is_some() || settings.failure_url.is_some()).then(|| {
        BackUrls {
            success: settings.success_url.clone(),
            failure: settings.failure_url.clone(),
        }
    });
    // Auto-return is only accepted together with a success URL
    let auto_return = settings
        .success_url
        .as_ref()
        .map(|_| "approved".to_string());

    PreferenceRequest {
        items,
        payer: payer_email.map(|email| Payer {
            email: email.to_string(),
        }),
        back_urls,
        auto_return,
        external_reference: Some(reference.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> PreferenceItem {
        PreferenceItem {
            id: Some("4".to_string()),
            title: "Patagonia Explorer".to_string(),
            quantity: 2,
            unit_price: 189_000.0,
            currency_id: "ARS".to_string(),
        }
    }

    #[test]
    fn preferences_url_is_under_endpoint() {
        let client = PaymentClient::new("https://api.mercadopago.com/", "token").unwrap();
        assert_eq!(
            client.preferences_url(),
            "https://api.mercadopago.com/checkout/preferences"
        );
        assert!(format!("{:?}", client).contains("<redacted>"));
    }

    #[test]
    fn request_without_back_urls() {
        let request = build_request(
            vec![item()],
            Some("ana@example.com"),
            &PaymentSettings::default(),
            "ref-1",
        );
        assert!(request.back_urls.is_none());
        assert!(request.auto_return.is_none());
        assert_eq!(request.payer.unwrap().email, "ana@example.com");
        assert_eq!(request.external_reference.as_deref(), Some("ref-1"));
    }

    #[test]
    fn success_url_enables_auto_return() {
        let settings = PaymentSettings {
            success_url: Some("https://voyago.example/ok".to_string()),
            ..PaymentSettings::default()
        };
        let request = build_request(vec![item()], None, &settings, "ref-2");
        assert_eq!(request.auto_return.as_deref(), Some("approved"));
        let urls = request.back_urls.unwrap();
        assert_eq!(urls.success.as_deref(), Some("https://voyago.example/ok"));
        assert!(urls.failure.is_none());
        assert!(request.payer.is_none());
    }

    #[test]
    fn empty_order_is_rejected_before_sending() {
        let client = PaymentClient::new("http://127.0.0.1:9", "token").unwrap();
        let request = build_request(Vec::new(), None, &PaymentSettings::default(), "ref");
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let err = rt.block_on(client.create_preference(&request)).unwrap_err();
        assert!(err.to_string().contains("empty order"));
    }
}
