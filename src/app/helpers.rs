//! Async helpers run as `Task`s; each returns a value ready to wrap in a Message

use anyhow::Context;

use crate::api::{
    self, BackendClient, ORDERS_TABLE, OrderRecord, PaymentClient, Preference, PreferenceItem,
};
use crate::app::message::CatalogSource;
use crate::features::catalog::OFFERS_TABLE;
use crate::features::settings::PaymentSettings;
use crate::features::{Catalog, Offer, Session};
use crate::utils::order_reference;

/// Fetch offers from the backend, or fall back to the bundled catalog
pub async fn load_catalog(
    backend: Option<BackendClient>,
) -> Result<(Catalog, CatalogSource), String> {
    match backend {
        Some(client) => {
            let offers: Vec<Offer> = client
                .select(OFFERS_TABLE, &[("order", "id.asc")])
                .await
                .map_err(|e| format!("{:#}", e))?;
            tracing::info!("Loaded {} offers from backend", offers.len());
            backend_or_sample(Catalog::from_offers(offers))
        }
        None => sample_catalog(),
    }
}

/// An empty offers table shows the bundled catalog instead
fn backend_or_sample(catalog: Catalog) -> Result<(Catalog, CatalogSource), String> {
    if catalog.is_empty() {
        tracing::warn!("Backend has no offers, using the bundled catalog");
        return sample_catalog();
    }
    Ok((catalog, CatalogSource::Backend))
}

/// Bundled catalog, used offline and when the backend fails
pub fn sample_catalog() -> Result<(Catalog, CatalogSource), String> {
    Catalog::sample()
        .map(|catalog| (catalog, CatalogSource::Sample))
        .map_err(|e| format!("{:#}", e))
}

pub async fn sign_in(
    backend: BackendClient,
    email: String,
    password: String,
) -> Result<Option<Session>, String> {
    backend
        .sign_in(&email, &password)
        .await
        .map(Some)
        .map_err(|e| format!("{:#}", e))
}

pub async fn sign_up(
    backend: BackendClient,
    email: String,
    password: String,
) -> Result<Option<Session>, String> {
    backend
        .sign_up(&email, &password)
        .await
        .map_err(|e| format!("{:#}", e))
}

pub async fn sign_out(backend: BackendClient, session: Session) {
    if let Err(e) = backend.sign_out(&session).await {
        // The local session is already gone; the token expires on its own
        tracing::warn!("Sign-out request failed: {:#}", e);
    }
}

/// Everything checkout needs, captured when the user presses the button
pub struct CheckoutOrder {
    pub items: Vec<PreferenceItem>,
    pub total: f64,
    pub session: Session,
    pub settings: PaymentSettings,
}

/// Create a payment preference, then record the order
///
/// A failed order insert is logged but does not fail the checkout: the payer
/// already has a valid payment link.
pub async fn checkout(
    payment: PaymentClient,
    backend: Option<BackendClient>,
    order: CheckoutOrder,
) -> Result<Preference, String> {
    run_checkout(payment, backend, order)
        .await
        .map_err(|e| format!("{:#}", e))
}

async fn run_checkout(
    payment: PaymentClient,
    backend: Option<BackendClient>,
    order: CheckoutOrder,
) -> anyhow::Result<Preference> {
    let now = chrono::Utc::now();
    let reference = order_reference(&order.session.user_id, now.timestamp_millis());
    let request = api::build_request(
        order.items.clone(),
        Some(&order.session.email),
        &order.settings,
        &reference,
    );

    let preference = payment
        .create_preference(&request)
        .await
        .context("Failed to create payment")?;

    if let Some(backend) = backend {
        let record = OrderRecord {
            user_id: order.session.user_id.clone(),
            items: order.items,
            total: order.total,
            currency: order.settings.currency.clone(),
            preference_id: preference.id.clone(),
            created_at: now.to_rfc3339(),
        };
        match backend
            .insert::<_, serde_json::Value>(ORDERS_TABLE, &record)
            .await
        {
            Ok(_) => tracing::info!("Recorded order {}", reference),
            Err(e) => tracing::warn!("Failed to record order {}: {:#}", reference, e),
        }
    }

    Ok(preference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_tagged() {
        let (catalog, source) = sample_catalog().unwrap();
        assert_eq!(source, CatalogSource::Sample);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn without_backend_catalog_comes_from_sample() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (_, source) = rt.block_on(load_catalog(None)).unwrap();
        assert_eq!(source, CatalogSource::Sample);
    }

    #[test]
    fn empty_backend_table_falls_back_to_sample() {
        let (catalog, source) = backend_or_sample(Catalog::from_offers(Vec::new())).unwrap();
        assert_eq!(source, CatalogSource::Sample);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn backend_offers_are_kept() {
        let (sample, _) = sample_catalog().unwrap();
        let offers = sample.offers()[..2].to_vec();
        let (catalog, source) = backend_or_sample(Catalog::from_offers(offers)).unwrap();
        assert_eq!(source, CatalogSource::Backend);
        assert_eq!(catalog.offers().len(), 2);
    }
}
