//! Shopping cart
//!
//! In-memory list of booked offers, unique by offer id.

use serde::{Deserialize, Serialize};

use super::catalog::{Category, Offer};
use crate::api::PreferenceItem;

/// Upper bound on quantity for a single line
pub const MAX_QUANTITY: u32 = 20;

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub offer_id: i64,
    pub title: String,
    pub category: Category,
    pub unit_price: f64,
    pub currency: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, offer_id: i64) -> bool {
        self.items.iter().any(|i| i.offer_id == offer_id)
    }

    /// Add one unit of `offer`, starting a new line if needed
    pub fn add(&mut self, offer: &Offer) {
        if let Some(item) = self.items.iter_mut().find(|i| i.offer_id == offer.id) {
            item.quantity = (item.quantity + 1).min(MAX_QUANTITY);
            return;
        }
        self.items.push(CartItem {
            offer_id: offer.id,
            title: offer.title.clone(),
            category: offer.category,
            unit_price: offer.price,
            currency: offer.currency.clone(),
            quantity: 1,
        });
    }

    /// Returns whether a line was removed
    pub fn remove(&mut self, offer_id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.offer_id != offer_id);
        self.items.len() != before
    }

    /// Set the quantity of a line; zero removes it.
    /// Returns whether the line exists.
    pub fn update_quantity(&mut self, offer_id: i64, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(offer_id);
        }
        match self.items.iter_mut().find(|i| i.offer_id == offer_id) {
            Some(item) => {
                item.quantity = quantity.min(MAX_QUANTITY);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Line items for the payment preference
    pub fn to_preference_items(&self) -> Vec<PreferenceItem> {
        self.items
            .iter()
            .map(|item| PreferenceItem {
                id: Some(item.offer_id.to_string()),
                title: item.title.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                currency_id: item.currency.clone(),
            })
            .collect()
    }
}
