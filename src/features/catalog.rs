//! Offer catalog: categories, filtering and sorting
//!
//! Offers come from the hosted `offers` table, or from the bundled sample
//! catalog when no backend is configured.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Key;

/// Remote table holding offers
pub const OFFERS_TABLE: &str = "offers";

/// Price slider granularity
pub const DEFAULT_PRICE_STEP: f32 = 5_000.0;

/// Price slider upper bound when no offers are loaded
pub const DEFAULT_PRICE_CEILING: f32 = 200_000.0;

const SAMPLE_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Flights,
    Packages,
    Cars,
    Lodging,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Flights,
            Category::Packages,
            Category::Cars,
            Category::Lodging,
        ]
    }

    /// Translation key for the category name
    pub fn label_key(&self) -> Key {
        match self {
            Category::Flights => Key::NavFlights,
            Category::Packages => Key::NavPackages,
            Category::Cars => Key::NavCars,
            Category::Lodging => Key::NavLodging,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Flights => "✈",
            Category::Packages => "🧳",
            Category::Cars => "🚗",
            Category::Lodging => "🏨",
        }
    }
}

fn default_currency() -> String {
    "ARS".to_string()
}

/// A bookable offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub category: Category,
    pub title: String,
    pub destination: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub rating: Option<f32>,
    /// Free-form length of the offer ("7 nights", "2h 05m")
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[
            SortOrder::Featured,
            SortOrder::PriceLowToHigh,
            SortOrder::PriceHighToLow,
            SortOrder::Rating,
        ]
    }

    pub fn label_key(&self) -> Key {
        match self {
            SortOrder::Featured => Key::SortFeatured,
            SortOrder::PriceLowToHigh => Key::SortPriceLowHigh,
            SortOrder::PriceHighToLow => Key::SortPriceHighLow,
            SortOrder::Rating => Key::SortRating,
        }
    }
}

/// Filters applied to a category page
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub category: Option<Category>,
    pub search: String,
    /// Inclusive price bounds
    pub price: (f32, f32),
    pub sort: SortOrder,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: String::new(),
            price: (0.0, DEFAULT_PRICE_CEILING),
            sort: SortOrder::default(),
        }
    }
}

impl CatalogQuery {
    pub fn matches(&self, offer: &Offer) -> bool {
        if self.category.is_some_and(|c| c != offer.category) {
            return false;
        }

        let (low, high) = self.price;
        if offer.price < f64::from(low) || offer.price > f64::from(high) {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || offer.title.to_lowercase().contains(&needle)
            || offer.destination.to_lowercase().contains(&needle)
    }

    /// Filter then sort
    pub fn apply<'a>(&self, offers: &'a [Offer]) -> Vec<&'a Offer> {
        let mut found: Vec<&Offer> = offers.iter().filter(|o| self.matches(o)).collect();

        match self.sort {
            // Stable sort keeps catalog order within each group
            SortOrder::Featured => found.sort_by_key(|o| !o.featured),
            SortOrder::PriceLowToHigh => found.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceHighToLow => found.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOrder::Rating => found.sort_by(|a, b| {
                let a = a.rating.unwrap_or(0.0);
                let b = b.rating.unwrap_or(0.0);
                b.total_cmp(&a)
            }),
        }
        found
    }
}

/// Loaded offers
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    offers: Vec<Offer>,
}

impl Catalog {
    pub fn from_offers(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    /// Bundled catalog used when no backend is configured
    pub fn sample() -> Result<Self> {
        let offers: Vec<Offer> =
            serde_json::from_str(SAMPLE_CATALOG).context("Failed to parse sample catalog")?;
        Ok(Self { offers })
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(|o| o.featured)
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.offers.iter().filter(|o| o.category == category).count()
    }

    /// Upper bound for the price slider: the highest price in `category`
    /// (or overall) rounded up to a whole `step`
    pub fn price_ceiling(&self, category: Option<Category>, step: f32) -> f32 {
        let highest = self
            .offers
            .iter()
            .filter(|o| category.is_none_or(|c| c == o.category))
            .map(|o| o.price)
            .fold(0.0_f64, f64::max);

        if highest <= 0.0 || step <= 0.0 {
            return DEFAULT_PRICE_CEILING;
        }
        let step = f64::from(step);
        ((highest / step).ceil() * step) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: i64, category: Category, title: &str, price: f64) -> Offer {
        Offer {
            id,
            category,
            title: title.to_string(),
            destination: format!("{} town", title),
            description: String::new(),
            price,
            currency: "ARS".to_string(),
            rating: None,
            duration: None,
            featured: false,
        }
    }

    fn catalog() -> Vec<Offer> {
        let mut offers = vec![
            offer(1, Category::Flights, "Madrid", 150_000.0),
            offer(2, Category::Flights, "Bariloche", 48_000.0),
            offer(3, Category::Packages, "Patagonia", 189_000.0),
            offer(4, Category::Lodging, "Cabin", 21_000.0),
        ];
        offers[1].featured = true;
        offers[0].rating = Some(4.1);
        offers[1].rating = Some(3.5);
        offers[2].rating = Some(4.9);
        offers
    }

    #[test]
    fn sample_catalog_parses_and_covers_every_category() {
        let catalog = Catalog::sample().unwrap();
        assert!(!catalog.is_empty());
        for category in Category::all() {
            assert!(catalog.count_in(*category) > 0, "{:?}", category);
        }
    }

    #[test]
    fn category_filter() {
        let offers = catalog();
        let query = CatalogQuery {
            category: Some(Category::Flights),
            ..Default::default()
        };
        let ids: Vec<i64> = query.apply(&offers).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn price_range_is_inclusive() {
        let offers = catalog();
        let query = CatalogQuery {
            price: (21_000.0, 150_000.0),
            sort: SortOrder::PriceLowToHigh,
            ..Default::default()
        };
        let ids: Vec<i64> = query.apply(&offers).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![4, 2, 1]);
    }

    #[test]
    fn search_matches_title_or_destination_ignoring_case() {
        let offers = catalog();
        let query = CatalogQuery {
            search: "  PATAG ".to_string(),
            ..Default::default()
        };
        assert_eq!(query.apply(&offers).len(), 1);

        let query = CatalogQuery {
            search: "cabin town".to_string(),
            ..Default::default()
        };
        assert_eq!(query.apply(&offers)[0].id, 4);
    }

    #[test]
    fn sort_orders() {
        let offers = catalog();
        let ids = |sort| -> Vec<i64> {
            let query = CatalogQuery {
                sort,
                ..Default::default()
            };
            query.apply(&offers).iter().map(|o| o.id).collect()
        };
        assert_eq!(ids(SortOrder::Featured), vec![2, 1, 3, 4]);
        assert_eq!(ids(SortOrder::PriceHighToLow), vec![3, 1, 2, 4]);
        assert_eq!(ids(SortOrder::Rating), vec![3, 1, 2, 4]);
    }

    #[test]
    fn price_ceiling_rounds_up_to_step() {
        let catalog = Catalog::from_offers(catalog());
        assert_eq!(catalog.price_ceiling(None, 5_000.0), 190_000.0);
        assert_eq!(
            catalog.price_ceiling(Some(Category::Flights), 5_000.0),
            150_000.0
        );
        assert_eq!(
            catalog.price_ceiling(Some(Category::Cars), 5_000.0),
            DEFAULT_PRICE_CEILING
        );
        assert_eq!(Catalog::default().price_ceiling(None, 5_000.0), 200_000.0);
    }

    #[test]
    fn offer_defaults_when_fields_missing() {
        let offer: Offer = serde_json::from_str(
            r#"{"id": 9, "category": "cars", "title": "Sedan", "destination": "Salta", "price": 1000}"#,
        )
        .unwrap();
        assert_eq!(offer.currency, "ARS");
        assert!(offer.rating.is_none());
        assert!(!offer.featured);
    }
}
