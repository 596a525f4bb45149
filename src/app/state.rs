// src/app/state.rs
//! Application state definitions

use std::collections::HashMap;

use crate::api::{BackendClient, PaymentClient};
use crate::app::message::CatalogSource;
use crate::features::{AuthForm, Cart, Catalog, CatalogQuery, Category, Session, Settings};
use crate::i18n::Locale;
use crate::ui::components::Page;
use crate::ui::components::price_filter::price_interval;
use crate::ui::widgets::{Toast, ToastStyle};

/// Initial window size
pub const WINDOW_SIZE: iced::Size = iced::Size::new(1280.0, 840.0);

/// Main application state
pub struct App {
    /// Settings, locale, session and service clients
    pub core: CoreState,
    /// Business data (catalog, cart, filters)
    pub store: StoreState,
    /// UI state (navigation, popup, toast)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    pub session: Option<Session>,
    /// `None` until backend credentials are configured
    pub backend: Option<BackendClient>,
    /// `None` until a payment access token is configured
    pub payment: Option<PaymentClient>,
    pub window_size: iced::Size,
}

impl CoreState {
    /// Initialize service clients from loaded settings
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let backend = if settings.backend.is_configured() {
            BackendClient::new(&settings.backend.url, &settings.backend.anon_key)
                .inspect_err(|e| tracing::error!("Failed to create backend client: {:#}", e))
                .ok()
        } else {
            tracing::info!("Backend not configured, using bundled catalog");
            None
        };

        let payment = if settings.payment.is_configured() {
            PaymentClient::new(&settings.payment.endpoint, &settings.payment.access_token)
                .inspect_err(|e| tracing::error!("Failed to create payment client: {:#}", e))
                .ok()
        } else {
            None
        };

        Self {
            settings,
            locale,
            session: None,
            backend,
            payment,
            window_size: WINDOW_SIZE,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Backend client acting for the signed-in user, or anonymously
    pub fn backend_for_session(&self) -> Option<BackendClient> {
        self.backend
            .clone()
            .map(|client| client.with_session(self.session.as_ref()))
    }
}

/// Catalog, cart and per-category filters
#[derive(Default)]
pub struct StoreState {
    pub catalog: Catalog,
    pub source: CatalogSource,
    pub cart: Cart,
    /// Filters survive switching between category pages
    queries: HashMap<Category, CatalogQuery>,
}

impl StoreState {
    /// Filters for `category`, defaulting to the full price range
    pub fn query(&self, category: Category) -> CatalogQuery {
        self.queries
            .get(&category)
            .cloned()
            .unwrap_or_else(|| self.default_query(category))
    }

    pub fn query_mut(&mut self, category: Category) -> &mut CatalogQuery {
        let default = self.default_query(category);
        self.queries.entry(category).or_insert(default)
    }

    pub fn reset_query(&mut self, category: Category) {
        self.queries.remove(&category);
    }

    /// Replace the catalog; price bounds depend on it, so filters reset
    pub fn set_catalog(&mut self, catalog: Catalog, source: CatalogSource) {
        self.catalog = catalog;
        self.source = source;
        self.queries.clear();
    }

    fn default_query(&self, category: Category) -> CatalogQuery {
        let interval = price_interval(&self.catalog, Some(category));
        CatalogQuery {
            category: Some(category),
            price: (interval.min(), interval.max()),
            ..CatalogQuery::default()
        }
    }
}

/// Navigation history entry list with a cursor, like a browser
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    entries: Vec<Page>,
    current_index: Option<usize>,
}

impl NavigationHistory {
    /// Push a new entry to history, clearing forward history
    pub fn push(&mut self, page: Page) {
        if let Some(idx) = self.current_index {
            if self.entries.get(idx) == Some(&page) {
                return;
            }
            self.entries.truncate(idx + 1);
        }
        self.entries.push(page);
        self.current_index = Some(self.entries.len() - 1);
    }

    pub fn go_back(&mut self) -> Option<Page> {
        let idx = self.current_index.filter(|idx| *idx > 0)?;
        self.current_index = Some(idx - 1);
        self.entries.get(idx - 1).copied()
    }

    pub fn go_forward(&mut self) -> Option<Page> {
        let idx = self
            .current_index
            .filter(|idx| idx + 1 < self.entries.len())?;
        self.current_index = Some(idx + 1);
        self.entries.get(idx + 1).copied()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index.is_some_and(|idx| idx > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index
            .is_some_and(|idx| idx + 1 < self.entries.len())
    }
}

/// UI View State
pub struct UiState {
    pub page: Page,
    pub history: NavigationHistory,
    pub auth: AuthForm,
    pub toast: Option<Toast>,
    next_toast_id: u64,
    pub checkout_pending: bool,
    /// Redirect URL of the last completed checkout
    pub checkout_url: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        let mut history = NavigationHistory::default();
        history.push(Page::Home);
        Self {
            page: Page::Home,
            history,
            auth: AuthForm::default(),
            toast: None,
            next_toast_id: 0,
            checkout_pending: false,
            checkout_url: None,
        }
    }

    /// Replace the current toast; returns the id to hide it by
    pub fn show_toast(&mut self, message: impl Into<String>, style: ToastStyle) -> u64 {
        self.next_toast_id += 1;
        self.toast = Some(Toast::new(self.next_toast_id, message, style));
        self.next_toast_id
    }

    /// Hide the toast only if `id` is still the one on screen
    pub fn hide_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod navigation_history {
        use super::*;

        #[test]
        fn back_and_forward() {
            let mut history = NavigationHistory::default();
            history.push(Page::Home);
            history.push(Page::Catalog(Category::Cars));
            history.push(Page::Cart);

            assert!(history.can_go_back());
            assert!(!history.can_go_forward());
            assert_eq!(history.go_back(), Some(Page::Catalog(Category::Cars)));
            assert_eq!(history.go_back(), Some(Page::Home));
            assert_eq!(history.go_back(), None);
            assert_eq!(history.go_forward(), Some(Page::Catalog(Category::Cars)));
        }

        #[test]
        fn push_clears_forward_entries() {
            let mut history = NavigationHistory::default();
            history.push(Page::Home);
            history.push(Page::Cart);
            history.go_back();
            history.push(Page::Settings);

            assert!(!history.can_go_forward());
            assert_eq!(history.go_back(), Some(Page::Home));
        }

        #[test]
        fn repeated_page_is_not_duplicated() {
            let mut history = NavigationHistory::default();
            history.push(Page::Home);
            history.push(Page::Home);
            assert!(!history.can_go_back());
        }
    }

    mod store {
        use super::*;

        #[test]
        fn default_query_spans_category_prices() {
            let mut store = StoreState::default();
            store.set_catalog(Catalog::sample().unwrap(), CatalogSource::Sample);

            let query = store.query(Category::Flights);
            assert_eq!(query.category, Some(Category::Flights));
            assert_eq!(query.price.0, 0.0);
            assert!(store
                .catalog
                .offers()
                .iter()
                .filter(|o| o.category == Category::Flights)
                .all(|o| o.price <= f64::from(query.price.1)));
        }

        #[test]
        fn queries_are_kept_per_category() {
            let mut store = StoreState::default();
            store.query_mut(Category::Cars).search = "cordoba".to_string();

            assert_eq!(store.query(Category::Cars).search, "cordoba");
            assert_eq!(store.query(Category::Lodging).search, "");

            store.reset_query(Category::Cars);
            assert_eq!(store.query(Category::Cars).search, "");
        }

        #[test]
        fn new_catalog_resets_filters() {
            let mut store = StoreState::default();
            store.query_mut(Category::Cars).search = "x".to_string();
            store.set_catalog(Catalog::default(), CatalogSource::Backend);
            assert_eq!(store.query(Category::Cars).search, "");
            assert_eq!(store.source, CatalogSource::Backend);
        }
    }

    mod toast {
        use super::*;

        #[test]
        fn stale_hide_keeps_newer_toast() {
            let mut ui = UiState::new();
            let first = ui.show_toast("one", ToastStyle::Success);
            let second = ui.show_toast("two", ToastStyle::Error);

            ui.hide_toast(first);
            assert_eq!(ui.toast.as_ref().map(|t| t.message.as_str()), Some("two"));

            ui.hide_toast(second);
            assert!(ui.toast.is_none());
        }
    }

    #[test]
    fn unconfigured_services_have_no_clients() {
        let core = CoreState::new(Settings::default(), Locale::default());
        assert!(core.backend.is_none());
        assert!(core.payment.is_none());
        assert!(!core.is_logged_in());
        assert!(core.backend_for_session().is_none());
    }
}
