//! Catalog loading and filter handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::{CatalogSource, Message};
use crate::app::state::App;
use crate::features::Category;
use crate::i18n::Key;
use crate::ui::widgets::ToastStyle;

/// Lower and upper bound from a two-thumb slider sequence
fn price_bounds(values: &[f32]) -> Option<(f32, f32)> {
    match values {
        [low, high] => Some((*low, *high)),
        _ => None,
    }
}

impl App {
    /// Category of the catalog page on screen
    fn current_category(&self) -> Option<Category> {
        self.ui.page.category()
    }

    pub fn handle_catalog(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CatalogLoaded(Ok((catalog, source))) => {
                tracing::info!("Catalog ready: {} offers ({:?})", catalog.offers().len(), source);
                self.store.set_catalog(catalog.clone(), *source);
                Some(Task::none())
            }

            Message::CatalogLoaded(Err(e)) => {
                tracing::error!("Failed to load catalog: {}", e);
                let text = format!("{}: {}", self.core.locale.get(Key::CatalogLoadFailed), e);
                let toast = self.notify(text, ToastStyle::Error);
                // Keep the storefront usable with the bundled offers
                if self.store.source != CatalogSource::Sample {
                    match helpers::sample_catalog() {
                        Ok((catalog, source)) => self.store.set_catalog(catalog, source),
                        Err(e) => tracing::error!("Sample catalog unavailable: {}", e),
                    }
                }
                Some(toast)
            }

            Message::SearchChanged(search) => {
                if let Some(category) = self.current_category() {
                    self.store.query_mut(category).search = search.clone();
                }
                Some(Task::none())
            }

            Message::SortChanged(sort) => {
                if let Some(category) = self.current_category() {
                    self.store.query_mut(category).sort = *sort;
                }
                Some(Task::none())
            }

            Message::PriceRangeChanged(values) => {
                let Some(category) = self.current_category() else {
                    return Some(Task::none());
                };
                match price_bounds(values) {
                    Some(price) => self.store.query_mut(category).price = price,
                    None => tracing::warn!("Ignoring price range of {} values", values.len()),
                }
                Some(Task::none())
            }

            Message::PriceRangeReleased => {
                if let Some(category) = self.current_category() {
                    let query = self.store.query(category);
                    tracing::debug!(
                        "Price filter for {:?} set to {:?}: {} matches",
                        category,
                        query.price,
                        query.apply(self.store.catalog.offers()).len()
                    );
                }
                Some(Task::none())
            }

            Message::ResetFilters => {
                if let Some(category) = self.current_category() {
                    self.store.reset_query(category);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
