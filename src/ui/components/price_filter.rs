//! Price range filter
//!
//! Two-thumb range slider over `[0, ceiling]` with the selected bounds
//! printed above it.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::catalog::DEFAULT_PRICE_STEP;
use crate::features::{Catalog, Category};
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::{Interval, RangeSlider};
use crate::utils::format_price;

/// Slider interval for a category page
pub fn price_interval(catalog: &Catalog, category: Option<Category>) -> Interval {
    let ceiling = catalog.price_ceiling(category, DEFAULT_PRICE_STEP);
    Interval::new(0.0, ceiling, DEFAULT_PRICE_STEP).unwrap_or_else(|err| {
        tracing::warn!("Invalid price interval: {}", err);
        Interval::default()
    })
}

pub fn view<'a>(
    interval: Interval,
    price: (f32, f32),
    currency: &str,
    locale: Locale,
) -> Element<'a, Message> {
    let (low, high) = price;

    let title = row![
        text(locale.get(Key::FilterPrice)).size(14).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        Space::new().width(Fill),
        button(text(locale.get(Key::FilterReset)).size(12))
            .padding(0)
            .style(theme::text_button)
            .on_press(Message::ResetFilters),
    ]
    .align_y(Alignment::Center);

    let bounds = row![
        bound_label(format_price(f64::from(low), currency, locale.language)),
        Space::new().width(Fill),
        bound_label(format_price(f64::from(high), currency, locale.language)),
    ];

    let slider = RangeSlider::new(interval, &[low, high], Message::PriceRangeChanged)
        .on_release(Message::PriceRangeReleased)
        .width(Fill);

    container(column![title, Space::new().height(12), bounds, Space::new().height(8), slider])
        .padding(16)
        .width(Fill)
        .style(theme::card)
        .into()
}

fn bound_label<'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::DEFAULT_PRICE_CEILING;

    #[test]
    fn empty_catalog_uses_default_interval() {
        let interval = price_interval(&Catalog::default(), None);
        assert_eq!(interval.min(), 0.0);
        assert_eq!(interval.max(), DEFAULT_PRICE_CEILING);
        assert_eq!(interval.step(), DEFAULT_PRICE_STEP);
    }

    #[test]
    fn sample_catalog_ceiling_is_step_aligned() {
        let catalog = Catalog::sample().unwrap();
        let interval = price_interval(&catalog, Some(Category::Packages));
        assert_eq!(interval.max() % DEFAULT_PRICE_STEP, 0.0);
        assert!(catalog
            .offers()
            .iter()
            .filter(|o| o.category == Category::Packages)
            .all(|o| o.price <= f64::from(interval.max())));
    }
}
