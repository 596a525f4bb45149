//! Catalog page - one per category
//! Search, sort and price filter on the left, matching offers on the right

use std::fmt;

use iced::widget::{Space, column, container, pick_list, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::{Cart, Catalog, CatalogQuery, Category, SortOrder};
use crate::i18n::{Key, Locale};
use crate::ui::components::{offer_grid, price_filter, search_bar};
use crate::ui::theme::{self, BOLD_WEIGHT};

const FILTER_WIDTH: f32 = 280.0;
const PAGE_PADDING: f32 = 24.0;

/// Sort order with its translated label, for the pick list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortChoice {
    pub order: SortOrder,
    label: &'static str,
}

impl SortChoice {
    fn all(locale: Locale) -> Vec<SortChoice> {
        SortOrder::all()
            .iter()
            .map(|order| SortChoice::new(*order, locale))
            .collect()
    }

    fn new(order: SortOrder, locale: Locale) -> Self {
        Self {
            order,
            label: locale.get(order.label_key()),
        }
    }
}

impl fmt::Display for SortChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

pub struct CatalogPageProps<'a> {
    pub category: Category,
    pub query: CatalogQuery,
    pub catalog: &'a Catalog,
    pub cart: &'a Cart,
    pub is_logged_in: bool,
    pub using_sample: bool,
    pub locale: Locale,
    pub content_width: f32,
}

/// Width left for the offer grid beside the filter column
pub fn grid_width(content_width: f32) -> f32 {
    (content_width - FILTER_WIDTH - PAGE_PADDING * 3.0).max(0.0)
}

pub fn view(props: CatalogPageProps<'_>) -> Element<'_, Message> {
    let locale = props.locale;
    let query = &props.query;

    let title = text(locale.get(props.category.label_key()))
        .size(28)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let sort = row![
        text(locale.get(Key::SortLabel)).size(13).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
        Space::new().width(8),
        pick_list(
            SortChoice::all(locale),
            Some(SortChoice::new(query.sort, locale)),
            |choice: SortChoice| Message::SortChanged(choice.order),
        )
        .text_size(13)
        .padding(Padding::new(8.0).left(12.0).right(12.0))
        .style(theme::pick_list_style)
        .menu_style(theme::pick_list_menu),
    ]
    .align_y(Alignment::Center);

    let header = row![
        title,
        Space::new().width(24),
        search_bar::view(&query.search, locale),
        Space::new().width(Fill),
        sort,
    ]
    .align_y(Alignment::Center);

    let interval = price_filter::price_interval(props.catalog, Some(props.category));
    let currency = props
        .catalog
        .offers()
        .iter()
        .find(|o| o.category == props.category)
        .map_or("ARS", |o| o.currency.as_str());

    let filters = column![price_filter::view(interval, query.price, currency, locale)]
        .width(FILTER_WIDTH);

    let offers = query.apply(props.catalog.offers());
    let count = text(format!("{} {}", offers.len(), locale.get(Key::ResultsCount)))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let results: Element<'_, Message> = if offers.is_empty() {
        container(text(locale.get(Key::NoResults)).size(15).style(|theme| {
            text::Style {
                color: Some(theme::text_secondary(theme)),
            }
        }))
        .width(Fill)
        .padding(48)
        .align_x(Alignment::Center)
        .into()
    } else {
        offer_grid::view(
            &offers,
            props.cart,
            props.is_logged_in,
            locale,
            grid_width(props.content_width),
        )
    };

    let mut body = column![header, Space::new().height(20)];
    if props.using_sample {
        body = body.push(notice(locale.get(Key::UsingSampleCatalog)));
        body = body.push(Space::new().height(16));
    }
    body = body.push(
        row![
            filters,
            Space::new().width(PAGE_PADDING),
            column![count, Space::new().height(12), results].width(Fill),
        ]
        .align_y(Alignment::Start),
    );

    let scrollable_content = scrollable(body.push(Space::new().height(40)).padding(PAGE_PADDING))
        .width(Fill)
        .height(Fill)
        .id(iced::widget::Id::new(super::CATALOG_SCROLL))
        .style(theme::content_scrollable);

    container(scrollable_content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}

fn notice<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(13))
        .padding(Padding::new(10.0).left(14.0).right(14.0))
        .width(Fill)
        .style(|theme| container::Style {
            background: Some(theme::hover_bg(theme).into()),
            text_color: Some(theme::info(theme)),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::info(theme),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn sort_choices_are_translated() {
        let choices = SortChoice::all(Locale::new(Language::English));
        assert_eq!(choices.len(), SortOrder::all().len());
        assert_eq!(choices[0].order, SortOrder::Featured);
        assert_eq!(choices[0].to_string(), "Featured");
    }

    #[test]
    fn grid_width_never_negative() {
        assert_eq!(grid_width(100.0), 0.0);
        assert!(grid_width(1400.0) > 900.0);
    }
}
