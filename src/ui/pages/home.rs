//! Home page
//! Hero banner, category shortcuts and featured offers

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::{Cart, Catalog, Category, Offer};
use crate::i18n::{Key, Locale};
use crate::ui::components::{Page, offer_grid};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::section_header;

/// Featured offers shown on the home page
const MAX_FEATURED: usize = 6;

pub fn view<'a>(
    catalog: &'a Catalog,
    cart: &Cart,
    is_logged_in: bool,
    locale: Locale,
    content_width: f32,
) -> Element<'a, Message> {
    let featured: Vec<&Offer> = catalog.featured().take(MAX_FEATURED).collect();

    let mut content = column![
        hero(locale),
        Space::new().height(32),
        section_header::view(locale.get(Key::BrowseCategories), "", None),
        Space::new().height(16),
        category_shortcuts(catalog, locale),
    ];

    if !featured.is_empty() {
        content = content.push(Space::new().height(32)).push(section_header::view(
            locale.get(Key::FeaturedOffers),
            locale.get(Key::SeeAll),
            Some(Message::Navigate(Page::Catalog(Category::Packages))),
        ));
        content = content.push(Space::new().height(16)).push(offer_grid::view(
            &featured,
            cart,
            is_logged_in,
            locale,
            content_width,
        ));
    }

    let scrollable_content = scrollable(content.push(Space::new().height(40)).padding(24))
        .width(Fill)
        .height(Fill)
        .id(iced::widget::Id::new(super::HOME_SCROLL))
        .style(theme::content_scrollable);

    container(scrollable_content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}

fn hero(locale: Locale) -> Element<'static, Message> {
    let title = text(locale.get(Key::HeroTitle)).size(36).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });
    let subtitle = text(locale.get(Key::HeroSubtitle))
        .size(16)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });
    let cta = button(text(locale.get(Key::HeroButton)).size(15))
        .padding(Padding::new(12.0).left(24.0).right(24.0))
        .style(theme::primary_button)
        .on_press(Message::Navigate(Page::Catalog(Category::Packages)));

    container(column![
        title,
        Space::new().height(12),
        subtitle,
        Space::new().height(24),
        cta
    ])
    .padding(40)
    .width(Fill)
    .style(theme::hero_banner)
    .into()
}

fn category_shortcuts(catalog: &Catalog, locale: Locale) -> Element<'static, Message> {
    let mut shortcuts = row![].spacing(16);
    for category in Category::all() {
        let card = column![
            text(category.glyph()).size(28),
            Space::new().height(8),
            text(locale.get(category.label_key())).size(16).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
            Space::new().height(4),
            text(format!(
                "{} {}",
                catalog.count_in(*category),
                locale.get(Key::OffersAvailable)
            ))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ]
        .align_x(Alignment::Start);

        shortcuts = shortcuts.push(
            button(card)
                .width(Fill)
                .padding(20)
                .style(|theme, status| {
                    let hovered = matches!(status, button::Status::Hovered);
                    button::Style {
                        background: Some(
                            if hovered {
                                theme::surface_elevated(theme)
                            } else {
                                theme::surface(theme)
                            }
                            .into(),
                        ),
                        text_color: theme::text_primary(theme),
                        border: iced::Border {
                            radius: 12.0.into(),
                            width: 1.0,
                            color: if hovered {
                                theme::ACCENT
                            } else {
                                theme::border_color(theme)
                            },
                        },
                        ..Default::default()
                    }
                })
                .on_press(Message::Navigate(Page::Catalog(*category))),
        );
    }
    shortcuts.into()
}
