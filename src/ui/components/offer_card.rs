//! Offer card component
//!
//! Booking is only offered to signed-in users; everyone else gets a prompt
//! that opens the login popup.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Offer;
use crate::i18n::{Key, Locale};
use crate::ui::components::Page;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::utils::format_price;

pub const CARD_WIDTH: f32 = 280.0;
const CARD_HEIGHT: f32 = 250.0;

/// What the card's action button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    LoginToBook,
    AddToCart,
    InCart,
}

impl CardAction {
    pub fn resolve(is_logged_in: bool, in_cart: bool) -> Self {
        match (is_logged_in, in_cart) {
            (false, _) => CardAction::LoginToBook,
            (true, true) => CardAction::InCart,
            (true, false) => CardAction::AddToCart,
        }
    }
}

pub fn view<'a>(offer: &'a Offer, action: CardAction, locale: Locale) -> Element<'a, Message> {
    let header = row![
        text(offer.category.glyph()).size(16),
        Space::new().width(8),
        text(&offer.destination)
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        Space::new().width(Fill),
        rating(offer),
    ]
    .align_y(Alignment::Center);

    let title = text(&offer.title).size(17).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let description = text(&offer.description)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let duration: Element<'a, Message> = match &offer.duration {
        Some(duration) => text(duration)
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into(),
        None => Space::new().height(0).into(),
    };

    let price = text(format_price(offer.price, &offer.currency, locale.language))
        .size(18)
        .color(theme::HIGHLIGHT)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let footer = row![price, Space::new().width(Fill), action_button(offer.id, action, locale)]
        .align_y(Alignment::Center);

    let content = column![
        header,
        Space::new().height(10),
        title,
        Space::new().height(6),
        description,
        Space::new().height(6),
        duration,
        Space::new().height(Fill),
        footer,
    ];

    container(content)
        .width(CARD_WIDTH)
        .height(CARD_HEIGHT)
        .padding(16)
        .style(theme::card)
        .into()
}

fn rating(offer: &Offer) -> Element<'_, Message> {
    match offer.rating {
        Some(rating) => text(format!("★ {:.1}", rating))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::warning(theme)),
            })
            .into(),
        None => Space::new().width(0).into(),
    }
}

fn action_button(offer_id: i64, action: CardAction, locale: Locale) -> Element<'static, Message> {
    let padding = Padding::new(8.0).left(14.0).right(14.0);
    match action {
        CardAction::LoginToBook => button(text(locale.get(Key::LoginToBook)).size(13))
            .padding(padding)
            .style(theme::secondary_button)
            .on_press(Message::ToggleLoginPopup)
            .into(),
        CardAction::InCart => button(text(format!("✓ {}", locale.get(Key::InCart))).size(13))
            .padding(padding)
            .style(theme::secondary_button)
            .on_press(Message::Navigate(Page::Cart))
            .into(),
        CardAction::AddToCart => button(text(locale.get(Key::AddToCart)).size(13))
            .padding(padding)
            .style(theme::primary_button)
            .on_press(Message::AddToCart(offer_id))
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guests_are_asked_to_log_in() {
        assert_eq!(CardAction::resolve(false, false), CardAction::LoginToBook);
        assert_eq!(CardAction::resolve(false, true), CardAction::LoginToBook);
    }

    #[test]
    fn signed_in_users_can_book() {
        assert_eq!(CardAction::resolve(true, false), CardAction::AddToCart);
        assert_eq!(CardAction::resolve(true, true), CardAction::InCart);
    }
}
