//! Offer grid component
//!
//! Lays offer cards out in rows sized to the window width.

use iced::widget::{Space, column, row};
use iced::{Element, Fill};

use crate::app::Message;
use crate::features::{Cart, Offer};
use crate::i18n::Locale;
use crate::ui::components::offer_card::{self, CARD_WIDTH, CardAction};

const CARD_SPACING: f32 = 20.0;
const ROW_SPACING: f32 = 20.0;

/// Number of card columns that fit in `container_width`
pub fn calculate_columns(container_width: f32) -> usize {
    let columns =
        ((container_width + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING)).floor() as usize;
    columns.max(1)
}

pub fn view<'a>(
    offers: &[&'a Offer],
    cart: &Cart,
    is_logged_in: bool,
    locale: Locale,
    container_width: f32,
) -> Element<'a, Message> {
    if offers.is_empty() {
        return Space::new().width(Fill).height(0).into();
    }

    let columns = calculate_columns(container_width);

    let rows = offers.chunks(columns).map(|chunk| -> Element<'a, Message> {
        let mut cards = row![].spacing(CARD_SPACING);
        for offer in chunk {
            let action = CardAction::resolve(is_logged_in, cart.contains(offer.id));
            cards = cards.push(offer_card::view(*offer, action, locale));
        }
        cards.into()
    });

    column(rows).spacing(ROW_SPACING).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_container() {
        assert_eq!(calculate_columns(0.0), 1);
        assert_eq!(calculate_columns(CARD_WIDTH), 1);
        assert_eq!(calculate_columns(CARD_WIDTH * 2.0 + CARD_SPACING), 2);
        assert_eq!(calculate_columns(CARD_WIDTH * 3.0 + CARD_SPACING), 2);
    }
}
