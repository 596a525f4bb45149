//! One line of the cart: title, quantity stepper, subtotal, remove

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::CartItem;
use crate::features::cart::MAX_QUANTITY;
use crate::i18n::Locale;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::icons;
use crate::utils::format_price;

pub fn view(item: &CartItem, locale: Locale) -> Element<'_, Message> {
    let id = item.offer_id;

    let details = column![
        text(&item.title).size(15).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        Space::new().height(4),
        text(format!(
            "{} {}  ·  {}",
            item.category.glyph(),
            locale.get(item.category.label_key()),
            format_price(item.unit_price, &item.currency, locale.language)
        ))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .width(Fill);

    // Decrement to zero removes the line
    let stepper = row![
        step_button(icons::MINUS, Some(Message::UpdateQuantity(id, item.quantity - 1))),
        container(text(item.quantity.to_string()).size(14))
            .width(36)
            .align_x(Alignment::Center),
        step_button(
            icons::PLUS,
            (item.quantity < MAX_QUANTITY).then_some(Message::UpdateQuantity(id, item.quantity + 1)),
        ),
    ]
    .align_y(Alignment::Center);

    let subtotal = container(
        text(format_price(item.subtotal(), &item.currency, locale.language))
            .size(15)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    )
    .width(140)
    .align_x(Alignment::End);

    let remove = button(icons::view(icons::TRASH, 16.0, theme::TEXT_SECONDARY))
        .padding(6)
        .style(theme::danger_text_button)
        .on_press(Message::RemoveFromCart(id));

    container(
        row![
            details,
            stepper,
            Space::new().width(24),
            subtotal,
            Space::new().width(12),
            remove,
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(14.0).left(18.0).right(12.0))
    .width(Fill)
    .style(theme::card)
    .into()
}

fn step_button(icon: &'static str, on_press: Option<Message>) -> Element<'static, Message> {
    button(icons::view(icon, 14.0, theme::TEXT_SECONDARY))
        .padding(6)
        .style(theme::secondary_button)
        .on_press_maybe(on_press)
        .into()
}
