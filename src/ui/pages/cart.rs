//! Cart page
//! Line items, running total and checkout

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Cart;
use crate::i18n::{Key, Locale};
use crate::ui::components::{Page, cart_line};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::utils::format_price;

pub struct CartPageProps<'a> {
    pub cart: &'a Cart,
    pub is_logged_in: bool,
    pub checkout_pending: bool,
    /// Redirect URL of the last completed checkout
    pub checkout_url: Option<&'a str>,
    pub currency: &'a str,
    pub locale: Locale,
}

pub fn view(props: CartPageProps<'_>) -> Element<'_, Message> {
    let locale = props.locale;

    let title = text(locale.get(Key::CartTitle)).size(28).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let mut body = column![title, Space::new().height(20)];

    if let Some(url) = props.checkout_url {
        body = body.push(checkout_link(url, locale)).push(Space::new().height(16));
    }

    if props.cart.is_empty() {
        body = body.push(empty_state(locale));
    } else {
        let lines = column(
            props
                .cart
                .items()
                .iter()
                .map(|item| cart_line::view(item, locale)),
        )
        .spacing(10);

        body = body
            .push(lines)
            .push(Space::new().height(20))
            .push(summary(&props));
    }

    let scrollable_content = scrollable(body.push(Space::new().height(40)).padding(24))
        .width(Fill)
        .height(Fill)
        .style(theme::content_scrollable);

    container(scrollable_content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}

fn empty_state(locale: Locale) -> Element<'static, Message> {
    container(
        column![
            text(locale.get(Key::CartEmpty)).size(16).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
            Space::new().height(16),
            button(text(locale.get(Key::HeroButton)).size(14))
                .padding(Padding::new(10.0).left(20.0).right(20.0))
                .style(theme::primary_button)
                .on_press(Message::Navigate(Page::Home)),
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(48)
    .align_x(Alignment::Center)
    .into()
}

fn summary<'a>(props: &CartPageProps<'a>) -> Element<'a, Message> {
    let locale = props.locale;

    let total = row![
        text(locale.get(Key::CartTotal)).size(16),
        Space::new().width(Fill),
        text(format_price(
            props.cart.total(),
            props.currency,
            locale.language
        ))
        .size(22)
        .color(theme::HIGHLIGHT)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
    ]
    .align_y(Alignment::Center);

    let clear = button(text(locale.get(Key::CartClear)).size(13))
        .padding(0)
        .style(theme::danger_text_button)
        .on_press(Message::ClearCart);

    let checkout: Element<'a, Message> = if !props.is_logged_in {
        button(text(locale.get(Key::LoginToCheckout)).size(14))
            .padding(Padding::new(12.0).left(24.0).right(24.0))
            .style(theme::secondary_button)
            .on_press(Message::ToggleLoginPopup)
            .into()
    } else if props.checkout_pending {
        button(text(locale.get(Key::CheckoutPending)).size(14))
            .padding(Padding::new(12.0).left(24.0).right(24.0))
            .style(theme::primary_button)
            .into()
    } else {
        button(text(locale.get(Key::Checkout)).size(14))
            .padding(Padding::new(12.0).left(24.0).right(24.0))
            .style(theme::primary_button)
            .on_press(Message::Checkout)
            .into()
    };

    container(column![
        total,
        Space::new().height(20),
        row![clear, Space::new().width(Fill), checkout].align_y(Alignment::Center),
    ])
    .padding(20)
    .width(Fill)
    .style(theme::card)
    .into()
}

fn checkout_link<'a>(url: &'a str, locale: Locale) -> Element<'a, Message> {
    container(
        column![
            text(locale.get(Key::CheckoutLinkCopied)).size(14),
            Space::new().height(6),
            text(url).size(12).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        ],
    )
    .padding(14)
    .width(Fill)
    .style(|theme| container::Style {
        background: Some(theme::hover_bg(theme).into()),
        text_color: Some(theme::success(theme)),
        border: iced::Border {
            radius: 8.0.into(),
            width: 1.0,
            color: theme::success(theme),
        },
        ..Default::default()
    })
    .into()
}
