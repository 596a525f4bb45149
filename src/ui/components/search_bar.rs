//! Search bar component
//! Rounded search input filtering the current category by title or destination

use iced::widget::{Space, container, row, text_input};
use iced::{Alignment, Element, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

/// The input copies `search_query`, so the element does not borrow it
pub fn view<'a>(search_query: &str, locale: Locale) -> Element<'a, Message> {
    let input = text_input(locale.get(Key::SearchPlaceholder), search_query)
        .on_input(Message::SearchChanged)
        .padding(Padding::new(12.0).left(0.0))
        .size(14)
        .style(|theme, _status| text_input::Style {
            background: iced::Background::Color(iced::Color::TRANSPARENT),
            border: iced::Border::default(),
            icon: theme::text_muted(theme),
            placeholder: theme::text_muted(theme),
            value: theme::text_primary(theme),
            selection: theme::ACCENT,
        });

    let content = row![
        Space::new().width(16),
        icons::view(icons::SEARCH, 18.0, theme::TEXT_MUTED),
        Space::new().width(12),
        input,
        Space::new().width(16),
    ]
    .align_y(Alignment::Center);

    container(content)
        .width(360)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface(theme))),
            border: iced::Border {
                radius: 24.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            ..Default::default()
        })
        .into()
}
