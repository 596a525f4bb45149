//! Section header widget
//!
//! Title on the left, optional "see all" link on the right.

use iced::widget::{Space, button, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
///
/// `on_see_all` hides the link when `None`.
pub fn view<'a, Message: Clone + 'a>(
    title: &'a str,
    see_all_text: &'a str,
    on_see_all: Option<Message>,
) -> Element<'a, Message> {
    let title_text = text(title)
        .size(20)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let see_all: Element<'a, Message> = match on_see_all {
        Some(msg) => button(
            row![
                text(see_all_text).size(14),
                Space::new().width(4),
                icons::view(icons::CHEVRON_RIGHT, 16.0, theme::ACCENT),
            ]
            .align_y(Alignment::Center),
        )
        .padding(0)
        .style(theme::text_button)
        .on_press(msg)
        .into(),
        None => Space::new().width(0).into(),
    };

    row![title_text, Space::new().width(Fill), see_all]
        .align_y(Alignment::Center)
        .into()
}
