//! Top navigation bar
//!
//! Brand, back/forward, one tab per page, then cart / settings / account.

use iced::widget::{Space, button, container, row, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Category;
use crate::i18n::{Key, Locale};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

pub const NAV_BAR_HEIGHT: f32 = 64.0;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Catalog(Category),
    Cart,
    Settings,
}

impl Page {
    pub fn label_key(&self) -> Key {
        match self {
            Page::Home => Key::NavHome,
            Page::Catalog(category) => category.label_key(),
            Page::Cart => Key::NavCart,
            Page::Settings => Key::NavSettings,
        }
    }

    /// Category shown by a catalog page
    pub fn category(&self) -> Option<Category> {
        match self {
            Page::Catalog(category) => Some(*category),
            _ => None,
        }
    }
}

/// Everything the bar needs from app state
pub struct NavBarProps<'a> {
    pub active: Page,
    pub locale: Locale,
    pub cart_count: u32,
    pub user_email: Option<&'a str>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

pub fn view(props: NavBarProps<'_>) -> Element<'_, Message> {
    let locale = props.locale;

    let brand = button(
        text(locale.get(Key::AppName))
            .size(22)
            .color(theme::ACCENT)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    )
    .padding(0)
    .style(theme::text_button)
    .on_press(Message::Navigate(Page::Home));

    let history = row![
        history_button("‹", props.can_go_back.then_some(Message::NavigateBack)),
        history_button("›", props.can_go_forward.then_some(Message::NavigateForward)),
    ]
    .spacing(4);

    let mut tabs = row![tab(Page::Home, props.active, locale)].spacing(4);
    for category in Category::all() {
        tabs = tabs.push(tab(Page::Catalog(*category), props.active, locale));
    }

    let account: Element<'_, Message> = match props.user_email {
        Some(email) => button(
            row![
                icons::view(icons::USER, 16.0, theme::ACCENT),
                Space::new().width(6),
                text(email).size(13),
            ]
            .align_y(Alignment::Center),
        )
        .padding(Padding::new(8.0).left(12.0).right(12.0))
        .style(theme::secondary_button)
        .on_press(Message::ToggleLoginPopup)
        .into(),
        None => button(text(locale.get(Key::Login)).size(13))
            .padding(Padding::new(8.0).left(16.0).right(16.0))
            .style(theme::primary_button)
            .on_press(Message::ToggleLoginPopup)
            .into(),
    };

    let settings = button(icons::view(icons::SETTINGS, 20.0, theme::TEXT_SECONDARY))
        .padding(8)
        .style(theme::nav_item(props.active == Page::Settings))
        .on_press(Message::Navigate(Page::Settings));

    let content = row![
        brand,
        Space::new().width(16),
        history,
        Space::new().width(24),
        tabs,
        Space::new().width(Fill),
        cart_button(props.cart_count, props.active == Page::Cart),
        Space::new().width(4),
        settings,
        Space::new().width(12),
        account,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(12.0).left(24.0).right(24.0));

    container(content)
        .width(Fill)
        .height(NAV_BAR_HEIGHT)
        .align_y(Alignment::Center)
        .style(theme::nav_bar)
        .into()
}

fn tab(page: Page, active: Page, locale: Locale) -> Element<'static, Message> {
    button(text(locale.get(page.label_key())).size(14))
        .padding(Padding::new(8.0).left(14.0).right(14.0))
        .style(theme::nav_item(page == active))
        .on_press(Message::Navigate(page))
        .into()
}

fn history_button(glyph: &'static str, on_press: Option<Message>) -> Element<'static, Message> {
    button(text(glyph).size(20))
        .padding(Padding::new(0.0).left(8.0).right(8.0))
        .style(theme::text_button)
        .on_press_maybe(on_press)
        .into()
}

fn cart_button(count: u32, active: bool) -> Element<'static, Message> {
    let icon = button(icons::view(icons::CART, 20.0, theme::TEXT_SECONDARY))
        .padding(8)
        .style(theme::nav_item(active))
        .on_press(Message::Navigate(Page::Cart));

    if count == 0 {
        return icon.into();
    }

    let label = if count > 99 {
        "99+".to_string()
    } else {
        count.to_string()
    };
    let badge = container(text(label).size(10))
        .padding(Padding::new(1.0).left(5.0).right(5.0))
        .style(theme::badge);

    stack![
        icon,
        container(badge).width(Fill).align_x(Alignment::End),
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_pages_carry_their_category() {
        assert_eq!(Page::Catalog(Category::Cars).category(), Some(Category::Cars));
        assert_eq!(Page::Cart.category(), None);
        assert_eq!(Page::Catalog(Category::Flights).label_key(), Key::NavFlights);
        assert_eq!(Page::default(), Page::Home);
    }
}
