//! Settings page
//! Display preferences plus read-only status of the hosted services

use iced::widget::{Space, column, container, pick_list, row, scrollable, text, toggler};
use iced::{Alignment, Background, Element, Fill};

use crate::app::Message;
use crate::features::Settings;
use crate::i18n::{Key, Language, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

pub fn view(settings: &Settings, locale: Locale) -> Element<'static, Message> {
    let title = text(locale.get(Key::SettingsTitle)).size(28).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let config_path = Settings::file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "settings.json".to_string());

    let content = column![
        title,
        Space::new().height(24),
        section_header(locale.get(Key::SettingsDisplay)),
        display_section(settings, locale),
        Space::new().height(32),
        section_header(locale.get(Key::SettingsBackend)),
        setting_row(
            locale.get(Key::SettingsBackendUrl),
            None,
            status_value(
                settings
                    .backend
                    .is_configured()
                    .then(|| settings.backend.url.clone()),
                locale
            ),
        ),
        Space::new().height(32),
        section_header(locale.get(Key::SettingsPayment)),
        setting_row(
            locale.get(Key::SettingsPaymentEndpoint),
            None,
            status_value(
                settings
                    .payment
                    .is_configured()
                    .then(|| settings.payment.endpoint.clone()),
                locale
            ),
        ),
        divider(),
        setting_row(
            locale.get(Key::SettingsCurrency),
            None,
            text(settings.payment.currency.clone()).size(14).into(),
        ),
        Space::new().height(24),
        text(locale.get(Key::SettingsConfigHint))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        Space::new().height(4),
        text(config_path).size(12).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
    ]
    .max_width(720)
    .padding(24);

    container(
        scrollable(content)
            .width(Fill)
            .height(Fill)
            .style(theme::content_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

fn display_section(settings: &Settings, locale: Locale) -> Element<'static, Message> {
    let current = Language::from_code(&settings.display.language);

    column![
        setting_row(
            locale.get(Key::SettingsDarkMode),
            None,
            toggler(settings.display.dark_mode)
                .on_toggle(Message::UpdateDarkMode)
                .size(24)
                .into()
        ),
        divider(),
        setting_row(
            locale.get(Key::SettingsLanguage),
            None,
            pick_list(Language::all(), Some(current), Message::UpdateLanguage)
                .style(theme::pick_list_style)
                .menu_style(theme::pick_list_menu)
                .padding([8, 12])
                .into()
        ),
    ]
    .into()
}

fn section_header(title: &str) -> Element<'static, Message> {
    text(title.to_string()).size(18).color(theme::ACCENT).into()
}

/// Setting row with label on left and control on right
fn setting_row<'a>(
    label: &str,
    description: Option<&str>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut label_section = column![text(label.to_string()).size(15)].spacing(4);
    if let Some(desc) = description {
        label_section = label_section.push(text(desc.to_string()).size(12).style(|theme| {
            text::Style {
                color: Some(theme::text_muted(theme)),
            }
        }));
    }

    container(
        row![label_section, Space::new().width(Fill), control]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .padding([16, 0])
    .into()
}

/// Configured value, or a muted "not configured"
fn status_value(value: Option<String>, locale: Locale) -> Element<'static, Message> {
    match value {
        Some(value) => text(value).size(14).into(),
        None => text(locale.get(Key::SettingsNotConfigured))
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::warning(theme)),
            })
            .into(),
    }
}

fn divider() -> Element<'static, Message> {
    container(Space::new().width(Fill).height(1))
        .style(|theme| container::Style {
            background: Some(Background::Color(theme::divider(theme))),
            ..Default::default()
        })
        .width(Fill)
        .into()
}
