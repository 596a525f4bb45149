//! Toast notification widget
//!
//! Floating card with a colored accent bar; the app decides when it hides.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// How long a toast stays on screen
pub const TOAST_SECONDS: u64 = 3;

/// Errors linger a little longer
pub const ERROR_TOAST_SECONDS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
    Info,
}

impl ToastStyle {
    /// Indicator color; the card itself stays neutral
    pub fn accent_color(&self, theme: &iced::Theme) -> iced::Color {
        match self {
            ToastStyle::Success => theme::success(theme),
            ToastStyle::Error => theme::danger(theme),
            ToastStyle::Info => theme::info(theme),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
            ToastStyle::Info => "ℹ",
        }
    }

    pub fn duration_secs(&self) -> u64 {
        match self {
            ToastStyle::Error => ERROR_TOAST_SECONDS,
            _ => TOAST_SECONDS,
        }
    }
}

/// Toast notification data
///
/// `id` lets a delayed hide request ignore toasts shown after it was scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(id: u64, message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            id,
            message: message.into(),
            style,
        }
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let style = toast.style;

    let accent_bar = container(Space::new().width(3).height(20)).style(move |theme| {
        container::Style {
            background: Some(iced::Background::Color(style.accent_color(theme))),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon = text(style.icon()).size(14).style(move |theme| text::Style {
        color: Some(style.accent_color(theme)),
    });

    let message = text(toast.message.clone())
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon,
        Space::new().width(10),
        message,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface_elevated(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_longer() {
        assert!(ToastStyle::Error.duration_secs() > ToastStyle::Success.duration_secs());
        assert_eq!(ToastStyle::Info.duration_secs(), TOAST_SECONDS);
    }
}
