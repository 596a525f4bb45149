//! Theme system for the storefront
//! Supports both dark and light modes with a shared ocean-teal accent

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Weight used for titles and prices
pub const BOLD_WEIGHT: Weight = Weight::Bold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0e1116);
    pub const NAV: Color = color!(0x151a21);
    pub const SURFACE: Color = color!(0x1b2129);
    pub const BORDER: Color = color!(0x2a323d);
    pub const TEXT_MUTED: Color = color!(0x7d8794);
    pub const TEXT_SECONDARY: Color = color!(0xaab3bf);
    pub const TEXT_PRIMARY: Color = color!(0xf2f5f8);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf7f8fa);
    pub const NAV: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xdde2e8);
    pub const TEXT_MUTED: Color = color!(0x808a96);
    pub const TEXT_SECONDARY: Color = color!(0x4f5966);
    pub const TEXT_PRIMARY: Color = color!(0x141a21);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get navigation bar color based on theme
pub fn nav_bg(theme: &Theme) -> Color {
    if is_dark(theme) { dark::NAV } else { light::NAV }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// Fixed tones for icons, which are tinted outside a theme closure
pub const TEXT_SECONDARY: Color = color!(0x8a94a1);
pub const TEXT_MUTED: Color = dark::TEXT_MUTED;

/// Primary accent color (same for both modes)
pub const ACCENT: Color = color!(0x14b8a6);

/// Hover state for primary accent
pub const ACCENT_HOVER: Color = color!(0x2dd4bf);

/// Warm highlight for prices and badges
pub const HIGHLIGHT: Color = color!(0xff7a59);

/// Disabled text color (for inactive buttons)
pub const TEXT_DISABLED: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.5);

/// Hover background color based on theme
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.05)
    }
}

/// Surface elevated color (for cards, popups)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.13, 0.15, 0.18)
    } else {
        Color::from_rgb(1.0, 1.0, 1.0)
    }
}

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

/// Danger hover color
pub fn danger_hover(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(1.0, 0.4, 0.4)
    } else {
        Color::from_rgb(0.9, 0.3, 0.3)
    }
}

/// Success color
pub fn success(_theme: &Theme) -> Color {
    Color::from_rgb(0.3, 0.8, 0.5)
}

/// Warning color, also used for ratings
pub fn warning(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.95, 0.75, 0.3)
    } else {
        Color::from_rgb(0.8, 0.55, 0.05)
    }
}

/// Info color
pub fn info(_theme: &Theme) -> Color {
    Color::from_rgb(0.4, 0.7, 0.95)
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Overlay backdrop color
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, opacity)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, opacity * 0.7)
    }
}

/// Drop shadow color
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.12)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Top navigation bar
pub fn nav_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(nav_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hero banner container
pub fn hero_banner(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        color!(0x0f3b3a)
    } else {
        color!(0xd7f5f1)
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Offer card and side panels
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Small rounded badge (cart count, category tag)
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(HIGHLIGHT)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Login popup container
pub fn login_popup(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(TEXT_DISABLED)),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            border: Border {
                color: text_muted(theme),
                ..base.border
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: TEXT_DISABLED,
            ..base
        },
        _ => base,
    }
}

/// Text button (no background, just text color change on hover)
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Danger text button for destructive actions
pub fn danger_text_button(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => danger_hover(theme),
        _ => danger(theme),
    };
    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

/// Navigation item; `active` highlights the current page
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let base = button::Style {
            background: Some(Background::Color(if active {
                hover_bg(theme)
            } else {
                Color::TRANSPARENT
            })),
            text_color: if active {
                ACCENT
            } else {
                text_secondary(theme)
            },
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };

        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(hover_bg(theme))),
                text_color: if active { ACCENT } else { text_primary(theme) },
                ..base
            },
            _ => base,
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Bordered text input used in forms
pub fn form_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => ACCENT,
        _ => border_color(theme),
    };
    text_input::Style {
        background: Background::Color(background(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border,
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: ACCENT,
    }
}

// ============================================================================
// Pick List (Dropdown) Styles
// ============================================================================

/// Dropdown style - semi-transparent background with rounded corners
pub fn pick_list_style(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let bg = if is_dark(theme) {
        match status {
            pick_list::Status::Active => Color::from_rgba(1.0, 1.0, 1.0, 0.06),
            pick_list::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            pick_list::Status::Opened { .. } => Color::from_rgba(1.0, 1.0, 1.0, 0.14),
        }
    } else {
        match status {
            pick_list::Status::Active => Color::from_rgba(0.0, 0.0, 0.0, 0.04),
            pick_list::Status::Hovered => Color::from_rgba(0.0, 0.0, 0.0, 0.07),
            pick_list::Status::Opened { .. } => Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        }
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_muted(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
    }
}

/// Dropdown menu style
pub fn pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(surface_elevated(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        selected_text_color: text_primary(theme),
        selected_background: Background::Color(hover_bg(theme)),
        shadow: Shadow::default(),
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for main content
pub fn content_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_theme_brightness() {
        assert_eq!(background(&Theme::Dark), dark::BACKGROUND);
        assert_eq!(background(&Theme::Light), light::BACKGROUND);
        assert_eq!(text_primary(&Theme::Dark), dark::TEXT_PRIMARY);
    }

    #[test]
    fn warning_is_darker_on_light_theme() {
        let on_dark = warning(&Theme::Dark);
        let on_light = warning(&Theme::Light);
        assert_ne!(on_dark, on_light);
        assert!(on_light.g < on_dark.g);
    }

    #[test]
    fn active_nav_item_uses_accent() {
        let style = nav_item(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, ACCENT);
        let style = nav_item(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, dark::TEXT_SECONDARY);
    }
}
