//! Login popup component
//!
//! Email/password form that toggles between sign-in and sign-up, or the
//! current account with a sign-out button once a session exists.

use iced::widget::{Space, button, column, container, mouse_area, row, stack, text, text_input};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::features::{AuthForm, AuthMode, Session};
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::icons;

const POPUP_WIDTH: f32 = 360.0;

pub fn view<'a>(
    form: &'a AuthForm,
    session: Option<&'a Session>,
    locale: Locale,
) -> Element<'a, Message> {
    if !form.is_open {
        return Space::new().width(0).height(0).into();
    }

    let content = match session {
        Some(session) => view_signed_in(session, locale),
        None => view_form(form, locale),
    };

    // mouse_area keeps clicks on the popup from reaching the backdrop
    let popup = mouse_area(
        container(content)
            .width(POPUP_WIDTH)
            .padding(28)
            .style(theme::login_popup),
    )
    .on_press(Message::Noop);

    let backdrop = mouse_area(
        container(Space::new().width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(|theme| container::Style {
                background: Some(theme::overlay_backdrop(theme, 0.5).into()),
                ..Default::default()
            }),
    )
    .on_press(Message::ToggleLoginPopup);

    stack![
        backdrop,
        container(popup)
            .width(Fill)
            .height(Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    ]
    .width(Fill)
    .height(Fill)
    .into()
}

fn title<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(22)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .into()
}

fn view_form(form: &AuthForm, locale: Locale) -> Element<'_, Message> {
    let (heading, submit, switch) = match form.mode {
        AuthMode::SignIn => (Key::LoginTitle, Key::SignIn, Key::SwitchToSignUp),
        AuthMode::SignUp => (Key::SignUpTitle, Key::SignUp, Key::SwitchToSignIn),
    };

    let email = text_input(locale.get(Key::Email), &form.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::SubmitAuth)
        .padding(12)
        .size(14)
        .style(theme::form_input);

    let password = text_input(locale.get(Key::Password), &form.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::SubmitAuth)
        .secure(true)
        .padding(12)
        .size(14)
        .style(theme::form_input);

    let error: Element<'_, Message> = match &form.error {
        Some(error) => text(error)
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::danger(theme)),
            })
            .into(),
        None => Space::new().height(0).into(),
    };

    let submit_label = if form.pending {
        "…"
    } else {
        locale.get(submit)
    };
    let submit = button(
        container(text(submit_label).size(14))
            .width(Fill)
            .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(12)
    .style(theme::primary_button)
    .on_press_maybe((!form.pending).then_some(Message::SubmitAuth));

    let switch = button(text(locale.get(switch)).size(13))
        .padding(0)
        .style(theme::text_button)
        .on_press_maybe((!form.pending).then_some(Message::ToggleAuthMode));

    column![
        title(locale.get(heading)),
        Space::new().height(20),
        email,
        Space::new().height(10),
        password,
        Space::new().height(10),
        error,
        Space::new().height(14),
        submit,
        Space::new().height(14),
        switch,
    ]
    .align_x(Alignment::Center)
    .width(Fill)
    .into()
}

fn view_signed_in(session: &Session, locale: Locale) -> Element<'_, Message> {
    let email = text(&session.email).size(16).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let sign_out = button(
        row![
            icons::view(icons::LOGOUT, 16.0, Color::WHITE),
            Space::new().width(8),
            text(locale.get(Key::SignOut)).size(14).color(Color::WHITE),
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(12.0).left(20.0).right(20.0))
    .style(|theme, status| {
        let background = match status {
            button::Status::Hovered => theme::danger_hover(theme),
            _ => theme::danger(theme),
        };
        button::Style {
            background: Some(background.into()),
            text_color: Color::WHITE,
            border: iced::Border {
                radius: 24.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .on_press(Message::SignOut);

    column![
        title(locale.get(Key::SignedInAs)),
        Space::new().height(16),
        icons::view(icons::USER, 40.0, theme::ACCENT),
        Space::new().height(12),
        email,
        Space::new().height(28),
        sign_out,
    ]
    .align_x(Alignment::Center)
    .width(Fill)
    .into()
}
