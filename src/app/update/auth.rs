//! Login popup and session handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::AuthMode;
use crate::i18n::Key;
use crate::ui::widgets::ToastStyle;

impl App {
    pub fn handle_auth(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleLoginPopup => {
                if self.ui.auth.is_open {
                    // Leave an in-flight request alone; its result still lands
                    let pending = self.ui.auth.pending;
                    self.ui.auth.reset();
                    self.ui.auth.pending = pending;
                } else {
                    self.ui.auth.is_open = true;
                }
                Some(Task::none())
            }

            Message::EmailChanged(email) => {
                self.ui.auth.email = email.clone();
                self.ui.auth.error = None;
                Some(Task::none())
            }

            Message::PasswordChanged(password) => {
                self.ui.auth.password = password.clone();
                self.ui.auth.error = None;
                Some(Task::none())
            }

            Message::ToggleAuthMode => {
                self.ui.auth.mode = self.ui.auth.mode.toggled();
                self.ui.auth.error = None;
                Some(Task::none())
            }

            Message::SubmitAuth => Some(self.submit_auth()),

            Message::AuthCompleted(Ok(Some(session))) => {
                tracing::info!("Signed in as {}", session.email);
                let text = format!("{} {}", self.core.locale.get(Key::Welcome), session.email);
                self.core.session = Some(session.clone());
                self.ui.auth.reset();
                Some(self.notify(text, ToastStyle::Success))
            }

            Message::AuthCompleted(Ok(None)) => {
                tracing::info!("Account created, awaiting email confirmation");
                self.ui.auth.pending = false;
                self.ui.auth.mode = AuthMode::SignIn;
                self.ui.auth.password.clear();
                let text = self.core.locale.get(Key::ConfirmEmailSent);
                Some(self.notify(text, ToastStyle::Info))
            }

            Message::AuthCompleted(Err(e)) => {
                tracing::warn!("Authentication failed: {}", e);
                self.ui.auth.pending = false;
                self.ui.auth.error =
                    Some(format!("{}: {}", self.core.locale.get(Key::LoginFailed), e));
                Some(Task::none())
            }

            Message::SignOut => {
                let Some(session) = self.core.session.take() else {
                    return Some(Task::none());
                };
                tracing::info!("Signing out {}", session.email);
                self.ui.auth.reset();
                self.ui.checkout_url = None;

                let text = self.core.locale.get(Key::SignedOut);
                let toast = self.notify(text, ToastStyle::Info);
                let remote = match self.core.backend.clone() {
                    Some(backend) => {
                        Task::perform(helpers::sign_out(backend, session), |_| Message::Noop)
                    }
                    None => Task::none(),
                };
                Some(Task::batch([toast, remote]))
            }

            _ => None,
        }
    }

    fn submit_auth(&mut self) -> Task<Message> {
        if self.ui.auth.pending {
            return Task::none();
        }
        if let Err(key) = self.ui.auth.validate() {
            self.ui.auth.error = Some(self.core.locale.get(key).to_string());
            return Task::none();
        }
        let Some(backend) = self.core.backend.clone() else {
            self.ui.auth.error = Some(self.core.locale.get(Key::AuthNotConfigured).to_string());
            return Task::none();
        };

        self.ui.auth.pending = true;
        self.ui.auth.error = None;
        let email = self.ui.auth.email.trim().to_string();
        let password = self.ui.auth.password.clone();

        match self.ui.auth.mode {
            AuthMode::SignIn => Task::perform(
                helpers::sign_in(backend, email, password),
                Message::AuthCompleted,
            ),
            AuthMode::SignUp => Task::perform(
                helpers::sign_up(backend, email, password),
                Message::AuthCompleted,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::Message;
    use crate::app::update::test_support;
    use crate::features::{AuthMode, Session};
    use crate::i18n::Key;

    fn session() -> Session {
        Session {
            user_id: "u-9".to_string(),
            email: "leo@example.com".to_string(),
            access_token: "jwt".to_string(),
        }
    }

    #[test]
    fn invalid_email_is_caught_locally() {
        let mut app = test_support::app();
        let _ = app.update(Message::ToggleLoginPopup);
        let _ = app.update(Message::EmailChanged("not-an-email".to_string()));
        let _ = app.update(Message::PasswordChanged("secret123".to_string()));
        let _ = app.update(Message::SubmitAuth);

        assert!(!app.ui.auth.pending);
        assert_eq!(
            app.ui.auth.error.as_deref(),
            Some(app.core.locale.get(Key::InvalidEmail))
        );
    }

    #[test]
    fn submit_without_backend_reports_it() {
        let mut app = test_support::app();
        let _ = app.update(Message::EmailChanged("ana@example.com".to_string()));
        let _ = app.update(Message::PasswordChanged("secret123".to_string()));
        let _ = app.update(Message::SubmitAuth);

        assert!(!app.ui.auth.pending);
        assert_eq!(
            app.ui.auth.error.as_deref(),
            Some(app.core.locale.get(Key::AuthNotConfigured))
        );
    }

    #[test]
    fn successful_sign_in_stores_session_and_closes_popup() {
        let mut app = test_support::app();
        let _ = app.update(Message::ToggleLoginPopup);
        app.ui.auth.pending = true;

        let _ = app.update(Message::AuthCompleted(Ok(Some(session()))));
        assert!(app.core.is_logged_in());
        assert!(!app.ui.auth.is_open);
        assert!(!app.ui.auth.pending);
        assert!(app.ui.auth.password.is_empty());
    }

    #[test]
    fn pending_confirmation_switches_to_sign_in() {
        let mut app = test_support::app();
        let _ = app.update(Message::ToggleLoginPopup);
        let _ = app.update(Message::ToggleAuthMode);
        assert_eq!(app.ui.auth.mode, AuthMode::SignUp);

        let _ = app.update(Message::AuthCompleted(Ok(None)));
        assert!(!app.core.is_logged_in());
        assert_eq!(app.ui.auth.mode, AuthMode::SignIn);
        assert!(app.ui.auth.is_open);
    }

    #[test]
    fn failure_keeps_form_open_with_error() {
        let mut app = test_support::app();
        let _ = app.update(Message::ToggleLoginPopup);
        app.ui.auth.pending = true;

        let _ = app.update(Message::AuthCompleted(Err(
            "Invalid login credentials (400 Bad Request)".to_string(),
        )));
        assert!(app.ui.auth.is_open);
        assert!(!app.ui.auth.pending);
        assert!(
            app.ui
                .auth
                .error
                .as_deref()
                .is_some_and(|e| e.contains("Invalid login credentials"))
        );
    }

    #[test]
    fn sign_out_drops_session() {
        let mut app = test_support::signed_in(test_support::app());
        let _ = app.update(Message::SignOut);
        assert!(!app.core.is_logged_in());
        assert!(app.ui.toast.is_some());
    }
}
