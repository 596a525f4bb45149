//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::{Key, Locale};
use crate::ui::widgets::ToastStyle;

impl App {
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                Some(Task::done(Message::SaveSettings))
            }

            Message::UpdateLanguage(language) => {
                self.core.settings.display.language = language.code().to_string();
                self.core.locale = Locale::new(*language);
                tracing::info!("Language changed to {}", language.code());
                Some(Task::done(Message::SaveSettings))
            }

            Message::SaveSettings => match self.core.settings.save() {
                Ok(()) => {
                    tracing::debug!("Settings saved");
                    Some(Task::none())
                }
                Err(e) => {
                    tracing::error!("Failed to save settings: {}", e);
                    let text = format!("{}: {}", self.core.locale.get(Key::SettingsSaveFailed), e);
                    Some(self.notify(text, ToastStyle::Error))
                }
            },

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::Message;
    use crate::app::update::test_support;
    use crate::i18n::{Key, Language};

    #[test]
    fn language_switch_updates_locale_and_settings() {
        let mut app = test_support::app();
        let _ = app.update(Message::UpdateLanguage(Language::Spanish));

        assert_eq!(app.core.locale.language, Language::Spanish);
        assert_eq!(app.core.settings.display.language, "es");
        assert_eq!(app.core.locale.get(Key::NavCart), "Carrito");
    }

    #[test]
    fn dark_mode_toggle_changes_theme() {
        let mut app = test_support::app();
        let _ = app.update(Message::UpdateDarkMode(false));
        assert!(!app.core.settings.display.dark_mode);
        assert_eq!(app.theme(iced::window::Id::unique()), iced::Theme::Light);
    }
}
