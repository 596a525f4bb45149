//! Message update handlers - thin dispatcher delegating to submodules

mod auth;
mod cart;
mod catalog;
mod navigation;
mod settings;
mod toast;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_catalog(&message) {
            return task;
        }
        if let Some(task) = self.handle_cart(&message) {
            return task;
        }
        if let Some(task) = self.handle_auth(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_toast(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        Task::none()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app::state::{CoreState, StoreState, UiState};
    use crate::app::App;
    use crate::app::message::CatalogSource;
    use crate::features::{Catalog, Session, Settings};
    use crate::i18n::Locale;

    /// App with the sample catalog and no remote services
    pub fn app() -> App {
        let mut store = StoreState::default();
        store.set_catalog(Catalog::sample().unwrap(), CatalogSource::Sample);
        App {
            core: CoreState::new(Settings::default(), Locale::default()),
            store,
            ui: UiState::new(),
        }
    }

    pub fn signed_in(mut app: App) -> App {
        app.core.session = Some(Session {
            user_id: "u-1".to_string(),
            email: "ana@example.com".to_string(),
            access_token: "jwt".to_string(),
        });
        app
    }
}
