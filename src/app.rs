//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, StoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));

        // 2. Initialize sub-states
        let core = CoreState::new(settings, locale);
        let app = Self {
            core,
            store: StoreState::default(),
            ui: UiState::new(),
        };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: state::WINDOW_SIZE,
            min_size: Some(iced::Size::new(900.0, 600.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "voyago".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Fetch the catalog
        let init_task = Task::batch([
            open_window.discard(),
            Task::perform(
                helpers::load_catalog(app.core.backend_for_session()),
                Message::CatalogLoaded,
            ),
        ]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title with the current page
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let locale = self.core.locale;
        format!(
            "{} - {}",
            locale.get(crate::i18n::Key::AppName),
            locale.get(self.ui.page.label_key())
        )
    }

    /// Subscriptions for keyboard shortcuts and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([keyboard_sub, close_request_sub, resize_sub])
    }
}
