//! Voyago - a desktop travel storefront
//! Built with iced: browse offers, filter by price, book and pay

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod i18n;
mod ui;
mod utils;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Daemon mode: the window is opened explicitly in App::new
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
