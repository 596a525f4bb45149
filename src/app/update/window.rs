// src/app/update/window.rs
//! Window and keyboard handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                match key {
                    Key::Named(Named::Escape) if self.ui.auth.is_open => {
                        return Some(Task::done(Message::ToggleLoginPopup));
                    }
                    Key::Named(Named::ArrowLeft) if modifiers.alt() => {
                        return Some(Task::done(Message::NavigateBack));
                    }
                    Key::Named(Named::ArrowRight) if modifiers.alt() => {
                        return Some(Task::done(Message::NavigateForward));
                    }
                    _ => {}
                }
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.core.window_size = *size;
                Some(Task::none())
            }

            Message::RequestClose => {
                tracing::info!("Exiting");
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
