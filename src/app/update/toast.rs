//! Toast message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::ToastStyle;

impl App {
    /// Show a toast and schedule its removal
    pub(super) fn notify(&mut self, message: impl Into<String>, style: ToastStyle) -> Task<Message> {
        let id = self.ui.show_toast(message, style);
        let secs = style.duration_secs();
        Task::perform(
            async move {
                tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
            },
            move |_| Message::HideToast(id),
        )
    }

    pub fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HideToast(id) => {
                self.ui.hide_toast(*id);
                Some(Task::none())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::test_support;

    #[test]
    fn notify_shows_toast_until_its_hide_arrives() {
        let mut app = test_support::app();
        let _ = app.notify("Added to cart", ToastStyle::Success);
        let id = app.ui.toast.as_ref().map(|t| t.id).unwrap();

        assert!(app.handle_toast(&Message::HideToast(id)).is_some());
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn hide_for_replaced_toast_is_ignored() {
        let mut app = test_support::app();
        let _ = app.notify("first", ToastStyle::Info);
        let first = app.ui.toast.as_ref().map(|t| t.id).unwrap();
        let _ = app.notify("second", ToastStyle::Error);

        let _ = app.handle_toast(&Message::HideToast(first));
        assert_eq!(
            app.ui.toast.as_ref().map(|t| t.message.as_str()),
            Some("second")
        );
    }

    #[test]
    fn other_messages_fall_through() {
        let mut app = test_support::app();
        assert!(app.handle_toast(&Message::Noop).is_none());
    }
}
