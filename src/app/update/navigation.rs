// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::components::Page;
use crate::ui::pages::{CATALOG_SCROLL, HOME_SCROLL};

impl App {
    /// Switch page without touching history (used by back/forward)
    fn show_page(&mut self, page: Page) -> Task<Message> {
        self.ui.page = page;
        if page != Page::Cart {
            self.ui.checkout_url = None;
        }

        let scroll_id = match page {
            Page::Home => HOME_SCROLL,
            Page::Catalog(_) => CATALOG_SCROLL,
            Page::Cart | Page::Settings => return Task::none(),
        };
        iced::widget::operation::snap_to(
            iced::widget::Id::new(scroll_id),
            iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
        )
    }

    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::Navigate(page) => {
                self.ui.history.push(*page);
                Some(self.show_page(*page))
            }

            Message::NavigateBack => Some(match self.ui.history.go_back() {
                Some(page) => self.show_page(page),
                None => Task::none(),
            }),

            Message::NavigateForward => Some(match self.ui.history.go_forward() {
                Some(page) => self.show_page(page),
                None => Task::none(),
            }),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::Message;
    use crate::app::update::test_support;
    use crate::features::Category;
    use crate::ui::components::Page;

    #[test]
    fn navigate_then_go_back() {
        let mut app = test_support::app();
        let _ = app.update(Message::Navigate(Page::Catalog(Category::Lodging)));
        assert_eq!(app.ui.page, Page::Catalog(Category::Lodging));

        let _ = app.update(Message::NavigateBack);
        assert_eq!(app.ui.page, Page::Home);

        let _ = app.update(Message::NavigateForward);
        assert_eq!(app.ui.page, Page::Catalog(Category::Lodging));
    }

    #[test]
    fn leaving_cart_forgets_checkout_link() {
        let mut app = test_support::app();
        app.ui.page = Page::Cart;
        app.ui.checkout_url = Some("https://pay.example/abc".to_string());

        let _ = app.update(Message::Navigate(Page::Home));
        assert!(app.ui.checkout_url.is_none());
    }
}
