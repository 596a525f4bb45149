//! Cart and checkout handlers

use iced::Task;

use crate::app::helpers::{self, CheckoutOrder};
use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Key;
use crate::ui::widgets::ToastStyle;

impl App {
    /// Open the login popup with an explanation of why
    fn require_login(&mut self, reason: Key) -> Task<Message> {
        self.ui.auth.is_open = true;
        let text = self.core.locale.get(reason);
        self.notify(text, ToastStyle::Info)
    }

    pub fn handle_cart(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AddToCart(offer_id) => {
                if !self.core.is_logged_in() {
                    return Some(self.require_login(Key::LoginToBook));
                }
                let Some(offer) = self.store.catalog.get(*offer_id) else {
                    tracing::warn!("Offer {} is not in the catalog", offer_id);
                    return Some(Task::none());
                };
                self.store.cart.add(offer);
                tracing::debug!("Added offer {} to cart", offer_id);
                let text = format!(
                    "{}: {}",
                    self.core.locale.get(Key::AddedToCart),
                    offer.title
                );
                Some(self.notify(text, ToastStyle::Success))
            }

            Message::RemoveFromCart(offer_id) => {
                self.store.cart.remove(*offer_id);
                Some(Task::none())
            }

            Message::UpdateQuantity(offer_id, quantity) => {
                self.store.cart.update_quantity(*offer_id, *quantity);
                Some(Task::none())
            }

            Message::ClearCart => {
                self.store.cart.clear();
                Some(Task::none())
            }

            Message::Checkout => Some(self.start_checkout()),

            Message::CheckoutCompleted(Ok(preference)) => {
                self.ui.checkout_pending = false;
                self.store.cart.clear();
                let url = preference.init_point.clone();
                tracing::info!("Checkout ready: {}", url);
                self.ui.checkout_url = Some(url.clone());
                let text = self.core.locale.get(Key::CheckoutLinkCopied);
                let toast = self.notify(text, ToastStyle::Success);
                Some(Task::batch([iced::clipboard::write(url), toast]))
            }

            Message::CheckoutCompleted(Err(e)) => {
                self.ui.checkout_pending = false;
                tracing::error!("Checkout failed: {}", e);
                let text = format!("{}: {}", self.core.locale.get(Key::CheckoutFailed), e);
                Some(self.notify(text, ToastStyle::Error))
            }

            _ => None,
        }
    }

    fn start_checkout(&mut self) -> Task<Message> {
        if self.ui.checkout_pending || self.store.cart.is_empty() {
            return Task::none();
        }
        let Some(session) = self.core.session.clone() else {
            return self.require_login(Key::LoginToCheckout);
        };
        let Some(payment) = self.core.payment.clone() else {
            let text = self.core.locale.get(Key::CheckoutNotConfigured);
            return self.notify(text, ToastStyle::Error);
        };

        let order = CheckoutOrder {
            items: self.store.cart.to_preference_items(),
            total: self.store.cart.total(),
            session,
            settings: self.core.settings.payment.clone(),
        };
        self.ui.checkout_pending = true;
        self.ui.checkout_url = None;

        Task::perform(
            helpers::checkout(payment, self.core.backend_for_session(), order),
            Message::CheckoutCompleted,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::api::Preference;
    use crate::app::Message;
    use crate::app::update::test_support;

    fn first_offer_id(app: &crate::app::App) -> i64 {
        app.store.catalog.offers()[0].id
    }

    #[test]
    fn guests_are_sent_to_login() {
        let mut app = test_support::app();
        let id = first_offer_id(&app);

        let _ = app.update(Message::AddToCart(id));
        assert!(app.store.cart.is_empty());
        assert!(app.ui.auth.is_open);
    }

    #[test]
    fn signed_in_user_adds_and_adjusts() {
        let mut app = test_support::signed_in(test_support::app());
        let id = first_offer_id(&app);

        let _ = app.update(Message::AddToCart(id));
        let _ = app.update(Message::AddToCart(id));
        assert_eq!(app.store.cart.item_count(), 2);

        let _ = app.update(Message::UpdateQuantity(id, 5));
        assert_eq!(app.store.cart.item_count(), 5);

        let _ = app.update(Message::UpdateQuantity(id, 0));
        assert!(app.store.cart.is_empty());
    }

    #[test]
    fn unknown_offer_is_ignored() {
        let mut app = test_support::signed_in(test_support::app());
        let _ = app.update(Message::AddToCart(-42));
        assert!(app.store.cart.is_empty());
    }

    #[test]
    fn checkout_without_payment_service_keeps_cart() {
        let mut app = test_support::signed_in(test_support::app());
        let id = first_offer_id(&app);
        let _ = app.update(Message::AddToCart(id));

        let _ = app.update(Message::Checkout);
        assert!(!app.ui.checkout_pending);
        assert!(!app.store.cart.is_empty());
    }

    #[test]
    fn completed_checkout_clears_cart_and_keeps_link() {
        let mut app = test_support::signed_in(test_support::app());
        let id = first_offer_id(&app);
        let _ = app.update(Message::AddToCart(id));
        app.ui.checkout_pending = true;

        let _ = app.update(Message::CheckoutCompleted(Ok(Preference {
            id: "pref-1".to_string(),
            init_point: "https://pay.example/pref-1".to_string(),
            sandbox_init_point: None,
        })));

        assert!(!app.ui.checkout_pending);
        assert!(app.store.cart.is_empty());
        assert_eq!(
            app.ui.checkout_url.as_deref(),
            Some("https://pay.example/pref-1")
        );
    }

    #[test]
    fn failed_checkout_keeps_cart() {
        let mut app = test_support::signed_in(test_support::app());
        let id = first_offer_id(&app);
        let _ = app.update(Message::AddToCart(id));
        app.ui.checkout_pending = true;

        let _ = app.update(Message::CheckoutCompleted(Err("declined".to_string())));
        assert!(!app.ui.checkout_pending);
        assert!(!app.store.cart.is_empty());
    }
}
