// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use super::App;
use super::message::{CatalogSource, Message};
use crate::i18n::Key;
use crate::ui::components::{self, NavBarProps, Page};
use crate::ui::pages::{self, cart::CartPageProps, catalog::CatalogPageProps};
use crate::ui::{theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;
        let is_logged_in = self.core.is_logged_in();
        let content_width = self.core.window_size.width;

        let nav_bar = components::nav_bar::view(NavBarProps {
            active: self.ui.page,
            locale,
            cart_count: self.store.cart.item_count(),
            user_email: self.core.session.as_ref().map(|s| s.email.as_str()),
            can_go_back: self.ui.history.can_go_back(),
            can_go_forward: self.ui.history.can_go_forward(),
        });

        let page: Element<'_, Message> = if self.store.source == CatalogSource::Loading {
            loading(locale.get(Key::AppName))
        } else {
            match self.ui.page {
                Page::Home => pages::home::view(
                    &self.store.catalog,
                    &self.store.cart,
                    is_logged_in,
                    locale,
                    content_width - 48.0,
                ),
                Page::Catalog(category) => pages::catalog::view(CatalogPageProps {
                    category,
                    query: self.store.query(category),
                    catalog: &self.store.catalog,
                    cart: &self.store.cart,
                    is_logged_in,
                    using_sample: self.store.source == CatalogSource::Sample,
                    locale,
                    content_width,
                }),
                Page::Cart => pages::cart::view(CartPageProps {
                    cart: &self.store.cart,
                    is_logged_in,
                    checkout_pending: self.ui.checkout_pending,
                    checkout_url: self.ui.checkout_url.as_deref(),
                    currency: &self.core.settings.payment.currency,
                    locale,
                }),
                Page::Settings => pages::settings::view(&self.core.settings, locale),
            }
        };

        let base = column![nav_bar, page];

        let toast_layer: Element<'_, Message> = match &self.ui.toast {
            Some(toast) => container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .padding(Padding::new(24.0))
                .into(),
            None => Space::new().width(0).height(0).into(),
        };

        let login_popup =
            components::login_popup::view(&self.ui.auth, self.core.session.as_ref(), locale);

        container(stack![base, login_popup, toast_layer])
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}

fn loading<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(format!("{}…", label)).size(16).style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    }))
    .width(Fill)
    .height(Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(theme::main_content)
    .into()
}
