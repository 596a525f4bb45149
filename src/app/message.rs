//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::api::Preference;
use crate::features::{Catalog, Session, SortOrder};
use crate::i18n::Language;
use crate::ui::components::Page;

/// Where the loaded catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Loading,
    Backend,
    Sample,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Navigation ============
    Navigate(Page),
    NavigateBack,
    NavigateForward,

    // ============ Catalog ============
    /// Offers fetched; `Err` carries a readable reason
    CatalogLoaded(Result<(Catalog, CatalogSource), String>),
    SearchChanged(String),
    SortChanged(SortOrder),
    /// Full value sequence from the price slider
    PriceRangeChanged(Vec<f32>),
    PriceRangeReleased,
    ResetFilters,

    // ============ Cart ============
    AddToCart(i64),
    RemoveFromCart(i64),
    /// Set a line's quantity; zero removes it
    UpdateQuantity(i64, u32),
    ClearCart,
    Checkout,
    CheckoutCompleted(Result<Preference, String>),

    // ============ Auth ============
    ToggleLoginPopup,
    EmailChanged(String),
    PasswordChanged(String),
    ToggleAuthMode,
    SubmitAuth,
    /// `Ok(None)` means sign-up succeeded but awaits email confirmation
    AuthCompleted(Result<Option<Session>, String>),
    SignOut,

    // ============ Settings ============
    UpdateDarkMode(bool),
    UpdateLanguage(Language),
    SaveSettings,

    // ============ Toast ============
    /// Hide the toast with this id, if it is still the one shown
    HideToast(u64),

    // ============ Window ============
    KeyPressed(Key, Modifiers),
    WindowResized(iced::Size),
    RequestClose,
}
