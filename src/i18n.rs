//! Internationalization (i18n) support for Voyago
//! Supports multiple languages with easy extensibility
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - es.rs: Spanish translations

mod en;
mod es;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Parse a stored language code, defaulting to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "es" => Language::Spanish,
            _ => Language::English,
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Spanish]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Navigation
    NavHome,
    NavFlights,
    NavPackages,
    NavCars,
    NavLodging,
    NavCart,
    NavSettings,

    // Home
    HeroTitle,
    HeroSubtitle,
    HeroButton,
    FeaturedOffers,
    BrowseCategories,
    SeeAll,
    OffersAvailable,

    // Catalog
    SearchPlaceholder,
    FilterTitle,
    FilterPrice,
    FilterReset,
    SortLabel,
    SortFeatured,
    SortPriceLowHigh,
    SortPriceHighLow,
    SortRating,
    NoResults,
    ResultsCount,
    UsingSampleCatalog,
    CatalogLoadFailed,

    // Offer card
    AddToCart,
    InCart,
    LoginToBook,
    AddedToCart,

    // Cart
    CartTitle,
    CartEmpty,
    CartTotal,
    CartRemove,
    CartClear,
    Checkout,
    CheckoutPending,
    LoginToCheckout,
    CheckoutLinkCopied,
    CheckoutFailed,
    CheckoutNotConfigured,

    // Login Popup
    Login,
    LoginTitle,
    SignUpTitle,
    Email,
    Password,
    SignIn,
    SignUp,
    SwitchToSignUp,
    SwitchToSignIn,
    SignOut,
    SignedInAs,
    SignedOut,
    Welcome,
    LoginFailed,
    InvalidEmail,
    PasswordTooShort,
    ConfirmEmailSent,
    AuthNotConfigured,

    // Settings
    SettingsTitle,
    SettingsDisplay,
    SettingsDarkMode,
    SettingsLanguage,
    SettingsBackend,
    SettingsBackendUrl,
    SettingsPayment,
    SettingsPaymentEndpoint,
    SettingsCurrency,
    SettingsNotConfigured,
    SettingsConfigHint,
    SettingsSaved,
    SettingsSaveFailed,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Spanish => es::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_cover_the_same_keys() {
        let en: Vec<_> = en::translations().keys().collect();
        let es = es::translations();
        assert!(!en.is_empty());
        for key in &en {
            assert!(es.contains_key(key), "missing Spanish text for {:?}", key);
        }
        assert_eq!(en.len(), es.len());
    }

    #[test]
    fn lookup_by_locale() {
        assert_eq!(Locale::new(Language::English).get(Key::NavCart), "Cart");
        assert_eq!(Locale::new(Language::Spanish).get(Key::NavCart), "Carrito");
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
        }
        assert_eq!(Language::from_code("zz"), Language::English);
    }
}
