//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Voyago");

    // Navigation
    m.insert(Key::NavHome, "Home");
    m.insert(Key::NavFlights, "Flights");
    m.insert(Key::NavPackages, "Packages");
    m.insert(Key::NavCars, "Cars");
    m.insert(Key::NavLodging, "Lodging");
    m.insert(Key::NavCart, "Cart");
    m.insert(Key::NavSettings, "Settings");

    // Home
    m.insert(Key::HeroTitle, "Your next trip starts here");
    m.insert(
        Key::HeroSubtitle,
        "Flights, packages, car rentals and places to stay in one place",
    );
    m.insert(Key::HeroButton, "Explore packages");
    m.insert(Key::FeaturedOffers, "Featured offers");
    m.insert(Key::BrowseCategories, "Browse by category");
    m.insert(Key::SeeAll, "See All");
    m.insert(Key::OffersAvailable, "offers");

    // Catalog
    m.insert(Key::SearchPlaceholder, "Search destinations or offers...");
    m.insert(Key::FilterTitle, "Filters");
    m.insert(Key::FilterPrice, "Price range");
    m.insert(Key::FilterReset, "Reset");
    m.insert(Key::SortLabel, "Sort by");
    m.insert(Key::SortFeatured, "Featured");
    m.insert(Key::SortPriceLowHigh, "Price: low to high");
    m.insert(Key::SortPriceHighLow, "Price: high to low");
    m.insert(Key::SortRating, "Best rated");
    m.insert(Key::NoResults, "No offers match your filters");
    m.insert(Key::ResultsCount, "offers found");
    m.insert(
        Key::UsingSampleCatalog,
        "Backend not configured, showing sample offers",
    );
    m.insert(Key::CatalogLoadFailed, "Could not load offers");

    // Offer card
    m.insert(Key::AddToCart, "Add to cart");
    m.insert(Key::InCart, "In cart");
    m.insert(Key::LoginToBook, "Log in to book");
    m.insert(Key::AddedToCart, "Added to cart");

    // Cart
    m.insert(Key::CartTitle, "Your cart");
    m.insert(Key::CartEmpty, "Your cart is empty");
    m.insert(Key::CartTotal, "Total");
    m.insert(Key::CartRemove, "Remove");
    m.insert(Key::CartClear, "Clear cart");
    m.insert(Key::Checkout, "Checkout");
    m.insert(Key::CheckoutPending, "Creating payment...");
    m.insert(Key::LoginToCheckout, "Log in to checkout");
    m.insert(
        Key::CheckoutLinkCopied,
        "Payment link copied to clipboard",
    );
    m.insert(Key::CheckoutFailed, "Checkout failed");
    m.insert(
        Key::CheckoutNotConfigured,
        "Payments are not configured",
    );

    // Login Popup
    m.insert(Key::Login, "Log in");
    m.insert(Key::LoginTitle, "Welcome back");
    m.insert(Key::SignUpTitle, "Create your account");
    m.insert(Key::Email, "Email");
    m.insert(Key::Password, "Password");
    m.insert(Key::SignIn, "Sign in");
    m.insert(Key::SignUp, "Sign up");
    m.insert(Key::SwitchToSignUp, "No account yet? Sign up");
    m.insert(Key::SwitchToSignIn, "Already registered? Sign in");
    m.insert(Key::SignOut, "Sign out");
    m.insert(Key::SignedInAs, "Signed in as");
    m.insert(Key::SignedOut, "Signed out");
    m.insert(Key::Welcome, "Welcome");
    m.insert(Key::LoginFailed, "Login failed");
    m.insert(Key::InvalidEmail, "Enter a valid email address");
    m.insert(
        Key::PasswordTooShort,
        "Password must be at least 6 characters",
    );
    m.insert(
        Key::ConfirmEmailSent,
        "Check your inbox to confirm the account",
    );
    m.insert(
        Key::AuthNotConfigured,
        "Login is unavailable until the backend is configured",
    );

    // Settings
    m.insert(Key::SettingsTitle, "Settings");
    m.insert(Key::SettingsDisplay, "Display");
    m.insert(Key::SettingsDarkMode, "Dark mode");
    m.insert(Key::SettingsLanguage, "Language");
    m.insert(Key::SettingsBackend, "Backend");
    m.insert(Key::SettingsBackendUrl, "Project URL");
    m.insert(Key::SettingsPayment, "Payments");
    m.insert(Key::SettingsPaymentEndpoint, "Payment API");
    m.insert(Key::SettingsCurrency, "Currency");
    m.insert(Key::SettingsNotConfigured, "Not configured");
    m.insert(
        Key::SettingsConfigHint,
        "Service credentials are read from the settings file:",
    );
    m.insert(Key::SettingsSaved, "Settings saved");
    m.insert(Key::SettingsSaveFailed, "Could not save settings");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
