//! Spanish translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Voyago");

    // Navigation
    m.insert(Key::NavHome, "Inicio");
    m.insert(Key::NavFlights, "Vuelos");
    m.insert(Key::NavPackages, "Paquetes");
    m.insert(Key::NavCars, "Autos");
    m.insert(Key::NavLodging, "Alojamientos");
    m.insert(Key::NavCart, "Carrito");
    m.insert(Key::NavSettings, "Ajustes");

    // Home
    m.insert(Key::HeroTitle, "Tu próximo viaje empieza acá");
    m.insert(
        Key::HeroSubtitle,
        "Vuelos, paquetes, alquiler de autos y alojamientos en un solo lugar",
    );
    m.insert(Key::HeroButton, "Ver paquetes");
    m.insert(Key::FeaturedOffers, "Ofertas destacadas");
    m.insert(Key::BrowseCategories, "Explorá por categoría");
    m.insert(Key::SeeAll, "Ver todo");
    m.insert(Key::OffersAvailable, "ofertas");

    // Catalog
    m.insert(Key::SearchPlaceholder, "Buscá destinos u ofertas...");
    m.insert(Key::FilterTitle, "Filtros");
    m.insert(Key::FilterPrice, "Rango de precio");
    m.insert(Key::FilterReset, "Restablecer");
    m.insert(Key::SortLabel, "Ordenar por");
    m.insert(Key::SortFeatured, "Destacados");
    m.insert(Key::SortPriceLowHigh, "Precio: menor a mayor");
    m.insert(Key::SortPriceHighLow, "Precio: mayor a menor");
    m.insert(Key::SortRating, "Mejor puntuados");
    m.insert(Key::NoResults, "Ninguna oferta coincide con tus filtros");
    m.insert(Key::ResultsCount, "ofertas encontradas");
    m.insert(
        Key::UsingSampleCatalog,
        "Backend sin configurar, mostrando ofertas de ejemplo",
    );
    m.insert(Key::CatalogLoadFailed, "No se pudieron cargar las ofertas");

    // Offer card
    m.insert(Key::AddToCart, "Agregar al carrito");
    m.insert(Key::InCart, "En el carrito");
    m.insert(Key::LoginToBook, "Ingresá para reservar");
    m.insert(Key::AddedToCart, "Agregado al carrito");

    // Cart
    m.insert(Key::CartTitle, "Tu carrito");
    m.insert(Key::CartEmpty, "Tu carrito está vacío");
    m.insert(Key::CartTotal, "Total");
    m.insert(Key::CartRemove, "Quitar");
    m.insert(Key::CartClear, "Vaciar carrito");
    m.insert(Key::Checkout, "Pagar");
    m.insert(Key::CheckoutPending, "Creando el pago...");
    m.insert(Key::LoginToCheckout, "Ingresá para pagar");
    m.insert(
        Key::CheckoutLinkCopied,
        "Enlace de pago copiado al portapapeles",
    );
    m.insert(Key::CheckoutFailed, "No se pudo completar el pago");
    m.insert(Key::CheckoutNotConfigured, "Los pagos no están configurados");

    // Login Popup
    m.insert(Key::Login, "Ingresar");
    m.insert(Key::LoginTitle, "Hola de nuevo");
    m.insert(Key::SignUpTitle, "Creá tu cuenta");
    m.insert(Key::Email, "Correo electrónico");
    m.insert(Key::Password, "Contraseña");
    m.insert(Key::SignIn, "Ingresar");
    m.insert(Key::SignUp, "Registrarse");
    m.insert(Key::SwitchToSignUp, "¿No tenés cuenta? Registrate");
    m.insert(Key::SwitchToSignIn, "¿Ya tenés cuenta? Ingresá");
    m.insert(Key::SignOut, "Cerrar sesión");
    m.insert(Key::SignedInAs, "Sesión iniciada como");
    m.insert(Key::SignedOut, "Sesión cerrada");
    m.insert(Key::Welcome, "Bienvenido");
    m.insert(Key::LoginFailed, "No se pudo iniciar sesión");
    m.insert(Key::InvalidEmail, "Ingresá un correo válido");
    m.insert(
        Key::PasswordTooShort,
        "La contraseña debe tener al menos 6 caracteres",
    );
    m.insert(
        Key::ConfirmEmailSent,
        "Revisá tu correo para confirmar la cuenta",
    );
    m.insert(
        Key::AuthNotConfigured,
        "El ingreso no está disponible hasta configurar el backend",
    );

    // Settings
    m.insert(Key::SettingsTitle, "Ajustes");
    m.insert(Key::SettingsDisplay, "Pantalla");
    m.insert(Key::SettingsDarkMode, "Modo oscuro");
    m.insert(Key::SettingsLanguage, "Idioma");
    m.insert(Key::SettingsBackend, "Backend");
    m.insert(Key::SettingsBackendUrl, "URL del proyecto");
    m.insert(Key::SettingsPayment, "Pagos");
    m.insert(Key::SettingsPaymentEndpoint, "API de pagos");
    m.insert(Key::SettingsCurrency, "Moneda");
    m.insert(Key::SettingsNotConfigured, "Sin configurar");
    m.insert(
        Key::SettingsConfigHint,
        "Las credenciales de los servicios se leen del archivo de ajustes:",
    );
    m.insert(Key::SettingsSaved, "Ajustes guardados");
    m.insert(Key::SettingsSaveFailed, "No se pudieron guardar los ajustes");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
