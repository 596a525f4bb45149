//! Pages module
//! Full-page views for the storefront

pub mod cart;
pub mod catalog;
pub mod home;
pub mod settings;

/// Scrollable ids, reset to the top on navigation
pub const HOME_SCROLL: &str = "home_scroll";
pub const CATALOG_SCROLL: &str = "catalog_scroll";
