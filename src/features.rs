//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod cart;
pub mod catalog;
pub mod session;
pub mod settings;

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, CatalogQuery, Category, Offer, SortOrder};
pub use session::{AuthForm, AuthMode, Session};
pub use settings::Settings;
