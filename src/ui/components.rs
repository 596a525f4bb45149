//! UI Components module - storefront-specific composite components
//!
//! Components combine widgets with application logic and are the only UI
//! layer that imports from `crate::app`.
//!
//! - **Widgets** (`crate::ui::widgets`): reusable pieces, no business logic
//! - **Components** (this module): Message mapping and state access

pub mod cart_line;
pub mod login_popup;
pub mod nav_bar;
pub mod offer_card;
pub mod offer_grid;
pub mod price_filter;
pub mod search_bar;

pub use nav_bar::{NavBarProps, Page};
