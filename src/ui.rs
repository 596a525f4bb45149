//! UI module for the travel storefront
//! Light and dark themes with an ocean-teal accent
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): custom widgets and reusable pieces, no business logic
//! - **Components** (`components`): storefront UI bound to `crate::app::Message`
//! - **Pages** (`pages`): full-page compositions of components

pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
