//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets must not import `crate::app::Message`; they take generic message
//! types or callbacks so any component can use them.
//!
//! - **Widgets** (this module): custom `Widget` impls and small compositions
//! - **Components** (`crate::ui::components`): app-specific UI with Message handling

pub mod range_slider;
pub mod section_header;
mod toast;

pub use range_slider::{Interval, RangeSlider};
pub use toast::{Toast, ToastStyle, view_toast};
