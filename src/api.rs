//! Remote service clients
//!
//! Hosted backend (auth + tables) and the payment preference service.

mod backend;
pub mod model;
mod payment;

pub use backend::BackendClient;
pub use model::{ORDERS_TABLE, OrderRecord, Preference, PreferenceItem};
pub use payment::{PaymentClient, build_request};
