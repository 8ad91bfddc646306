pub mod delivery;
pub mod inventory;
pub mod models;
pub mod payment;
pub mod pipeline;

pub use models::{Availability, OrderOutcome, OrderRequest, ShippingQuote};
pub use pipeline::OrderPipeline;

/// An unexpected station fault. Expected business declines are communicated
/// through return values, never through this type.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    #[error("Inventory backend failure: {0}")]
    Inventory(String),

    #[error("Payment backend failure: {0}")]
    Payment(String),

    #[error("Delivery backend failure: {0}")]
    Delivery(String),
}
