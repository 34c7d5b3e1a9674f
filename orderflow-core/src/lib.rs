pub mod order;
pub mod payment;
pub mod shipping;
pub mod audit;

pub use order::{Order, OrderResponse};
pub use payment::{PaymentResult, PaymentService};
pub use shipping::{ShippingResult, ShippingService};
pub use audit::AuditLogger;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Payment failed: {0}")]
    Payment(String),
    #[error("Shipping failed: {0}")]
    Shipping(String),
    #[error("Audit failed: {0}")]
    Audit(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
