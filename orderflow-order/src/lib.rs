pub mod controller;
pub mod payment;
pub mod shipping;
pub mod audit;

pub use controller::{OrdersController, SubmissionStage};
pub use payment::CardPaymentService;
pub use shipping::StandardShippingService;
pub use audit::{JsonLinesAuditLogger, TracingAuditLogger};
