//! Test doubles and fixtures for the orderflow workspace.
//!
//! - **Fixtures**: [`OrderBuilder`] produces valid orders with arbitrary
//!   values, overridable field by field.
//! - **Mocks** (feature `mocks`, on by default): recording implementations of
//!   the payment, shipping and audit capabilities that count calls and keep
//!   the arguments they saw. Binaries that only need fixtures depend on this
//!   crate with `default-features = false`.
//!
//! ```rust,ignore
//! use orderflow_testkit::{OrderBuilder, RecordingPaymentService};
//!
//! let payment = Arc::new(RecordingPaymentService::approving());
//! let order = OrderBuilder::new().payment_method("SuperCard").build();
//! // ... wire `payment.clone()` into a controller, submit `order` ...
//! assert_eq!(payment.call_count(), 1);
//! ```

pub mod fixtures;
#[cfg(feature = "mocks")]
pub mod mocks;

pub use fixtures::{test_order, unique_item_id, OrderBuilder};
#[cfg(feature = "mocks")]
pub use mocks::{RecordingAuditLogger, RecordingPaymentService, RecordingShippingService};
