pub mod models;
pub mod pii;

pub use models::events::OrderAuditRecord;
pub use pii::Masked;
