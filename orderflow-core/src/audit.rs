use crate::{CoreResult, Order, OrderResponse};

pub trait AuditLogger: Send + Sync {
    /// Record the outcome of a submission. Has no effect on the response.
    fn log_order(&self, order: &Order, response: &OrderResponse) -> CoreResult<()>;
}
