use orderflow_core::{
    AuditLogger, CoreResult, Order, OrderResponse, PaymentService, ShippingService,
};
use std::sync::Arc;
use tracing::debug;

/// Stages a single submission passes through. Any capability error jumps
/// straight to `Done` with a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    Start,
    PaymentAttempted,
    ShippingSkipped,
    ShippingAttempted,
    Audited,
    Done,
}

/// Runs an order through payment, conditional shipping and audit.
pub struct OrdersController {
    payment: Arc<dyn PaymentService>,
    shipping: Arc<dyn ShippingService>,
    audit: Arc<dyn AuditLogger>,
}

impl OrdersController {
    pub fn new(
        payment: Arc<dyn PaymentService>,
        shipping: Arc<dyn ShippingService>,
        audit: Arc<dyn AuditLogger>,
    ) -> Self {
        Self { payment, shipping, audit }
    }

    /// Submit an order. Never fails: a capability error yields
    /// `OrderResponse::failed()` and the error itself is dropped.
    pub fn submit(&self, order: &Order) -> OrderResponse {
        let span = tracing::debug_span!("submit_order", order_id = %order.id);
        let _enter = span.enter();

        let response = self.process(order).unwrap_or_else(|_| OrderResponse::failed());

        debug!(stage = ?SubmissionStage::Done, success = response.success, "Submission finished");
        response
    }

    fn process(&self, order: &Order) -> CoreResult<OrderResponse> {
        debug!(stage = ?SubmissionStage::Start, items = order.items.len(), "Submission started");

        let payment = self.payment.pay(order)?;
        debug!(stage = ?SubmissionStage::PaymentAttempted, paid = payment.success);

        let shipping = if payment.success {
            let shipping = self.shipping.ship(order)?;
            debug!(stage = ?SubmissionStage::ShippingAttempted, shipped = shipping.success);
            Some(shipping)
        } else {
            debug!(stage = ?SubmissionStage::ShippingSkipped);
            None
        };

        let response = OrderResponse::from_results(payment, shipping);

        self.audit.log_order(order, &response)?;
        debug!(stage = ?SubmissionStage::Audited);

        Ok(response)
    }
}
