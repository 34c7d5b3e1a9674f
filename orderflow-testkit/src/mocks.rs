//! Recording implementations of the capability traits.
//!
//! Each double answers from a configurable responder and keeps every
//! argument it was called with, so tests can assert on call counts and
//! inspect what the workflow passed in.

use orderflow_core::{
    AuditLogger, CoreError, CoreResult, Order, OrderResponse, PaymentResult, PaymentService,
    ShippingResult, ShippingService,
};
use std::sync::Mutex;

type Responder<T> = Box<dyn Fn(&Order) -> CoreResult<T> + Send + Sync>;

// ============================================================================
// Payment
// ============================================================================

pub struct RecordingPaymentService {
    respond: Responder<PaymentResult>,
    calls: Mutex<Vec<Order>>,
}

impl RecordingPaymentService {
    /// Answer every call with `respond`.
    pub fn responding_with<F>(respond: F) -> Self
    where
        F: Fn(&Order) -> CoreResult<PaymentResult> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn approving() -> Self {
        Self::responding_with(|_| Ok(PaymentResult::succeeded()))
    }

    pub fn declining() -> Self {
        Self::responding_with(|_| Ok(PaymentResult::declined()))
    }

    pub fn failing(error: CoreError) -> Self {
        Self::responding_with(move |_| Err(error.clone()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Order> {
        self.calls.lock().unwrap().clone()
    }
}

impl PaymentService for RecordingPaymentService {
    fn pay(&self, order: &Order) -> CoreResult<PaymentResult> {
        self.calls.lock().unwrap().push(order.clone());
        (self.respond)(order)
    }
}

// ============================================================================
// Shipping
// ============================================================================

pub struct RecordingShippingService {
    respond: Responder<ShippingResult>,
    calls: Mutex<Vec<Order>>,
}

impl RecordingShippingService {
    pub fn responding_with<F>(respond: F) -> Self
    where
        F: Fn(&Order) -> CoreResult<ShippingResult> + Send + Sync + 'static,
    {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn shipping() -> Self {
        Self::responding_with(|_| Ok(ShippingResult::shipped()))
    }

    pub fn rejecting() -> Self {
        Self::responding_with(|_| Ok(ShippingResult::rejected()))
    }

    pub fn failing(error: CoreError) -> Self {
        Self::responding_with(move |_| Err(error.clone()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Order> {
        self.calls.lock().unwrap().clone()
    }
}

impl ShippingService for RecordingShippingService {
    fn ship(&self, order: &Order) -> CoreResult<ShippingResult> {
        self.calls.lock().unwrap().push(order.clone());
        (self.respond)(order)
    }
}

// ============================================================================
// Audit
// ============================================================================

#[derive(Default)]
pub struct RecordingAuditLogger {
    failure: Option<CoreError>,
    entries: Mutex<Vec<(Order, OrderResponse)>>,
}

impl RecordingAuditLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the call, then fails with `error`.
    pub fn failing(error: CoreError) -> Self {
        Self {
            failure: Some(error),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn entries(&self) -> Vec<(Order, OrderResponse)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn last_response(&self) -> Option<OrderResponse> {
        self.entries.lock().unwrap().last().map(|(_, response)| *response)
    }
}

impl AuditLogger for RecordingAuditLogger {
    fn log_order(&self, order: &Order, response: &OrderResponse) -> CoreResult<()> {
        self.entries.lock().unwrap().push((order.clone(), *response));
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::OrderBuilder;

    #[test]
    fn test_payment_double_records_arguments() {
        let payment = RecordingPaymentService::approving();
        let order = OrderBuilder::new().payment_method("SuperCard").build();

        assert_eq!(payment.pay(&order), Ok(PaymentResult::succeeded()));
        assert_eq!(payment.call_count(), 1);
        assert_eq!(payment.calls()[0].id, order.id);
    }

    #[test]
    fn test_responder_sees_the_order() {
        let payment = RecordingPaymentService::responding_with(|order| {
            Ok(PaymentResult {
                success: order.payment_method == "SuperCard",
            })
        });

        let card = OrderBuilder::new().payment_method("SuperCard").build();
        let other = OrderBuilder::new().payment_method("Visa").build();

        assert!(payment.pay(&card).unwrap().success);
        assert!(!payment.pay(&other).unwrap().success);
        assert_eq!(payment.call_count(), 2);
    }

    #[test]
    fn test_failing_shipping_still_records_call() {
        let shipping =
            RecordingShippingService::failing(CoreError::Shipping("no carrier".to_string()));
        let order = OrderBuilder::new().build();

        assert!(shipping.ship(&order).is_err());
        assert_eq!(shipping.call_count(), 1);
    }

    #[test]
    fn test_audit_double_keeps_last_response() {
        let audit = RecordingAuditLogger::new();
        assert!(audit.last_response().is_none());

        audit.log_order(&OrderBuilder::new().build(), &OrderResponse::failed()).unwrap();
        assert_eq!(audit.last_response(), Some(OrderResponse::failed()));
        assert_eq!(audit.entries().len(), 1);
    }
}
