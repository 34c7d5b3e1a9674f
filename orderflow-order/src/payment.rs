use orderflow_core::{CoreError, CoreResult, Order, PaymentResult, PaymentService};
use orderflow_shared::Masked;
use rust_decimal::Decimal;
use tracing::debug;

/// Payment capability that validates the order before charging it.
///
/// There is no gateway behind it: a present payment method and a positive
/// total is treated as an approved charge.
#[derive(Debug, Clone, Default)]
pub struct CardPaymentService;

impl CardPaymentService {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentService for CardPaymentService {
    fn pay(&self, order: &Order) -> CoreResult<PaymentResult> {
        if !order.has_payment_method() {
            return Err(CoreError::ValidationError("Payment method is required".to_string()));
        }

        let result = if order.total_price > Decimal::ZERO {
            PaymentResult::succeeded()
        } else {
            PaymentResult::declined()
        };

        debug!(
            payment_method = %Masked(order.payment_method.as_str()),
            amount = %order.total_price,
            approved = result.success,
            "Card charge processed"
        );

        // Return the computed result, not a fresh default one.
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with(method: &str, total: Decimal) -> Order {
        Order::new("Bob", vec!["SKU-9".to_string()], total, method)
    }

    #[test]
    fn test_missing_payment_method_is_rejected() {
        let service = CardPaymentService::new();

        for method in ["", "  "] {
            let result = service.pay(&order_with(method, Decimal::new(500, 2)));
            assert_eq!(
                result,
                Err(CoreError::ValidationError("Payment method is required".to_string()))
            );
        }
    }

    #[test]
    fn test_positive_total_is_approved() {
        let result = CardPaymentService::new()
            .pay(&order_with("SuperCard", Decimal::new(500, 2)))
            .unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_zero_total_is_declined() {
        let result = CardPaymentService::new()
            .pay(&order_with("SuperCard", Decimal::ZERO))
            .unwrap();
        assert!(!result.success);
    }
}
