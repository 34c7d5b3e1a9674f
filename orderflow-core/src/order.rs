use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PaymentResult, ShippingResult};

/// A purchase request, built by the caller before submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub items: Vec<String>,
    pub total_price: Decimal,
    /// May be empty; rejecting that is up to the payment capability.
    pub payment_method: String,
}

impl Order {
    pub fn new(
        customer_name: impl Into<String>,
        items: Vec<String>,
        total_price: Decimal,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            items,
            total_price,
            payment_method: payment_method.into(),
        }
    }

    pub fn has_payment_method(&self) -> bool {
        !self.payment_method.trim().is_empty()
    }
}

/// Result of one order submission.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResponse {
    pub success: bool,
    pub payment_result: Option<PaymentResult>,
    /// Present only when payment succeeded.
    pub shipping_result: Option<ShippingResult>,
}

impl OrderResponse {
    /// Build a response from the capability results, deriving overall success.
    pub fn from_results(payment: PaymentResult, shipping: Option<ShippingResult>) -> Self {
        let success = payment.success && shipping.map_or(false, |s| s.success);
        Self {
            success,
            payment_result: Some(payment),
            shipping_result: shipping,
        }
    }

    /// The response reported when any capability errored.
    pub fn failed() -> Self {
        Self {
            success: false,
            payment_result: None,
            shipping_result: None,
        }
    }
}
