use serde::{Deserialize, Serialize};

use crate::{CoreResult, Order};

/// Outcome of a payment attempt.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentResult {
    pub success: bool,
}

impl PaymentResult {
    pub fn succeeded() -> Self {
        Self { success: true }
    }

    pub fn declined() -> Self {
        Self { success: false }
    }
}

pub trait PaymentService: Send + Sync {
    /// Charge the order. Validating the order (e.g. a missing payment method)
    /// is the implementation's job and is reported as an error.
    fn pay(&self, order: &Order) -> CoreResult<PaymentResult>;
}
