use serde::{Deserialize, Serialize};

use crate::{CoreResult, Order};

/// Outcome of a shipping attempt.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingResult {
    pub success: bool,
}

impl ShippingResult {
    pub fn shipped() -> Self {
        Self { success: true }
    }

    pub fn rejected() -> Self {
        Self { success: false }
    }
}

pub trait ShippingService: Send + Sync {
    /// Dispatch a paid order.
    fn ship(&self, order: &Order) -> CoreResult<ShippingResult>;
}
