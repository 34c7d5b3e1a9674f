use orderflow_core::{CoreResult, Order, ShippingResult, ShippingService};
use tracing::debug;
use uuid::Uuid;

/// Ships any paid order that actually contains items.
#[derive(Debug, Clone, Default)]
pub struct StandardShippingService;

impl StandardShippingService {
    pub fn new() -> Self {
        Self
    }

    /// Format: SHIP-{timestamp}-{short order id}
    fn tracking_reference(&self, order_id: &Uuid) -> String {
        let timestamp = chrono::Utc::now().timestamp();
        let short_id = &order_id.simple().to_string()[..8];
        format!("SHIP-{}-{}", timestamp, short_id.to_uppercase())
    }
}

impl ShippingService for StandardShippingService {
    fn ship(&self, order: &Order) -> CoreResult<ShippingResult> {
        if order.items.is_empty() {
            debug!(order_id = %order.id, "Nothing to ship");
            return Ok(ShippingResult::rejected());
        }

        let tracking = self.tracking_reference(&order.id);
        debug!(
            order_id = %order.id,
            tracking = %tracking,
            items = order.items.len(),
            "Shipment booked"
        );
        Ok(ShippingResult::shipped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_order_with_items_ships() {
        let order = Order::new("Carol", vec!["SKU-1".to_string()], Decimal::ONE, "SuperCard");
        assert!(StandardShippingService::new().ship(&order).unwrap().success);
    }

    #[test]
    fn test_empty_order_is_rejected() {
        let order = Order::new("Carol", vec![], Decimal::ONE, "SuperCard");
        assert!(!StandardShippingService::new().ship(&order).unwrap().success);
    }

    #[test]
    fn test_tracking_reference_format() {
        let service = StandardShippingService::new();
        let reference = service.tracking_reference(&Uuid::new_v4());
        assert!(reference.starts_with("SHIP-"));
        assert_eq!(reference.rsplit('-').next().unwrap().len(), 8);
    }
}
