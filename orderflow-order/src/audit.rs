use orderflow_core::{AuditLogger, CoreError, CoreResult, Order, OrderResponse};
use orderflow_shared::{Masked, OrderAuditRecord};
use std::io::Write;
use std::sync::Mutex;
use tracing::{info, warn};

/// Snapshot of a submission for audit sinks.
pub fn audit_record(order: &Order, response: &OrderResponse) -> OrderAuditRecord {
    OrderAuditRecord {
        order_id: order.id,
        customer_name: Masked(order.customer_name.clone()),
        item_count: order.items.len(),
        total_price: order.total_price,
        success: response.success,
        payment_success: response.payment_result.map(|p| p.success),
        shipping_success: response.shipping_result.map(|s| s.success),
        recorded_at: chrono::Utc::now(),
    }
}

/// Writes audit entries as structured tracing events.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditLogger;

impl TracingAuditLogger {
    pub fn new() -> Self {
        Self
    }
}

impl AuditLogger for TracingAuditLogger {
    fn log_order(&self, order: &Order, response: &OrderResponse) -> CoreResult<()> {
        let record = audit_record(order, response);
        if record.success {
            info!(
                order_id = %record.order_id,
                customer = %record.customer_name,
                items = record.item_count,
                total = %record.total_price,
                "Order completed"
            );
        } else {
            warn!(
                order_id = %record.order_id,
                customer = %record.customer_name,
                payment_success = ?record.payment_success,
                shipping_success = ?record.shipping_success,
                "Order not completed"
            );
        }
        Ok(())
    }
}

/// Appends one JSON document per audited order to a writer.
pub struct JsonLinesAuditLogger<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesAuditLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> CoreResult<W> {
        self.writer
            .into_inner()
            .map_err(|_| CoreError::InternalError("Audit writer lock poisoned".to_string()))
    }
}

impl<W: Write + Send> AuditLogger for JsonLinesAuditLogger<W> {
    fn log_order(&self, order: &Order, response: &OrderResponse) -> CoreResult<()> {
        let line = audit_record(order, response)
            .to_json_line()
            .map_err(|e| CoreError::Audit(e.to_string()))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| CoreError::Audit("Audit writer lock poisoned".to_string()))?;
        writer
            .write_all(line.as_bytes())
            .map_err(|e| CoreError::Audit(e.to_string()))?;
        writer.flush().map_err(|e| CoreError::Audit(e.to_string()))
    }
}
