use anyhow::Context;
use orderflow_core::{AuditLogger, Order};
use orderflow_order::{
    CardPaymentService, JsonLinesAuditLogger, OrdersController, StandardShippingService,
    TracingAuditLogger,
};
use orderflow_testkit::OrderBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing::{info, warn};

use crate::app_config::{AuditConfig, AuditSink, DemoConfig};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    pub submitted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Wire a controller with the card payment, standard shipping and the
/// configured audit sink.
pub fn build_controller(audit: &AuditConfig) -> anyhow::Result<OrdersController> {
    let audit_logger: Arc<dyn AuditLogger> = match audit.sink {
        AuditSink::Tracing => Arc::new(TracingAuditLogger::new()),
        AuditSink::JsonLines => {
            let path = audit
                .path
                .as_deref()
                .context("audit.path is required for the json_lines sink")?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open audit log {}", path))?;
            info!(path = %path, "Writing audit records");
            Arc::new(JsonLinesAuditLogger::new(file))
        }
    };

    Ok(OrdersController::new(
        Arc::new(CardPaymentService::new()),
        Arc::new(StandardShippingService::new()),
        audit_logger,
    ))
}

pub fn generate_orders(demo: &DemoConfig) -> Vec<Order> {
    let mut rng = match demo.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (1..=demo.order_count)
        .map(|n| {
            let builder = OrderBuilder::new().payment_method(demo.payment_method.as_str());
            let builder = if demo.empty_method_every > 0 && n % demo.empty_method_every == 0 {
                builder.without_payment_method()
            } else {
                builder
            };
            builder.build_with(&mut rng)
        })
        .collect()
}

pub fn run_demo(controller: &OrdersController, orders: &[Order]) -> DemoSummary {
    let mut summary = DemoSummary::default();

    for order in orders {
        let response = controller.submit(order);
        summary.submitted += 1;

        if response.success {
            summary.succeeded += 1;
            info!(
                order_id = %order.id,
                items = order.items.len(),
                total = %order.total_price,
                "Order submitted"
            );
        } else {
            summary.failed += 1;
            warn!(
                order_id = %order.id,
                paid = ?response.payment_result.map(|p| p.success),
                "Order failed"
            );
        }
    }

    summary
}
