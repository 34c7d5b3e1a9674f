use anyhow::Context;
use orderflow_api::{build_controller, generate_orders, run_demo, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        orders = config.demo.order_count,
        sink = ?config.audit.sink,
        "Starting order submission demo"
    );

    let controller = build_controller(&config.audit).map_err(|e| {
        tracing::error!(error = %e, "Failed to set up capabilities");
        e
    })?;

    let orders = generate_orders(&config.demo);
    let summary = run_demo(&controller, &orders);

    println!(
        "submitted: {}, succeeded: {}, failed: {}",
        summary.submitted, summary.succeeded, summary.failed
    );
    Ok(())
}
