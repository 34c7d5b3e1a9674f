pub mod app_config;
pub mod runner;

pub use app_config::Config;
pub use runner::{build_controller, generate_orders, run_demo, DemoSummary};
