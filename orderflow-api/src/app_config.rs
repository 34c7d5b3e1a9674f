use serde::Deserialize;
use std::env;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
    pub audit: AuditConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is unset.
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    pub order_count: usize,
    pub payment_method: String,
    #[serde(default)]
    pub empty_method_every: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditSink {
    Tracing,
    JsonLines,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuditConfig {
    pub sink: AuditSink,
    /// Required for the `json_lines` sink.
    pub path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(Path::new("config"), &run_mode)
    }

    /// Layers, later wins: built-in defaults, `{dir}/{run_mode}`,
    /// `{dir}/local`, then `ORDERFLOW_*` environment variables.
    pub fn load_from(dir: &Path, run_mode: &str) -> Result<Self, config::ConfigError> {
        let run_mode_file = dir.join(run_mode);
        let local_file = dir.join("local");

        let s = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::with_name(&run_mode_file.to_string_lossy()).required(false))
            // Not checked in
            .add_source(config::File::with_name(&local_file.to_string_lossy()).required(false))
            // Eg. `ORDERFLOW_DEMO__ORDER_COUNT=10` sets `demo.order_count`
            .add_source(
                config::Environment::with_prefix("ORDERFLOW")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Defaults overlaid with a TOML document.
    pub fn from_toml(overrides: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.demo.order_count, 5);
        assert_eq!(config.demo.payment_method, "SuperCard");
        assert_eq!(config.demo.empty_method_every, 3);
        assert_eq!(config.demo.seed, None);
        assert_eq!(config.audit.sink, AuditSink::Tracing);
        assert!(config.audit.path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_toml(
            r#"
            [demo]
            order_count = 12
            seed = 42

            [audit]
            sink = "json_lines"
            path = "audit.jsonl"
            "#,
        )
        .unwrap();

        assert_eq!(config.demo.order_count, 12);
        assert_eq!(config.demo.seed, Some(42));
        assert_eq!(config.demo.payment_method, "SuperCard");
        assert_eq!(config.audit.sink, AuditSink::JsonLines);
        assert_eq!(config.audit.path.as_deref(), Some("audit.jsonl"));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        env::set_var("ORDERFLOW_DEMO__ORDER_COUNT", "10");
        let loaded = Config::load();
        env::remove_var("ORDERFLOW_DEMO__ORDER_COUNT");

        assert_eq!(loaded.unwrap().demo.order_count, 10);
    }

    #[test]
    fn test_local_file_overrides_run_mode_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("staging.toml"),
            "[demo]\npayment_method = \"Visa\"\nseed = 3\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("local.toml"),
            "[demo]\npayment_method = \"Amex\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path(), "staging").unwrap();

        assert_eq!(config.demo.payment_method, "Amex");
        assert_eq!(config.demo.seed, Some(3));
        assert_eq!(config.audit.sink, AuditSink::Tracing);
    }

    #[test]
    fn test_missing_layer_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path(), "production").unwrap();

        assert_eq!(config.demo.payment_method, "SuperCard");
        assert_eq!(config.demo.empty_method_every, 3);
    }

    #[test]
    fn test_unknown_sink_is_rejected() {
        let result = Config::from_toml("[audit]\nsink = \"kafka\"\n");
        assert!(result.is_err());
    }
}
