//! Application configuration
//!
//! Settings are layered: compiled defaults, then an optional `config` file
//! next to the binary, then `STUDYSCRIBE_*` environment variables.

use ai_core::InferenceConfig;
use serde::{Deserialize, Serialize};

use crate::retry::RetryConfig;
use crate::telemetry::TelemetryConfig;

/// Top-level application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Completion-service settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Retry policy for completion calls
    #[serde(default)]
    pub retry: RetryConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Settings {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., STUDYSCRIBE_INFERENCE_BASE_URL)
            .add_source(
                config::Environment::with_prefix("STUDYSCRIBE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_service_contract() {
        let settings = Settings::default();
        assert_eq!(settings.inference.default_model, "llama-3.3-70b-versatile");
        assert_eq!(settings.inference.timeout_ms, 120_000);
        assert_eq!(settings.retry.max_attempts, 3);
        assert_eq!(settings.retry.delay_ms, 2000);
    }

    #[test]
    fn settings_parse_from_toml() {
        let toml_str = r#"
            [inference]
            base_url = "http://localhost:8080"
            default_model = "test-model"

            [retry]
            max_attempts = 2

            [telemetry]
            filter = "debug"
        "#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.inference.base_url, "http://localhost:8080");
        assert_eq!(settings.inference.default_model, "test-model");
        assert_eq!(settings.retry.max_attempts, 2);
        // Unset fields keep their defaults
        assert_eq!(settings.retry.delay_ms, 2000);
        assert_eq!(settings.telemetry.filter, "debug");
    }

    #[test]
    fn settings_serialize_without_secrets() {
        let settings = Settings {
            inference: InferenceConfig::default().with_api_key("gsk-secret"),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("gsk-secret"));
    }
}
