use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use prep_insight::config::AppConfig;
use prep_insight::llm::{GeminiClient, LanguageModel, LlmError};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The language model as resolved from configuration at startup.
///
/// When no API key is configured the service still runs: every generation
/// attempt reports `Unavailable` and the analysis pipeline answers with the
/// deterministic fallback report.
pub(crate) enum ConfiguredModel {
    Gemini(GeminiClient),
    Disabled,
}

#[async_trait]
impl LanguageModel for ConfiguredModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        match self {
            Self::Gemini(client) => client.generate(prompt).await,
            Self::Disabled => Err(LlmError::Unavailable(
                "GEMINI_API_KEY is not set".to_string(),
            )),
        }
    }
}

pub(crate) fn build_model(config: &AppConfig) -> ConfiguredModel {
    if config.llm.api_key.is_none() {
        warn!("GEMINI_API_KEY not set; analysis requests will use the fallback report");
        return ConfiguredModel::Disabled;
    }

    match GeminiClient::new(&config.llm) {
        Ok(client) => {
            info!(model = %config.llm.model, "language model client ready");
            ConfiguredModel::Gemini(client)
        }
        Err(err) => {
            warn!(error = %err, "language model client unavailable; using fallback reports");
            ConfiguredModel::Disabled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_insight::config::{LlmConfig, ServerConfig, TelemetryConfig};

    fn config_with_key(api_key: Option<&str>) -> AppConfig {
        AppConfig {
            environment: prep_insight::config::AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            llm: LlmConfig {
                api_key: api_key.map(str::to_string),
                model: "gemini-2.0-flash".to_string(),
                timeout_secs: 5,
            },
        }
    }

    #[tokio::test]
    async fn missing_key_builds_a_disabled_model() {
        let model = build_model(&config_with_key(None));
        assert!(matches!(model, ConfiguredModel::Disabled));
        let err = model.generate("prompt").await.expect_err("disabled model");
        assert!(matches!(err, LlmError::Unavailable(_)));
    }

    #[test]
    fn present_key_builds_a_gemini_client() {
        let model = build_model(&config_with_key(Some("secret")));
        assert!(matches!(model, ConfiguredModel::Gemini(_)));
    }
}
