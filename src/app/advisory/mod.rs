use std::sync::Arc;

/// Returned whenever the provider cannot produce advice.
pub const ADVICE_FALLBACK: &str =
    "Failed to generate compliance insights. Please make sure the API key is valid.";

/// Text generation backend for compliance advice. Swappable per environment.
#[async_trait::async_trait]
pub trait AdvisoryProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Empty response")]
    EmptyResponse,
}

pub use gemini::GeminiAdvisor;
pub use offline::OfflineAdvisor;

mod gemini;
mod offline;

/// Prompt asking for three audit-readiness recommendations for a QA lead.
pub fn compliance_prompt(risk_data: &serde_json::Value) -> String {
    format!(
        "Based on the following pharmaceutical compliance risk data: {}, give a quality \
         assurance lead 3 concise, actionable audit-readiness recommendations. Use professional, \
         industry-standard language.",
        risk_data
    )
}

/// Ask the provider for advice. Never fails: errors are logged and replaced by [`ADVICE_FALLBACK`].
pub async fn compliance_advice(provider: &dyn AdvisoryProvider, risk_data: &serde_json::Value) -> String {
    match provider.generate(&compliance_prompt(risk_data)).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            tracing::warn!("compliance advice came back empty");
            ADVICE_FALLBACK.to_string()
        }
        Err(err) => {
            tracing::warn!(%err, "compliance advice failed");
            ADVICE_FALLBACK.to_string()
        }
    }
}

/// Build the advisory provider from config.
pub fn from_config(config: &crate::app::config::Config) -> Result<Arc<dyn AdvisoryProvider>, AdvisoryError> {
    match config.advisory_adapter.as_str() {
        "offline" => Ok(Arc::new(OfflineAdvisor)),
        "gemini" => {
            let api_key = config
                .gemini_api_key
                .clone()
                .ok_or_else(|| AdvisoryError::Config("GEMINI_API_KEY is required for gemini adapter".to_string()))?;

            Ok(Arc::new(GeminiAdvisor::new(api_key, config.advisory_model.clone())?))
        }
        _ => Err(AdvisoryError::Config(format!(
            "Unknown ADVISORY_ADAPTER: {}",
            config.advisory_adapter
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    struct Failing;

    #[async_trait::async_trait]
    impl AdvisoryProvider for Failing {
        async fn generate(&self, _prompt: &str) -> Result<String, AdvisoryError> {
            Err(AdvisoryError::Network("connection refused".to_string()))
        }
    }

    struct Echo;

    #[async_trait::async_trait]
    impl AdvisoryProvider for Echo {
        async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn failure_yields_fallback() {
        let advice = compliance_advice(&Failing, &serde_json::json!({"deviations": 3})).await;
        assert_eq!(advice, ADVICE_FALLBACK);
    }

    #[tokio::test]
    async fn prompt_embeds_risk_data() {
        let advice = compliance_advice(&Echo, &serde_json::json!({"overdue": 12})).await;
        assert!(advice.contains(r#"{"overdue":12}"#));
        assert!(advice.contains("3 concise"));
    }

    #[test]
    fn gemini_adapter_requires_key() {
        let mut config = Config::for_tests();
        config.advisory_adapter = "gemini".to_string();
        config.gemini_api_key = None;
        assert!(matches!(from_config(&config), Err(AdvisoryError::Config(_))));

        config.advisory_adapter = "carrier-pigeon".to_string();
        assert!(from_config(&config).is_err());
    }
}
