use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{AdvisoryError, AdvisoryProvider};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Advisor backed by the Gemini `generateContent` endpoint.
pub struct GeminiAdvisor {
    api_base: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiAdvisor {
    pub fn new(api_key: String, model: String) -> Result<Self, AdvisoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| AdvisoryError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_base: GEMINI_API_BASE.to_string(),
            api_key,
            model,
            client,
        })
    }

    #[cfg(test)]
    fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.to_string();
        self
    }

    /// The key travels in the `x-goog-api-key` header, never in the URL that reqwest errors echo.
    fn api_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[async_trait]
impl AdvisoryProvider for GeminiAdvisor {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending request to Gemini API");

        let response = self
            .client
            .post(self.api_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AdvisoryError::Network(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::Api(format!("Gemini API error {}: {}", status, error_text)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AdvisoryError::Api(format!("Failed to parse response: {}", e.without_url())))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or(AdvisoryError::EmptyResponse)
    }
}
