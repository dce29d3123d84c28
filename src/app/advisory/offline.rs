use async_trait::async_trait;

use super::{AdvisoryError, AdvisoryProvider};

/// Offline advisor for local development and tests.
/// Logs the prompt and returns generic audit-readiness advice.
#[derive(Debug)]
pub struct OfflineAdvisor;

#[async_trait]
impl AdvisoryProvider for OfflineAdvisor {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError> {
        tracing::info!(prompt_len = prompt.len(), "Compliance advice generated (offline)");
        Ok([
            "1. Close overdue GMP training records before the next audit window and keep signed evidence on file.",
            "2. Prioritise retraining for high-risk positions where deviation counts are rising.",
            "3. Review data-integrity controls (ALCOA+) in QC laboratories and document the review.",
        ]
        .join("\n"))
    }
}
