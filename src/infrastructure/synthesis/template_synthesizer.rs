use async_trait::async_trait;

use crate::application::ports::{ResponseSynthesizer, SynthesisError};

/// Deterministic stand-in for a real generation client: interpolates the
/// prompt and the space-joined context into a fixed template. Pure and
/// side-effect-free, so identical inputs always yield identical output.
pub struct TemplateSynthesizer {
    // Held for the eventual real client; the template path never reads it.
    #[allow(dead_code)]
    api_key: Option<String>,
}

impl TemplateSynthesizer {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl ResponseSynthesizer for TemplateSynthesizer {
    #[tracing::instrument(skip(self, context))]
    async fn synthesize(
        &self,
        prompt: &str,
        context: &[String],
    ) -> Result<String, SynthesisError> {
        let combined = context.join(" ");
        Ok(format!(
            "Generated response for prompt: '{prompt}' with context: {combined}"
        ))
    }
}
