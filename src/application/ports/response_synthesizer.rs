use async_trait::async_trait;

/// Seam for response generation. The shipped implementation is a
/// deterministic template; a real completion client can replace it without
/// touching the surrounding pipeline.
#[async_trait]
pub trait ResponseSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        prompt: &str,
        context: &[String],
    ) -> Result<String, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis failed: {0}")]
    Failed(String),
}
