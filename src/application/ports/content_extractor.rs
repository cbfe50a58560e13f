use async_trait::async_trait;

use crate::domain::{Document, ExtractedContent};

#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedContent, ExtractError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("malformed {kind} content: {reason}")]
    Malformed { kind: &'static str, reason: String },
    #[error("extraction task failed: {0}")]
    TaskFailed(String),
}
