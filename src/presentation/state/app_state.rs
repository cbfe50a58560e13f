use std::sync::Arc;

use crate::application::ports::{BlobStore, ContentExtractor, ReportRenderer, ResponseSynthesizer};
use crate::application::services::PreviewService;

pub struct AppState<E, S, R>
where
    E: ContentExtractor,
    S: ResponseSynthesizer,
    R: ReportRenderer,
{
    pub preview_service: Arc<PreviewService<E, S, R>>,
    pub output_store: Arc<dyn BlobStore>,
}

impl<E, S, R> Clone for AppState<E, S, R>
where
    E: ContentExtractor,
    S: ResponseSynthesizer,
    R: ReportRenderer,
{
    fn clone(&self) -> Self {
        Self {
            preview_service: Arc::clone(&self.preview_service),
            output_store: Arc::clone(&self.output_store),
        }
    }
}
