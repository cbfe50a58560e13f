mod blob_store;
mod content_extractor;
mod report_renderer;
mod response_synthesizer;

pub use blob_store::{BlobStore, BlobStoreError};
pub use content_extractor::{ContentExtractor, ExtractError};
pub use report_renderer::{RenderError, RenderedReport, ReportInput, ReportRenderer};
pub use response_synthesizer::{ResponseSynthesizer, SynthesisError};
