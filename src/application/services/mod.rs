mod preview_service;

pub use preview_service::{PreviewError, PreviewOutcome, PreviewService};
