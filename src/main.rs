use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use maloy::application::ports::BlobStore;
use maloy::application::services::PreviewService;
use maloy::infrastructure::extraction::CompositeExtractor;
use maloy::infrastructure::observability::{init_tracing, TracingConfig};
use maloy::infrastructure::rendering::PdfReportRenderer;
use maloy::infrastructure::storage::LocalBlobStore;
use maloy::infrastructure::synthesis::TemplateSynthesizer;
use maloy::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(
        TracingConfig {
            environment: settings.logging.environment,
            json_format: settings.logging.json_format,
        },
        settings.server.port,
    );

    let upload_store: Arc<dyn BlobStore> =
        Arc::new(LocalBlobStore::new(settings.storage.upload_dir.clone())?);
    let output_store: Arc<dyn BlobStore> =
        Arc::new(LocalBlobStore::new(settings.storage.output_dir.clone())?);

    let extractor = Arc::new(CompositeExtractor::with_defaults());
    let synthesizer = Arc::new(TemplateSynthesizer::new(settings.llm.api_key.clone()));
    let renderer = Arc::new(PdfReportRenderer);

    let preview_service = Arc::new(PreviewService::new(
        extractor,
        synthesizer,
        renderer,
        upload_store,
        Arc::clone(&output_store),
        settings.uploads.allowed_extensions.clone(),
    ));

    let state = AppState {
        preview_service,
        output_store,
    };

    let router = create_router(state, settings.uploads.max_upload_bytes());

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
