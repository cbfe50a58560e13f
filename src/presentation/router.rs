use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ContentExtractor, ReportRenderer, ResponseSynthesizer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{artifact_handler, health_handler, preview_handler};
use crate::presentation::state::AppState;

pub fn create_router<E, S, R>(state: AppState<E, S, R>, max_upload_bytes: usize) -> Router
where
    E: ContentExtractor + 'static,
    S: ResponseSynthesizer + 'static,
    R: ReportRenderer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/preview", post(preview_handler::<E, S, R>))
        .route(
            "/artifacts/{report_id}/{filename}",
            get(artifact_handler::<E, S, R>),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
