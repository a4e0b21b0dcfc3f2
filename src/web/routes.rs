//! Application router wiring.

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use super::docs;
use super::handlers::{favicon, home, metrics_text, AppState};

/// Create the application router.
///
/// `endpoints` is the externally supplied route collection; it is merged
/// as-is, so every path it declares is reachable once the router is built.
/// Static assets are mounted under /static before the listener starts.
pub fn create_router(state: AppState, endpoints: Router<AppState>) -> Router {
    let api_doc = docs::openapi(&state.info);
    let static_files = ServeDir::new(state.static_dir.as_path());

    Router::new()
        // Inline pages
        .route("/", get(home))
        .route("/favicon.ico", get(favicon))
        // Observability
        .route("/metrics", get(metrics_text))
        // External endpoint collection
        .merge(endpoints)
        // Generated API docs
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api_doc))
        // Static assets
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
