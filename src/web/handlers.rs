//! Page handlers and shared application state.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use askama_axum::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::Config;
use crate::metrics;

/// Immutable service metadata bound into the landing page and the
/// generated API docs.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    /// Service title.
    pub title: String,
    /// One-line service description.
    pub description: String,
    /// Crate version string.
    pub version: &'static str,
}

impl ServiceInfo {
    /// Build service metadata from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.app_title.clone(),
            description: config.app_description.clone(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service metadata.
    pub info: Arc<ServiceInfo>,
    /// Directory served under the /static prefix.
    pub static_dir: Arc<PathBuf>,
    /// Whether the server is accepting traffic.
    pub ready: Arc<AtomicBool>,
    /// Process start instant, for uptime reporting.
    pub started_at: Instant,
    /// Prometheus handle backing the /metrics route, when installed.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            info: Arc::new(ServiceInfo::from_config(config)),
            static_dir: Arc::new(PathBuf::from(&config.static_dir)),
            ready: Arc::new(AtomicBool::new(false)),
            started_at: Instant::now(),
            metrics_handle: None,
        }
    }

    /// Attach the Prometheus recorder handle.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }

    /// Set ready state.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Check if ready.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Seconds elapsed since the state was constructed.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Landing page template, rendered with the service metadata.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Service title.
    pub title: String,
    /// One-line service description.
    pub description: String,
    /// Crate version string.
    pub version: &'static str,
}

impl IndexTemplate {
    /// Bind service metadata into the template context.
    pub fn new(info: &ServiceInfo) -> Self {
        Self {
            title: info.title.clone(),
            description: info.description.clone(),
            version: info.version,
        }
    }
}

/// Landing page handler - renders `index.html` with the service metadata.
/// A rendering failure surfaces as 500 and is not recovered here.
pub async fn home(State(state): State<AppState>) -> IndexTemplate {
    metrics::inc_pages_rendered();
    IndexTemplate::new(&state.info)
}

/// Favicon handler - unconditionally redirects to the static asset.
pub async fn favicon() -> Redirect {
    metrics::inc_favicon_redirects();
    Redirect::temporary("/static/favicon.ico")
}

/// Prometheus exposition handler.
pub async fn metrics_text(State(state): State<AppState>) -> Response {
    match state.metrics_handle.as_ref() {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            app_title: "Nudge AI".to_string(),
            app_description: "Nudge AI Brain".to_string(),
            static_dir: "static".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn app_state_ready_toggle() {
        let state = AppState::from_config(&test_config());
        assert!(!state.is_ready());

        state.set_ready(true);
        assert!(state.is_ready());

        state.set_ready(false);
        assert!(!state.is_ready());
    }

    #[test]
    fn index_template_renders_metadata() {
        let info = ServiceInfo::from_config(&test_config());
        let html = IndexTemplate::new(&info).render().unwrap();

        assert!(html.contains("Nudge AI"));
        assert!(html.contains("Nudge AI Brain"));
        assert!(html.contains(env!("CARGO_PKG_VERSION")));
    }
}
