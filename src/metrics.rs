//! Prometheus metrics for request counting and monitoring.

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Index pages rendered counter metric name.
pub const METRIC_PAGES_RENDERED: &str = "pages_rendered_total";
/// Favicon redirects counter metric name.
pub const METRIC_FAVICON_REDIRECTS: &str = "favicon_redirects_total";

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup; the returned handle backs the /metrics route.
pub fn init_metrics() -> Result<PrometheusHandle, metrics_exporter_prometheus::BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        METRIC_PAGES_RENDERED,
        "Total number of index pages rendered"
    );
    describe_counter!(
        METRIC_FAVICON_REDIRECTS,
        "Total number of favicon redirects served"
    );

    debug!("Metrics initialized");
    Ok(handle)
}

/// Increment pages rendered counter.
pub fn inc_pages_rendered() {
    counter!(METRIC_PAGES_RENDERED).increment(1);
}

/// Increment favicon redirects counter.
pub fn inc_favicon_redirects() {
    counter!(METRIC_FAVICON_REDIRECTS).increment(1);
}
