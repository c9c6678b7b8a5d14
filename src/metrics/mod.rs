// Metrics module for Prometheus observability

mod registry;

pub use registry::{
    gather_metrics, MODEL_LOADS_TOTAL, REQUESTS_TOTAL, REQUEST_DURATION, TRANSLATIONS_TOTAL,
};

/// Helper to record request metrics
pub fn record_request(endpoint: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[endpoint, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[endpoint, &status_code.to_string()])
        .observe(duration_secs);
}

/// Helper to record a translation outcome
pub fn record_translation(direction: &str, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    TRANSLATIONS_TOTAL
        .with_label_values(&[direction, outcome])
        .inc();
}

/// Helper to record a model load
pub fn record_model_load(direction: &str) {
    MODEL_LOADS_TOTAL.with_label_values(&[direction]).inc();
}
