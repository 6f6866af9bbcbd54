use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use once_cell::sync::Lazy;
use prometheus::{register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "crm_http_requests_total",
        "HTTP requests by entity, method and status",
        &["entity", "method", "status"]
    )
    .expect("register http_requests_total")
});

pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "crm_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["entity"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register http_request_duration")
});

/// `/customer` -> `customer`.
fn entity_label(path: Option<&MatchedPath>) -> String {
    path.map(|p| p.as_str().trim_start_matches('/').to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}

/// Route-layer middleware counting requests and timing them.
pub async fn track(path: Option<MatchedPath>, req: Request, next: Next) -> Response {
    let entity = entity_label(path.as_ref());
    let method = req.method().as_str().to_owned();
    let start = Instant::now();

    let res = next.run(req).await;

    HTTP_REQUEST_DURATION
        .with_label_values(&[entity.as_str()])
        .observe(start.elapsed().as_secs_f64());
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[entity.as_str(), method.as_str(), res.status().as_str()])
        .inc();
    res
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_exposition() {
        HTTP_REQUESTS_TOTAL.with_label_values(&["product", "GET", "200"]).inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("crm_http_requests_total"));
        assert!(body.contains("entity=\"product\""));
    }

    #[test]
    fn unmatched_requests_have_a_label() {
        assert_eq!(entity_label(None), "unmatched");
    }
}
