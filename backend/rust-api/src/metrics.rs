use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, Encoder, HistogramVec,
    IntCounter, IntCounterVec, TextEncoder,
};

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .unwrap();

    // Business Metrics
    pub static ref PROFILES_CREATED_TOTAL: IntCounter = register_int_counter!(
        "profiles_created_total",
        "Total number of user profiles created"
    )
    .unwrap();

    pub static ref SURVEYS_COMPLETED_TOTAL: IntCounter = register_int_counter!(
        "surveys_completed_total",
        "Total number of self-assessment surveys submitted"
    )
    .unwrap();

    pub static ref WORKOUT_PLANS_GENERATED_TOTAL: IntCounter = register_int_counter!(
        "workout_plans_generated_total",
        "Total number of workout plans generated"
    )
    .unwrap();

    pub static ref WORKOUT_SAVES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "workout_saves_total",
        "Workout progress saves, by whether the day qualified for the streak",
        &["completed"]
    )
    .unwrap();

    pub static ref QUIZZES_COMPLETED_TOTAL: IntCounter = register_int_counter!(
        "quizzes_completed_total",
        "Total number of confidence quizzes finished"
    )
    .unwrap();

    pub static ref STREAK_UPDATES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "streak_updates_total",
        "Streak recomputations, by activity kind and outcome",
        &["kind", "outcome"]
    )
    .unwrap();
}

/// Outcome labels for `STREAK_UPDATES_TOTAL`.
pub fn streak_outcome(before: u32, after: u32) -> &'static str {
    match (before, after) {
        (0, _) => "started",
        (b, a) if a == b + 1 => "extended",
        (b, a) if a == b => "unchanged",
        _ => "reset",
    }
}

/// Render all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| format!("Failed to encode metrics: {}", e))?;

    String::from_utf8(buffer).map_err(|e| format!("Failed to convert metrics to string: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels() {
        assert_eq!(streak_outcome(0, 1), "started");
        assert_eq!(streak_outcome(5, 6), "extended");
        assert_eq!(streak_outcome(6, 6), "unchanged");
        assert_eq!(streak_outcome(5, 1), "reset");
    }

    #[test]
    fn render_produces_text() {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/health", "200"])
            .inc();
        let text = render_metrics().unwrap();
        assert!(text.contains("http_requests_total"));
    }
}
