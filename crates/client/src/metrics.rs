//! Metrics collection for vSphere API calls.
//!
//! This module provides metrics collection for API calls, including:
//! - Request latency histograms
//! - Request and error counters
//! - Role lookup cache hits and misses
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use metrics::Unit;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "vsphere_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "vsphere_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "vsphere_api_errors_total";

/// Metric name for role cache hit counter.
pub const METRIC_CACHE_HITS: &str = "vsphere_role_cache_hits_total";

/// Metric name for role cache miss counter.
pub const METRIC_CACHE_MISSES: &str = "vsphere_role_cache_misses_total";

/// Register unit and help text for every metric this crate emits.
///
/// Goes to whichever recorder is current; call it once after installing one.
pub fn describe_metrics() {
    metrics::describe_histogram!(
        METRIC_REQUEST_DURATION,
        Unit::Seconds,
        "Latency of vSphere VI/JSON requests that reached the transport"
    );
    metrics::describe_counter!(
        METRIC_REQUESTS_TOTAL,
        Unit::Count,
        "vSphere VI/JSON requests sent, by endpoint and method"
    );
    metrics::describe_counter!(
        METRIC_ERRORS_TOTAL,
        Unit::Count,
        "Failed vSphere calls, timeouts included, by error category"
    );
    metrics::describe_counter!(
        METRIC_CACHE_HITS,
        Unit::Count,
        "Role lookups answered from the cache"
    );
    metrics::describe_counter!(
        METRIC_CACHE_MISSES,
        Unit::Count,
        "Role lookups that went to vCenter"
    );
}

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors (vSphere faults arrive as 500)
    Http5xx,
    /// Authentication failures
    Auth,
    /// Bounded call expired
    Timeout,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::AuthFailed(_) | ClientError::SessionExpired { .. } => ErrorCategory::Auth,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_connect() => ErrorCategory::Transport,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for vSphere API calls.
///
/// A thin wrapper around the `metrics` crate macros that keeps label names
/// consistent.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error from a ClientError.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        if !self.enabled {
            return;
        }

        let category = ErrorCategory::from(error);
        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record a role cache hit.
    pub fn record_cache_hit(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_HITS).increment(1);
    }

    /// Record a role cache miss.
    pub fn record_cache_miss(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_MISSES).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_as_str() {
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::Auth.as_str(), "auth");
        assert_eq!(ErrorCategory::Timeout.as_str(), "timeout");
        assert_eq!(ErrorCategory::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_error_categorization() {
        let timeout_err = ClientError::Timeout(Duration::from_secs(1));
        assert_eq!(ErrorCategory::from(&timeout_err), ErrorCategory::Timeout);

        let auth_err = ClientError::AuthFailed("bad password".to_string());
        assert_eq!(ErrorCategory::from(&auth_err), ErrorCategory::Auth);

        let api_401 = ClientError::ApiError {
            status: 401,
            url: "test".to_string(),
            fault: Some("NotAuthenticated".to_string()),
            message: "not authenticated".to_string(),
        };
        assert_eq!(ErrorCategory::from(&api_401), ErrorCategory::Http4xx);

        let api_500 = ClientError::ApiError {
            status: 500,
            url: "test".to_string(),
            fault: Some("AlreadyExists".to_string()),
            message: "exists".to_string(),
        };
        assert_eq!(ErrorCategory::from(&api_500), ErrorCategory::Http5xx);

        let invalid = ClientError::InvalidRequest("neither key".to_string());
        assert_eq!(ErrorCategory::from(&invalid), ErrorCategory::Unknown);
    }

    #[test]
    fn test_describe_metrics_covers_every_name() {
        use crate::testing::CapturingRecorder;

        let recorder = CapturingRecorder::new();
        metrics::with_local_recorder(&recorder, describe_metrics);

        let duration = recorder.description(METRIC_REQUEST_DURATION).unwrap();
        assert_eq!(duration.unit, Some(Unit::Seconds));

        for name in [
            METRIC_REQUESTS_TOTAL,
            METRIC_ERRORS_TOTAL,
            METRIC_CACHE_HITS,
            METRIC_CACHE_MISSES,
        ] {
            let description = recorder
                .description(name)
                .unwrap_or_else(|| panic!("{name} not described"));
            assert_eq!(description.unit, Some(Unit::Count));
            assert!(!description.help.is_empty());
        }
    }

    #[test]
    fn test_disabled_collector_emits_nothing() {
        use crate::testing::CapturingRecorder;

        let recorder = CapturingRecorder::new();
        metrics::with_local_recorder(&recorder, || {
            let disabled = MetricsCollector::disabled();
            disabled.record_request("/roleList", "GET");
            disabled.record_cache_miss();
        });

        assert!(recorder.counters(METRIC_REQUESTS_TOTAL).is_empty());
        assert!(recorder.counters(METRIC_CACHE_MISSES).is_empty());
    }

    #[test]
    fn test_metrics_collector_enabled() {
        let collector = MetricsCollector::new();
        assert!(collector.is_enabled());

        let disabled = MetricsCollector::disabled();
        assert!(!disabled.is_enabled());
    }
}
