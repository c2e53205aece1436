//! Prometheus scrape endpoint for the `vsphere_*` metrics.
//!
//! `--metrics-bind` on the CLI installs a global Prometheus recorder with an
//! HTTP listener serving `/metrics`, then registers the help text of every
//! metric from [`crate::metrics`].
//!
//! Request latency uses buckets sized for vCenter: a role list on a loaded
//! appliance routinely takes seconds, and calls end at the configured API
//! timeout (at most one hour).

use std::net::{AddrParseError, SocketAddr};

use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::{METRIC_REQUEST_DURATION, describe_metrics};

/// Upper bounds, in seconds, of the request latency histogram.
pub const REQUEST_DURATION_BUCKETS: &[f64] = &[
    0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 300.0, 3600.0,
];

/// A running Prometheus exporter.
#[derive(Debug)]
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the exporter as the global recorder and start serving
    /// `http://{bind_addr}/metrics` on the current tokio runtime.
    ///
    /// `bind_addr` must be an IP socket address such as `127.0.0.1:9464`.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr = parse_bind_addr(bind_addr)?;

        prometheus_builder()?.with_http_listener(addr).install()?;
        describe_metrics();

        info!(bind_addr = %addr, "Prometheus metrics exporter listening");
        Ok(Self { bind_addr: addr })
    }

    /// Address the scrape endpoint listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn parse_bind_addr(bind_addr: &str) -> Result<SocketAddr, MetricsExporterError> {
    bind_addr
        .parse()
        .map_err(|source| MetricsExporterError::InvalidBindAddress {
            addr: bind_addr.to_string(),
            source,
        })
}

/// Builder shared by the exporter and its tests: latency buckets only.
fn prometheus_builder() -> Result<PrometheusBuilder, MetricsExporterError> {
    Ok(PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full(METRIC_REQUEST_DURATION.to_string()),
        REQUEST_DURATION_BUCKETS,
    )?)
}

/// Failure to start the scrape endpoint.
#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid metrics bind address '{addr}': {source}")]
    InvalidBindAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    /// Bad bucket configuration, a taken port, or a recorder already installed.
    #[error("Failed to start Prometheus exporter: {0}")]
    Build(#[from] BuildError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::metrics::{METRIC_ERRORS_TOTAL, MetricsCollector};
    use std::time::Duration;

    #[test]
    fn test_hostname_bind_address_is_rejected() {
        let err = MetricsExporter::install("vcenter-metrics:9464").unwrap_err();
        assert!(matches!(
            err,
            MetricsExporterError::InvalidBindAddress { ref addr, .. }
                if addr == "vcenter-metrics:9464"
        ));
        assert!(err.to_string().contains("Invalid metrics bind address"));
    }

    #[test]
    fn test_bind_address_accepts_ipv4_and_ipv6() {
        assert_eq!(parse_bind_addr("127.0.0.1:9464").unwrap().port(), 9464);
        assert!(parse_bind_addr("[::1]:9464").unwrap().is_ipv6());
    }

    #[test]
    fn test_buckets_are_ascending_and_reach_max_timeout() {
        assert!(REQUEST_DURATION_BUCKETS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(REQUEST_DURATION_BUCKETS.last(), Some(&3600.0));
    }

    #[test]
    fn test_scrape_output_carries_help_and_buckets() {
        let recorder = prometheus_builder().unwrap().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            describe_metrics();
            let collector = MetricsCollector::new();
            collector.record_request_duration(
                "/AuthorizationManager/AuthorizationManager/roleList",
                "GET",
                Duration::from_millis(180),
                Some(200),
            );
            collector.record_client_error(
                "/AuthorizationManager/AuthorizationManager/roleList",
                "GET",
                &ClientError::Timeout(Duration::from_secs(30)),
            );
        });

        let scrape = handle.render();
        assert!(scrape.contains(&format!("# HELP {METRIC_REQUEST_DURATION}")));
        assert!(scrape.contains(&format!("# HELP {METRIC_ERRORS_TOTAL}")));
        assert!(scrape.contains("le=\"0.25\""));
        assert!(scrape.contains("error_category=\"timeout\""));
    }
}
