//! Single-shot request execution with metrics and fault mapping.
//!
//! Requests are sent exactly once. Non-success responses are turned into
//! [`ClientError::ApiError`], using the VI/JSON `MethodFault` body when the
//! server returned one.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::MethodFault;

/// Sends an HTTP request and maps error statuses to [`ClientError::ApiError`].
///
/// `endpoint` and `method` are only used as metric labels.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let started = Instant::now();
    let result = match builder.send().await {
        Ok(response) if response.status().is_success() => {
            if let Some(m) = metrics {
                m.record_request_duration(
                    endpoint,
                    method,
                    started.elapsed(),
                    Some(response.status().as_u16()),
                );
            }
            return Ok(response);
        }
        Ok(response) => {
            let status = response.status().as_u16();
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, started.elapsed(), Some(status));
            }
            Err(error_from_response(response).await)
        }
        Err(e) => {
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, started.elapsed(), None);
            }
            Err(ClientError::from(e))
        }
    };

    if let (Err(e), Some(m)) = (&result, metrics) {
        m.record_client_error(endpoint, method, e);
    }
    result
}

async fn error_from_response(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let fault = serde_json::from_str::<MethodFault>(&body)
        .ok()
        .filter(|f| f.type_name.is_some());

    match fault {
        Some(fault) => {
            debug!(status, fault = ?fault.type_name, "vSphere method fault");
            ClientError::ApiError {
                status,
                url,
                message: fault.summary().unwrap_or_else(|| format!("HTTP {status}")),
                fault: fault.type_name,
            }
        }
        None => ClientError::ApiError {
            status,
            url,
            fault: None,
            message: if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body
            },
        },
    }
}
