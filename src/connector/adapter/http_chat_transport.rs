use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::application::ChatTransport;
use crate::domain::{DomainError, RawApiResult, RequestPayload};

/// Upper bound for a whole request, connect through last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`ChatTransport`] that POSTs the payload as JSON over HTTP(S) with reqwest.
///
/// TLS certificates are always verified and every request is bounded by
/// [`REQUEST_TIMEOUT`]. Idle connections are not pooled, so each call opens its
/// own connection and drops it before returning, whatever the outcome.
pub struct HttpChatTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpChatTransport {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(false)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| {
                DomainError::transport(format!("HttpChatTransport: failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, endpoint: &str, api_key: &str, payload: &RequestPayload) -> RawApiResult {
        let response = match self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("HttpChatTransport: request to {endpoint} failed: {e}");
                return RawApiResult::transport_failure(format!("request failed: {e}"));
            }
        };

        let status = response.status();
        debug!("HttpChatTransport: {endpoint} returned {status}");

        match response.text().await {
            Ok(body) => RawApiResult::response(status.as_u16(), body),
            Err(e) => {
                warn!("HttpChatTransport: failed to read response body from {endpoint}: {e}");
                RawApiResult::transport_failure(format!("failed to read response body: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{classify_response, ErrorKind};

    /// Local endpoint whose handler answers only after `delay`.
    async fn spawn_slow_endpoint(delay: Duration) -> String {
        let app = axum::Router::new().route(
            "/v1/chat/completions",
            axum::routing::post(move || async move {
                tokio::time::sleep(delay).await;
                r#"{"choices":[{"message":{"content":"too late"}}]}"#
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/v1/chat/completions")
    }

    #[test]
    fn test_default_timeout_is_thirty_seconds() {
        let transport = HttpChatTransport::new().unwrap();
        assert_eq!(transport.timeout(), Duration::from_secs(30));
        assert_eq!(transport.timeout(), REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out_as_network_failure() {
        let endpoint = spawn_slow_endpoint(Duration::from_secs(5)).await;
        let transport = HttpChatTransport::with_timeout(Duration::from_millis(200)).unwrap();
        let payload = RequestPayload::new("m", "s", "u");

        let raw = transport.send(&endpoint, "sk-test", &payload).await;

        assert!(raw.is_transport_failure());
        assert_eq!(raw.status_code, 0);
        assert_eq!(
            classify_response(raw).error_kind(),
            Some(ErrorKind::NetworkFailure)
        );
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_transport_failure() {
        let transport = HttpChatTransport::new().unwrap();
        let payload = RequestPayload::new("m", "s", "u");

        let raw = transport.send("not a url", "", &payload).await;

        assert!(raw.is_transport_failure());
        assert_eq!(raw.status_code, 0);
        assert!(raw.transport_error.unwrap().starts_with("request failed"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpChatTransport::new().unwrap();
        let payload = RequestPayload::new("m", "s", "u");

        let raw = transport
            .send(&format!("http://{addr}/v1/chat/completions"), "sk-test", &payload)
            .await;

        assert!(raw.is_transport_failure());
        assert!(raw.body.is_none());
    }
}
