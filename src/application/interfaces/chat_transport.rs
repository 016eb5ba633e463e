use async_trait::async_trait;

use crate::domain::{RawApiResult, RequestPayload};

/// Sends one chat completion request and hands back the raw reply.
///
/// Implementations never fail: connection, TLS, timeout and body-read problems
/// are reported through [`RawApiResult::transport_failure`].
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, endpoint: &str, api_key: &str, payload: &RequestPayload) -> RawApiResult;
}
