use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::ChatTransport;
use crate::domain::{RawApiResult, RequestPayload};

/// A request captured by [`MockChatTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub api_key: String,
    pub payload: RequestPayload,
}

/// Transport that answers from a script instead of the network.
///
/// Queued replies are handed out in order; once the queue is drained every
/// further call gets the last reply again.
pub struct MockChatTransport {
    queued: Mutex<VecDeque<RawApiResult>>,
    last: Mutex<RawApiResult>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockChatTransport {
    pub fn new(reply: RawApiResult) -> Self {
        Self::with_replies(vec![reply])
    }

    pub fn replying(status_code: u16, body: impl Into<String>) -> Self {
        Self::new(RawApiResult::response(status_code, body))
    }

    /// An empty script behaves like a transport that never gets a response.
    pub fn with_replies(replies: Vec<RawApiResult>) -> Self {
        let last = replies
            .last()
            .cloned()
            .unwrap_or_else(|| RawApiResult::transport_failure("mock transport has no reply"));
        Self {
            queued: Mutex::new(replies.into()),
            last: Mutex::new(last),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl ChatTransport for MockChatTransport {
    async fn send(&self, endpoint: &str, api_key: &str, payload: &RequestPayload) -> RawApiResult {
        self.requests.lock().await.push(RecordedRequest {
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            payload: payload.clone(),
        });

        let mut last = self.last.lock().await;
        let reply = match self.queued.lock().await.pop_front() {
            Some(reply) => {
                *last = reply.clone();
                reply
            }
            None => last.clone(),
        };

        debug!("MockChatTransport: replying with HTTP {}", reply.status_code);

        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> RequestPayload {
        RequestPayload::new("m", "s", "u")
    }

    #[tokio::test]
    async fn test_replies_in_order_then_repeats_last() {
        let transport = MockChatTransport::with_replies(vec![
            RawApiResult::response(500, "first"),
            RawApiResult::response(200, "second"),
        ]);

        let first = transport.send("e", "k", &payload()).await;
        let second = transport.send("e", "k", &payload()).await;
        let third = transport.send("e", "k", &payload()).await;

        assert_eq!(first.body.as_deref(), Some("first"));
        assert_eq!(second.body.as_deref(), Some("second"));
        assert_eq!(third, second);
        assert_eq!(transport.call_count().await, 3);
    }

    #[tokio::test]
    async fn test_records_requests() {
        let transport = MockChatTransport::replying(200, "{}");

        transport.send("http://host/v1", "sk-1", &payload()).await;

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint, "http://host/v1");
        assert_eq!(requests[0].api_key, "sk-1");
        assert_eq!(requests[0].payload, payload());
    }

    #[tokio::test]
    async fn test_empty_script_fails_like_transport() {
        let transport = MockChatTransport::with_replies(vec![]);

        let reply = transport.send("e", "k", &payload()).await;

        assert!(reply.is_transport_failure());
    }
}
