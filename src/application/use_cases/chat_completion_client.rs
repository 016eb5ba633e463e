use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ChatTransport;
use crate::domain::{classify_response, AnalysisOutcome, ClientConfig, RequestPayload};

/// Sends text to a chat completion endpoint and returns the model's keyword reply.
///
/// Each [`analyze_text`](Self::analyze_text) call builds a fresh payload from the
/// current configuration, performs exactly one request through the transport and
/// classifies the reply. Nothing is carried over between calls, so repeated calls
/// with the same input and the same reply give the same outcome.
///
/// Configuration changes take `&mut self` and therefore cannot overlap a call in
/// flight.
pub struct ChatCompletionClient {
    config: ClientConfig,
    transport: Arc<dyn ChatTransport>,
}

impl ChatCompletionClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn configure_model(&mut self, model: impl Into<String>) {
        self.config.set_model(model);
    }

    pub fn set_system_prompt(&mut self, system_prompt: impl Into<String>) {
        self.config.set_system_prompt(system_prompt);
    }

    /// The payload `analyze_text` would send for `input_text`.
    pub fn build_payload(&self, input_text: &str) -> RequestPayload {
        RequestPayload::new(
            self.config.model(),
            self.config.system_prompt(),
            input_text,
        )
    }

    pub async fn analyze_text(&self, input_text: &str) -> AnalysisOutcome {
        let payload = self.build_payload(input_text);

        debug!(
            "ChatCompletionClient: POST {} (model: {}, input: {} chars)",
            self.config.endpoint(),
            self.config.model(),
            input_text.chars().count()
        );

        let raw = self
            .transport
            .send(self.config.endpoint(), self.config.api_key(), &payload)
            .await;
        let status = raw.status_code;

        let outcome = classify_response(raw);

        match &outcome {
            AnalysisOutcome::Success { keywords } => {
                debug!("ChatCompletionClient: HTTP {status}, keywords: {keywords}");
            }
            AnalysisOutcome::Error(err) => {
                warn!("ChatCompletionClient: {} (HTTP {status}): {err}", err.kind());
            }
        }

        outcome
    }
}
