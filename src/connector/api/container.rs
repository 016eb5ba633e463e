use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatCompletionClient, ChatTransport};
use crate::connector::HttpChatTransport;
use crate::domain::ClientConfig;

/// Settings gathered by the binary from flags and environment variables.
///
/// `None` fields fall back to the [`ClientConfig`] defaults.
#[derive(Clone, Default)]
pub struct ContainerConfig {
    pub endpoint: Option<String>,
    pub api_key: String,
    pub model: Option<String>,
    pub system_prompt: Option<String>,
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for ContainerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<empty>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ContainerConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &api_key)
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .finish()
    }
}

impl ContainerConfig {
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default().with_api_key(self.api_key.clone());

        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(prompt) = &self.system_prompt {
            config = config.with_system_prompt(prompt.clone());
        }

        config
    }
}

pub struct Container {
    client: ChatCompletionClient,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let client_config = config.client_config();
        debug!("Using chat completion endpoint {}", client_config.endpoint());
        if !client_config.has_api_key() {
            debug!("No API key configured; requests will carry an empty bearer token");
        }

        let transport = Arc::new(HttpChatTransport::new()?);

        Ok(Self::with_transport(client_config, transport))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            client: ChatCompletionClient::new(config, transport),
        }
    }

    pub fn client(&self) -> &ChatCompletionClient {
        &self.client
    }
}
