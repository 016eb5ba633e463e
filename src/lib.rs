pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatCompletionClient, ChatTransport};

pub use cli::{Commands, OutputFormat};

pub use connector::{
    CommandOutput, Container, ContainerConfig, HttpChatTransport, MockChatTransport,
    RecordedRequest, Router,
};

pub use domain::{
    classify_response, AnalysisError, AnalysisOutcome, ChatMessage, ClientConfig, DomainError,
    ErrorKind, RawApiResult, RequestPayload, Role, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_SYSTEM_PROMPT,
};
