mod http_chat_transport;
mod mock_chat_transport;

pub use http_chat_transport::*;
pub use mock_chat_transport::*;
