mod analysis_outcome;
mod chat_request;
mod client_config;
mod raw_api_result;

pub use analysis_outcome::*;
pub use chat_request::*;
pub use client_config::*;
pub use raw_api_result::*;
