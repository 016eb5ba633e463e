//! # Domain Layer
//!
//! Request and response models, the crate error type, and response classification.
//! This layer is independent of the HTTP client and the async runtime.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
