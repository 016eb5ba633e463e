//! # Application Layer
//!
//! The chat completion use case and the transport interface it depends on.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
