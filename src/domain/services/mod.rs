//! Domain services containing core business logic.

mod response_classifier;

pub use response_classifier::*;
