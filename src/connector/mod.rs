//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Transport (reqwest over HTTP(S), scripted mock for tests)
//! - CLI wiring (container and controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
