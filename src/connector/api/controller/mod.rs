pub mod analyze_controller;
pub mod payload_controller;

pub use analyze_controller::{AnalyzeController, CommandOutput};
pub use payload_controller::PayloadController;
