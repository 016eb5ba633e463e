use anyhow::Result;

use crate::cli::{read_input, Commands};

use super::container::Container;
use super::controller::{AnalyzeController, CommandOutput, PayloadController};

pub struct Router<'a> {
    analyze_controller: AnalyzeController<'a>,
    payload_controller: PayloadController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            analyze_controller: AnalyzeController::new(container),
            payload_controller: PayloadController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<CommandOutput> {
        match command {
            Commands::Analyze { text, file, format } => {
                let input = read_input(text, file).await?;
                self.analyze_controller.analyze(&input, format).await
            }
            Commands::Payload { text, file } => {
                let input = read_input(text, file).await?;
                Ok(CommandOutput {
                    text: self.payload_controller.payload(&input)?,
                    success: true,
                })
            }
        }
    }
}
