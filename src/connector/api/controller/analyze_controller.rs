use anyhow::Result;

use crate::cli::OutputFormat;
use crate::domain::AnalysisOutcome;

use super::super::Container;

/// Rendered result of a command plus whether it succeeded, for the exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

pub struct AnalyzeController<'a> {
    container: &'a Container,
}

impl<'a> AnalyzeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn analyze(&self, input: &str, format: OutputFormat) -> Result<CommandOutput> {
        let outcome = self.container.client().analyze_text(input).await;

        Ok(CommandOutput {
            success: outcome.is_success(),
            text: self.format_outcome(&outcome, format)?,
        })
    }

    fn format_outcome(&self, outcome: &AnalysisOutcome, format: OutputFormat) -> Result<String> {
        if format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(outcome)?);
        }

        match outcome {
            AnalysisOutcome::Success { keywords } => match format {
                OutputFormat::List => Ok(outcome.keyword_list().join("\n")),
                _ => Ok(keywords.clone()),
            },
            AnalysisOutcome::Error(err) => Ok(format!("Error [{}]: {}", err.kind(), err)),
        }
    }
}
