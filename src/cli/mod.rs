use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The model's reply as returned, trimmed
    #[default]
    Text,
    /// One keyword per line
    List,
    /// The full outcome as JSON
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract keywords from text (argument, --file, or stdin)
    Analyze {
        text: Option<String>,

        /// Read the input text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the request body that `analyze` would send, without sending it
    Payload {
        text: Option<String>,

        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
}

/// [`resolve_input`] on the blocking pool, so a slow stdin or file never stalls the runtime.
pub async fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    tokio::task::spawn_blocking(move || resolve_input(text, file.as_deref()))
        .await
        .context("Input reader task failed")?
}

/// Picks the input text: the positional argument, then `--file`, then stdin.
pub fn resolve_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    let input = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            buf
        }
    };

    if input.trim().is_empty() {
        bail!("No input text provided");
    }

    Ok(input)
}
