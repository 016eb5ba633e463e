use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use keyword_extract::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "keyword-extract")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Chat completions endpoint URL
    #[arg(long, global = true, env = "KEYWORD_EXTRACT_ENDPOINT")]
    endpoint: Option<String>,

    /// Bearer token sent with every request
    #[arg(
        long,
        global = true,
        env = "KEYWORD_EXTRACT_API_KEY",
        hide_env_values = true,
        default_value = ""
    )]
    api_key: String,

    #[arg(short, long, global = true, env = "KEYWORD_EXTRACT_MODEL")]
    model: Option<String>,

    /// System prompt sent before the input text
    #[arg(long, global = true, env = "KEYWORD_EXTRACT_SYSTEM_PROMPT")]
    system_prompt: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Logs go to stderr so stdout carries only the command output.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        endpoint: cli.endpoint,
        api_key: cli.api_key,
        model: cli.model,
        system_prompt: cli.system_prompt,
    })?;
    debug!("Using model {}", container.client().config().model());

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;

    if output.success {
        println!("{}", output.text);
    } else {
        eprintln!("{}", output.text);
        std::process::exit(1);
    }

    Ok(())
}
