use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use pubmed_screen::config::{load_config, Config};
use pubmed_screen::output;
use pubmed_screen::pipeline::{self, RunOutcome};
use pubmed_screen::sources::PubMedClient;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fetch PubMed papers for a query and report authors with non-academic affiliations
#[derive(Parser, Debug)]
#[command(name = "pubmed-screen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Fetch PubMed papers for a query and report authors with non-academic affiliations",
    long_about = None
)]
struct Cli {
    /// Search query string
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    query: String,

    /// Write the report to this CSV file instead of printing it
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("pubmed_screen={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let client = PubMedClient::with_endpoints(config.endpoints);

    match pipeline::run(&client, &cli.query, cli.file.as_deref()).await? {
        RunOutcome::NoMatches => println!("No papers found."),
        RunOutcome::Report { rows, saved_to } => match saved_to {
            Some(path) => println!("Results saved to {}", path.display()),
            None => output::print_table(&rows),
        },
    }

    Ok(())
}
