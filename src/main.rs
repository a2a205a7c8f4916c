//! # dinodex CLI
//!
//! Two entry points into the scraping pipeline:
//!
//! - `serve`: run the HTTP API (`GET /api/scraper`) for the browser client
//! - `scrape`: run the pipeline once and print the JSON array to stdout

use clap::{Parser, Subcommand};
use dinodex::scrape::ScrapeConfig;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Scrapes dinosaur profiles, enriches them with Wikipedia clade data and serves them as JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Run one scrape and print the JSON array to stdout
    Scrape,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ScrapeConfig::default();

    match cli.command {
        Commands::Serve { port } => dinodex::server::serve(config, port).await,
        Commands::Scrape => {
            let entries = dinodex::pipeline::run(&config).await?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
            Ok(())
        }
    }
}
