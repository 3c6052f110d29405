mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use movietable_lib::cache::MemoryCache;
use movietable_lib::{CachedClient, MissingDirector};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "movietable")]
#[command(about = "Browse the movie catalogue as a paginated, sortable table")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URL of the content API (falls back to MOVIES_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Show movies without a director under this name instead of failing
    #[arg(long, global = true)]
    placeholder_director: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a page of movies
    List(commands::movies::ListArgs),
    /// Show a single movie
    Show(commands::show::ShowArgs),
}

/// `RUST_LOG` plus info-level output from the binary and every workspace crate.
fn log_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("movietable=info".parse()?)
        .add_directive("movies_api=info".parse()?))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("MOVIES_API_URL").ok());

    let cache = MemoryCache::from_env();
    let mut client = match base_url {
        Some(url) => CachedClient::with_base_url(&url, cache),
        None => CachedClient::new(cache),
    };
    if let Some(name) = cli.placeholder_director.clone() {
        client = client.with_missing_director(MissingDirector::Placeholder(name));
    }
    tracing::debug!("Using content API at {}", client.base_url());

    match &cli.command {
        Commands::List(args) => commands::movies::run(args, &client, &format).await?,
        Commands::Show(args) => commands::show::run(args, &client, &format).await?,
    }

    Ok(())
}
