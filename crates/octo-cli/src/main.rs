mod product;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "octo-cli")]
#[command(about = "Cuddly Octopus product page lookup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch product pages and print each decoded record as JSON
    Product {
        /// Product page URLs, e.g. `https://cuddlyoctopus.com/product/asuna/`
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print one record per line instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = octo_core::load_fetch_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Product { urls, compact } => product::run(&config, &urls, compact).await,
    }
}

#[cfg(test)]
mod tests;
