//! unidata CLI
//!
//! Command-line interface for the unidata university directory proxy.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use unidata_api::{ApiConfig, ApiServer};
use unidata_cache::{MemoryStore, RedisStore};
use unidata_core::constants::DEFAULT_API_PORT;
use unidata_core::traits::CacheStore;
use unidata_directory::{DirectoryConfig, LookupConfig, LookupService};

/// unidata - University directory lookup proxy
#[derive(Parser)]
#[command(name = "unidata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_API_PORT)]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Query the directory once and print the result
    Lookup {
        /// Lookup term, used verbatim as the cache key
        term: String,
        /// Use an in-memory cache instead of Redis for this run
        #[arg(long)]
        no_cache: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "unidata=debug,info"
    } else {
        "unidata=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, &bind).await,
        Commands::Lookup { term, no_cache } => cmd_lookup(&term, no_cache).await,
    }
}

/// Run the API server
async fn cmd_serve(port: u16, bind: &str) -> Result<()> {
    let config = ApiConfig::from_env();

    let store = Arc::new(
        RedisStore::new(&config.redis_url).context("failed to configure Redis cache store")?,
    );

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .context("invalid bind address")?;

    println!(
        "{}",
        format!("unidata API listening on http://{}", addr).green().bold()
    );

    ApiServer::new(config, store)
        .run(addr)
        .await
        .context("server terminated")?;

    Ok(())
}

/// One-shot lookup printed to stdout
async fn cmd_lookup(term: &str, no_cache: bool) -> Result<()> {
    let config = ApiConfig::from_env();

    let store: Arc<dyn CacheStore> = if no_cache {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(
            RedisStore::new(&config.redis_url).context("failed to configure Redis cache store")?,
        )
    };

    let mut provider = DirectoryConfig::with_base_url(&config.provider_url);
    if let Some(secs) = config.upstream_timeout_seconds {
        provider = provider.with_timeout(secs);
    }

    let service = LookupService::with_config(
        store,
        LookupConfig {
            provider,
            ..Default::default()
        },
    );

    let value = service.lookup(term).await?;

    if let Some(records) = value.as_array() {
        println!(
            "{}",
            format!("{} record(s) for '{}'", records.len(), term).cyan().bold()
        );
    }
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}
